//! # SVG Backend
//!
//! Writes a [`Scene`] as a standalone SVG document. Text stays text, so the
//! viewer's fonts do the shaping and no font file is needed here.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{DrawCommand, RoundedRect, Scene, TextAlign, TextBaseline};
use crate::error::{Error, Result};
use crate::style::Color;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// First choice for labels; hosts without it fall back to `sans-serif`.
pub(crate) const PRIMARY_FONT: &str = "Inter";
const FONT_FAMILY: &str = "Inter, sans-serif";

fn svg_err(e: impl std::fmt::Display) -> Error {
    Error::Svg(e.to_string())
}

/// Trim trailing zeros so coordinates read "266" rather than "266.000".
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn push_rect_attrs(el: &mut BytesStart<'_>, rect: &RoundedRect) {
    el.push_attribute(("x", num(rect.x).as_str()));
    el.push_attribute(("y", num(rect.y).as_str()));
    el.push_attribute(("width", num(rect.width).as_str()));
    el.push_attribute(("height", num(rect.height).as_str()));
    if rect.radius > 0.0 {
        el.push_attribute(("rx", num(rect.radius).as_str()));
    }
}

fn push_paint(el: &mut BytesStart<'_>, attr: &str, color: Color) {
    el.push_attribute((attr, color.to_rgb_hex().as_str()));
    if color.a < 1.0 {
        let opacity = format!("{}-opacity", attr);
        el.push_attribute((opacity.as_str(), num(color.a).as_str()));
    }
}

/// Serialize `scene` to an SVG string.
pub fn write_svg(scene: &Scene) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(svg_err)?;

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", scene.width.to_string().as_str()));
    root.push_attribute(("height", scene.height.to_string().as_str()));
    let view_box = format!("0 0 {} {}", scene.width, scene.height);
    root.push_attribute(("viewBox", view_box.as_str()));
    writer.write_event(Event::Start(root)).map_err(svg_err)?;

    for command in &scene.commands {
        match command {
            DrawCommand::Fill { rect, color } => {
                let mut el = BytesStart::new("rect");
                push_rect_attrs(&mut el, rect);
                push_paint(&mut el, "fill", *color);
                writer.write_event(Event::Empty(el)).map_err(svg_err)?;
            }
            DrawCommand::Stroke {
                rect,
                color,
                width,
                dash,
            } => {
                let mut el = BytesStart::new("rect");
                push_rect_attrs(&mut el, rect);
                el.push_attribute(("fill", "none"));
                push_paint(&mut el, "stroke", *color);
                el.push_attribute(("stroke-width", num(*width).as_str()));
                if let Some(dash) = dash {
                    let pattern = format!("{} {}", num(*dash), num(*dash));
                    el.push_attribute(("stroke-dasharray", pattern.as_str()));
                }
                writer.write_event(Event::Empty(el)).map_err(svg_err)?;
            }
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                bold,
                align,
                baseline,
                color,
            } => {
                let mut el = BytesStart::new("text");
                el.push_attribute(("x", num(*x).as_str()));
                el.push_attribute(("y", num(*y).as_str()));
                el.push_attribute(("font-family", FONT_FAMILY));
                el.push_attribute(("font-size", num(*size).as_str()));
                if *bold {
                    el.push_attribute(("font-weight", "bold"));
                }
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                };
                el.push_attribute(("text-anchor", anchor));
                let dominant = match baseline {
                    TextBaseline::Top => "text-before-edge",
                    TextBaseline::Middle => "central",
                    TextBaseline::Bottom => "text-after-edge",
                };
                el.push_attribute(("dominant-baseline", dominant));
                push_paint(&mut el, "fill", *color);
                writer.write_event(Event::Start(el)).map_err(svg_err)?;
                writer
                    .write_event(Event::Text(BytesText::new(text)))
                    .map_err(svg_err)?;
                writer
                    .write_event(Event::End(BytesEnd::new("text")))
                    .map_err(svg_err)?;
            }
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(svg_err)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(svg_err)
}
