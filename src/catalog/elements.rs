//! The 118 elements, in atomic-number order.

use super::Category::{self, *};

/// `(symbol, name, atomic number, atomic mass, category)`
pub(super) const ELEMENTS: [(&str, &str, u8, f64, Category); 118] = [
    ("H", "Hydrogen", 1, 1.008, Nonmetal),
    ("He", "Helium", 2, 4.003, Noble),
    ("Li", "Lithium", 3, 6.941, Alkali),
    ("Be", "Beryllium", 4, 9.012, Alkaline),
    ("B", "Boron", 5, 10.811, Metalloid),
    ("C", "Carbon", 6, 12.011, Nonmetal),
    ("N", "Nitrogen", 7, 14.007, Nonmetal),
    ("O", "Oxygen", 8, 15.999, Nonmetal),
    ("F", "Fluorine", 9, 18.998, Nonmetal),
    ("Ne", "Neon", 10, 20.180, Noble),
    ("Na", "Sodium", 11, 22.990, Alkali),
    ("Mg", "Magnesium", 12, 24.305, Alkaline),
    ("Al", "Aluminum", 13, 26.982, PostTransition),
    ("Si", "Silicon", 14, 28.086, Metalloid),
    ("P", "Phosphorus", 15, 30.974, Nonmetal),
    ("S", "Sulfur", 16, 32.065, Nonmetal),
    ("Cl", "Chlorine", 17, 35.453, Nonmetal),
    ("Ar", "Argon", 18, 39.948, Noble),
    ("K", "Potassium", 19, 39.098, Alkali),
    ("Ca", "Calcium", 20, 40.078, Alkaline),
    ("Sc", "Scandium", 21, 44.956, Transition),
    ("Ti", "Titanium", 22, 47.867, Transition),
    ("V", "Vanadium", 23, 50.942, Transition),
    ("Cr", "Chromium", 24, 51.996, Transition),
    ("Mn", "Manganese", 25, 54.938, Transition),
    ("Fe", "Iron", 26, 55.845, Transition),
    ("Co", "Cobalt", 27, 58.933, Transition),
    ("Ni", "Nickel", 28, 58.693, Transition),
    ("Cu", "Copper", 29, 63.546, Transition),
    ("Zn", "Zinc", 30, 65.38, Transition),
    ("Ga", "Gallium", 31, 69.723, PostTransition),
    ("Ge", "Germanium", 32, 72.64, Metalloid),
    ("As", "Arsenic", 33, 74.922, Metalloid),
    ("Se", "Selenium", 34, 78.96, Nonmetal),
    ("Br", "Bromine", 35, 79.904, Nonmetal),
    ("Kr", "Krypton", 36, 83.798, Noble),
    ("Rb", "Rubidium", 37, 85.468, Alkali),
    ("Sr", "Strontium", 38, 87.62, Alkaline),
    ("Y", "Yttrium", 39, 88.906, Transition),
    ("Zr", "Zirconium", 40, 91.224, Transition),
    ("Nb", "Niobium", 41, 92.906, Transition),
    ("Mo", "Molybdenum", 42, 95.96, Transition),
    ("Tc", "Technetium", 43, 98.0, Transition),
    ("Ru", "Ruthenium", 44, 101.07, Transition),
    ("Rh", "Rhodium", 45, 102.906, Transition),
    ("Pd", "Palladium", 46, 106.42, Transition),
    ("Ag", "Silver", 47, 107.868, Transition),
    ("Cd", "Cadmium", 48, 112.411, Transition),
    ("In", "Indium", 49, 114.818, PostTransition),
    ("Sn", "Tin", 50, 118.71, PostTransition),
    ("Sb", "Antimony", 51, 121.76, Metalloid),
    ("Te", "Tellurium", 52, 127.6, Metalloid),
    ("I", "Iodine", 53, 126.904, Nonmetal),
    ("Xe", "Xenon", 54, 131.293, Noble),
    ("Cs", "Cesium", 55, 132.905, Alkali),
    ("Ba", "Barium", 56, 137.327, Alkaline),
    ("La", "Lanthanum", 57, 138.905, Lanthanide),
    ("Ce", "Cerium", 58, 140.116, Lanthanide),
    ("Pr", "Praseodymium", 59, 140.908, Lanthanide),
    ("Nd", "Neodymium", 60, 144.242, Lanthanide),
    ("Pm", "Promethium", 61, 145.0, Lanthanide),
    ("Sm", "Samarium", 62, 150.36, Lanthanide),
    ("Eu", "Europium", 63, 151.964, Lanthanide),
    ("Gd", "Gadolinium", 64, 157.25, Lanthanide),
    ("Tb", "Terbium", 65, 158.925, Lanthanide),
    ("Dy", "Dysprosium", 66, 162.5, Lanthanide),
    ("Ho", "Holmium", 67, 164.93, Lanthanide),
    ("Er", "Erbium", 68, 167.259, Lanthanide),
    ("Tm", "Thulium", 69, 168.934, Lanthanide),
    ("Yb", "Ytterbium", 70, 173.054, Lanthanide),
    ("Lu", "Lutetium", 71, 174.967, Lanthanide),
    ("Hf", "Hafnium", 72, 178.49, Transition),
    ("Ta", "Tantalum", 73, 180.948, Transition),
    ("W", "Tungsten", 74, 183.84, Transition),
    ("Re", "Rhenium", 75, 186.207, Transition),
    ("Os", "Osmium", 76, 190.23, Transition),
    ("Ir", "Iridium", 77, 192.217, Transition),
    ("Pt", "Platinum", 78, 195.084, Transition),
    ("Au", "Gold", 79, 196.967, Transition),
    ("Hg", "Mercury", 80, 200.59, Transition),
    ("Tl", "Thallium", 81, 204.383, PostTransition),
    ("Pb", "Lead", 82, 207.2, PostTransition),
    ("Bi", "Bismuth", 83, 208.98, PostTransition),
    ("Po", "Polonium", 84, 209.0, PostTransition),
    ("At", "Astatine", 85, 210.0, Metalloid),
    ("Rn", "Radon", 86, 222.0, Noble),
    ("Fr", "Francium", 87, 223.0, Alkali),
    ("Ra", "Radium", 88, 226.0, Alkaline),
    ("Ac", "Actinium", 89, 227.0, Actinide),
    ("Th", "Thorium", 90, 232.038, Actinide),
    ("Pa", "Protactinium", 91, 231.036, Actinide),
    ("U", "Uranium", 92, 238.029, Actinide),
    ("Np", "Neptunium", 93, 237.0, Actinide),
    ("Pu", "Plutonium", 94, 244.0, Actinide),
    ("Am", "Americium", 95, 243.0, Actinide),
    ("Cm", "Curium", 96, 247.0, Actinide),
    ("Bk", "Berkelium", 97, 247.0, Actinide),
    ("Cf", "Californium", 98, 251.0, Actinide),
    ("Es", "Einsteinium", 99, 252.0, Actinide),
    ("Fm", "Fermium", 100, 257.0, Actinide),
    ("Md", "Mendelevium", 101, 258.0, Actinide),
    ("No", "Nobelium", 102, 259.0, Actinide),
    ("Lr", "Lawrencium", 103, 262.0, Actinide),
    ("Rf", "Rutherfordium", 104, 261.0, Transition),
    ("Db", "Dubnium", 105, 262.0, Transition),
    ("Sg", "Seaborgium", 106, 266.0, Transition),
    ("Bh", "Bohrium", 107, 264.0, Transition),
    ("Hs", "Hassium", 108, 277.0, Transition),
    ("Mt", "Meitnerium", 109, 268.0, Transition),
    ("Ds", "Darmstadtium", 110, 281.0, Transition),
    ("Rg", "Roentgenium", 111, 272.0, Transition),
    ("Cn", "Copernicium", 112, 285.0, Transition),
    ("Nh", "Nihonium", 113, 286.0, PostTransition),
    ("Fl", "Flerovium", 114, 289.0, PostTransition),
    ("Mc", "Moscovium", 115, 290.0, PostTransition),
    ("Lv", "Livermorium", 116, 293.0, PostTransition),
    ("Ts", "Tennessine", 117, 294.0, Metalloid),
    ("Og", "Oganesson", 118, 294.0, Noble),
];
