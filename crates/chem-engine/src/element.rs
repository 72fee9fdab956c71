//! Tabla periódica reducida usada por el parser, la preparación y los
//! descriptores. Sólo incluye los elementos que aparecen en química
//! orgánica/medicinal habitual.

/// Elemento químico con los datos que consume el motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub atomic_weight: f64,
    /// Valencias permitidas en orden creciente (regla OpenSMILES).
    pub valences: &'static [u8],
    /// Polarizabilidad atómica (Å^3), 0.0 si no se conoce.
    pub polarizability: f64,
}

impl Element {
    /// Valencia máxima admitida por el elemento.
    pub fn max_valence(&self) -> u8 {
        self.valences.last().copied().unwrap_or(0)
    }

    /// Menor valencia permitida que acomoda `used` enlaces.
    pub fn default_valence(&self, used: u8) -> Option<u8> {
        self.valences.iter().copied().find(|&v| v >= used)
    }
}

static ELEMENTS: &[Element] = &[
    Element { atomic_number: 1, symbol: "H", atomic_weight: 1.008, valences: &[1], polarizability: 0.666793 },
    Element { atomic_number: 2, symbol: "He", atomic_weight: 4.003, valences: &[0], polarizability: 0.204956 },
    Element { atomic_number: 3, symbol: "Li", atomic_weight: 6.941, valences: &[1], polarizability: 24.3 },
    Element { atomic_number: 4, symbol: "Be", atomic_weight: 9.012, valences: &[2], polarizability: 5.6 },
    Element { atomic_number: 5, symbol: "B", atomic_weight: 10.81, valences: &[3], polarizability: 3.03 },
    Element { atomic_number: 6, symbol: "C", atomic_weight: 12.011, valences: &[4], polarizability: 1.76 },
    Element { atomic_number: 7, symbol: "N", atomic_weight: 14.007, valences: &[3, 5], polarizability: 1.1 },
    Element { atomic_number: 8, symbol: "O", atomic_weight: 15.999, valences: &[2], polarizability: 0.802 },
    Element { atomic_number: 9, symbol: "F", atomic_weight: 18.998, valences: &[1], polarizability: 0.557 },
    Element { atomic_number: 10, symbol: "Ne", atomic_weight: 20.180, valences: &[0], polarizability: 0.3956 },
    Element { atomic_number: 11, symbol: "Na", atomic_weight: 22.990, valences: &[1], polarizability: 23.6 },
    Element { atomic_number: 12, symbol: "Mg", atomic_weight: 24.305, valences: &[2], polarizability: 10.6 },
    Element { atomic_number: 13, symbol: "Al", atomic_weight: 26.982, valences: &[3], polarizability: 6.8 },
    Element { atomic_number: 14, symbol: "Si", atomic_weight: 28.086, valences: &[4], polarizability: 5.38 },
    Element { atomic_number: 15, symbol: "P", atomic_weight: 30.974, valences: &[3, 5], polarizability: 3.63 },
    Element { atomic_number: 16, symbol: "S", atomic_weight: 32.06, valences: &[2, 4, 6], polarizability: 2.9 },
    Element { atomic_number: 17, symbol: "Cl", atomic_weight: 35.45, valences: &[1], polarizability: 2.18 },
    Element { atomic_number: 18, symbol: "Ar", atomic_weight: 39.948, valences: &[0], polarizability: 1.6411 },
    Element { atomic_number: 19, symbol: "K", atomic_weight: 39.098, valences: &[1], polarizability: 43.4 },
    Element { atomic_number: 20, symbol: "Ca", atomic_weight: 40.078, valences: &[2], polarizability: 22.8 },
    Element { atomic_number: 26, symbol: "Fe", atomic_weight: 55.845, valences: &[2, 3], polarizability: 8.4 },
    Element { atomic_number: 29, symbol: "Cu", atomic_weight: 63.546, valences: &[1, 2], polarizability: 6.1 },
    Element { atomic_number: 30, symbol: "Zn", atomic_weight: 65.38, valences: &[2], polarizability: 7.1 },
    Element { atomic_number: 34, symbol: "Se", atomic_weight: 78.971, valences: &[2, 4, 6], polarizability: 3.77 },
    Element { atomic_number: 35, symbol: "Br", atomic_weight: 79.904, valences: &[1], polarizability: 3.05 },
    Element { atomic_number: 50, symbol: "Sn", atomic_weight: 118.71, valences: &[2, 4], polarizability: 7.7 },
    Element { atomic_number: 53, symbol: "I", atomic_weight: 126.904, valences: &[1], polarizability: 5.35 },
];

/// Busca un elemento por su símbolo ("C", "Cl").
pub fn by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Busca un elemento por número atómico.
pub fn by_number(atomic_number: u8) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.atomic_number == atomic_number)
}
