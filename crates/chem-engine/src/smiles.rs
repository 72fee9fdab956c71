//! Parser SMILES → `MolGraph`.
//!
//! Cubre el subconjunto orgánico, átomos entre corchetes (isótopo, H,
//! carga), ramas, cierres de anillo (`1`..`9`, `%nn`) y fragmentos `.`.
//! Los marcadores estereoquímicos (`@`, `/`, `\`) se aceptan y descartan.
use std::collections::BTreeMap;

use crate::core::{Atom, Bond, BondOrder, MolGraph};
use crate::element;
use crate::EngineError;

pub fn parse(smiles: &str) -> Result<MolGraph, EngineError> {
    let mut parser = Parser::new(smiles.trim());
    parser.run()?;
    parser.finish()?;
    parser.assign_implicit_hydrogens();
    let Parser { atoms, bonds, .. } = parser;
    if atoms.is_empty() {
        return Err(EngineError::Parse("SMILES contains no atoms".into()));
    }
    Ok(MolGraph::new(atoms, bonds))
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    open_rings: BTreeMap<u16, (usize, Option<BondOrder>)>,
    branches: Vec<usize>,
    prev: Option<usize>,
    pending: Option<BondOrder>,
}

/// Carga formal máxima aceptada en un átomo entre corchetes.
pub const MAX_CHARGE: u32 = 15;

fn parse_error(msg: impl Into<String>, pos: usize) -> EngineError {
    EngineError::Parse(format!("{} at position {}", msg.into(), pos))
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input: input.as_bytes(),
               pos: 0,
               atoms: Vec::new(),
               bonds: Vec::new(),
               open_rings: BTreeMap::new(),
               branches: Vec::new(),
               prev: None,
               pending: None }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn run(&mut self) -> Result<(), EngineError> {
        while let Some(ch) = self.peek() {
            match ch {
                b'(' => {
                    self.bump();
                    let prev = self.prev.ok_or_else(|| parse_error("branch without preceding atom", self.pos))?;
                    self.branches.push(prev);
                }
                b')' => {
                    self.bump();
                    self.prev = Some(self.branches.pop().ok_or_else(|| parse_error("unmatched ')'", self.pos))?);
                    self.pending = None;
                }
                b'-' => self.set_bond(BondOrder::Single),
                b'=' => self.set_bond(BondOrder::Double),
                b'#' => self.set_bond(BondOrder::Triple),
                b':' => self.set_bond(BondOrder::Aromatic),
                b'/' | b'\\' => {
                    self.bump();
                }
                b'.' => {
                    self.bump();
                    self.prev = None;
                    self.pending = None;
                }
                b'%' => {
                    self.bump();
                    let hi = self.bump().filter(u8::is_ascii_digit);
                    let lo = self.bump().filter(u8::is_ascii_digit);
                    match (hi, lo) {
                        (Some(h), Some(l)) => self.ring_closure((h - b'0') as u16 * 10 + (l - b'0') as u16)?,
                        _ => return Err(parse_error("expected two digits after '%'", self.pos)),
                    }
                }
                b'0'..=b'9' => {
                    self.bump();
                    self.ring_closure((ch - b'0') as u16)?;
                }
                b'[' => self.bracket_atom()?,
                b'B' | b'C' | b'N' | b'O' | b'P' | b'S' | b'F' | b'I' | b'b' | b'c' | b'n' | b'o' | b'p' | b's' => {
                    self.organic_atom()?
                }
                other => return Err(parse_error(format!("unexpected character '{}'", other as char), self.pos)),
            }
        }
        Ok(())
    }

    fn set_bond(&mut self, order: BondOrder) {
        self.bump();
        self.pending = Some(order);
    }

    fn organic_atom(&mut self) -> Result<(), EngineError> {
        let start = self.pos;
        let ch = self.bump().ok_or_else(|| parse_error("unexpected end of input", start))?;
        let aromatic = ch.is_ascii_lowercase();
        let symbol = match (ch, self.peek()) {
            (b'B', Some(b'r')) => {
                self.bump();
                "Br"
            }
            (b'C', Some(b'l')) => {
                self.bump();
                "Cl"
            }
            _ => match ch.to_ascii_uppercase() {
                b'B' => "B",
                b'C' => "C",
                b'N' => "N",
                b'O' => "O",
                b'P' => "P",
                b'S' => "S",
                b'F' => "F",
                _ => "I",
            },
        };
        let elem = element::by_symbol(symbol).ok_or_else(|| parse_error(format!("unknown element '{symbol}'"), start))?;
        let mut atom = Atom::new(elem.atomic_number);
        atom.aromatic = aromatic;
        self.push_atom(atom);
        Ok(())
    }

    fn bracket_atom(&mut self) -> Result<(), EngineError> {
        let start = self.pos;
        self.bump();
        let isotope = match self.number()? {
            Some(n) => Some(u16::try_from(n).map_err(|_| parse_error(format!("isotope {n} out of range"), start))?),
            None => None,
        };

        let first = self.bump().ok_or_else(|| parse_error("unterminated bracket atom", start))?;
        if !first.is_ascii_alphabetic() {
            return Err(parse_error(format!("unexpected character '{}' in bracket atom", first as char), self.pos));
        }
        let aromatic = first.is_ascii_lowercase();
        let upper = first.to_ascii_uppercase() as char;
        let mut symbol = upper.to_string();
        if let Some(next) = self.peek().filter(u8::is_ascii_lowercase) {
            let two = format!("{upper}{}", next as char);
            if element::by_symbol(&two).is_some() {
                self.bump();
                symbol = two;
            }
        }
        let elem = element::by_symbol(&symbol).ok_or_else(|| parse_error(format!("unknown element '{symbol}'"), start))?;

        while self.peek() == Some(b'@') {
            self.bump();
        }

        let mut hydrogens = 0u8;
        if self.peek() == Some(b'H') {
            self.bump();
            hydrogens = match self.number()? {
                Some(n) => u8::try_from(n).map_err(|_| parse_error(format!("hydrogen count {n} out of range"), start))?,
                None => 1,
            };
        }

        let mut charge = 0i8;
        if let Some(sign @ (b'+' | b'-')) = self.peek() {
            self.bump();
            let magnitude = match self.number()? {
                Some(n) => n,
                None => {
                    let mut n = 1u32;
                    while self.peek() == Some(sign) {
                        self.bump();
                        n = n.saturating_add(1);
                    }
                    n
                }
            };
            if magnitude > MAX_CHARGE {
                return Err(parse_error(format!("charge magnitude {magnitude} out of range"), start));
            }
            // |carga| <= MAX_CHARGE cabe en i8
            let magnitude = magnitude as i8;
            charge = if sign == b'+' { magnitude } else { -magnitude };
        }

        if self.bump() != Some(b']') {
            return Err(parse_error("expected ']'", self.pos));
        }

        let mut atom = Atom::new(elem.atomic_number);
        atom.aromatic = aromatic;
        atom.isotope = isotope;
        atom.hydrogens = hydrogens;
        atom.charge = charge;
        atom.bracket = true;
        self.push_atom(atom);
        Ok(())
    }

    fn number(&mut self) -> Result<Option<u32>, EngineError> {
        let start = self.pos;
        let mut value: Option<u32> = None;
        while let Some(d) = self.peek().filter(u8::is_ascii_digit) {
            self.bump();
            let next = value.unwrap_or(0)
                            .checked_mul(10)
                            .and_then(|v| v.checked_add(u32::from(d - b'0')))
                            .ok_or_else(|| parse_error("number too large", start))?;
            value = Some(next);
        }
        Ok(value)
    }

    fn push_atom(&mut self, atom: Atom) {
        let idx = self.atoms.len();
        self.atoms.push(atom);
        if let Some(prev) = self.prev {
            let order = self.pending.take().unwrap_or_else(|| self.implicit_order(prev, idx));
            self.bonds.push(Bond { a: prev, b: idx, order });
        }
        self.pending = None;
        self.prev = Some(idx);
    }

    fn implicit_order(&self, a: usize, b: usize) -> BondOrder {
        if self.atoms[a].aromatic && self.atoms[b].aromatic {
            BondOrder::Aromatic
        } else {
            BondOrder::Single
        }
    }

    fn ring_closure(&mut self, label: u16) -> Result<(), EngineError> {
        let current = self.prev.ok_or_else(|| parse_error("ring closure without preceding atom", self.pos))?;
        match self.open_rings.remove(&label) {
            Some((open, open_order)) => {
                if open == current {
                    return Err(parse_error(format!("ring closure {label} bonds an atom to itself"), self.pos));
                }
                let order = self.pending.take().or(open_order).unwrap_or_else(|| self.implicit_order(open, current));
                self.bonds.push(Bond { a: open, b: current, order });
            }
            None => {
                let order = self.pending.take();
                self.open_rings.insert(label, (current, order));
            }
        }
        Ok(())
    }

    fn finish(&self) -> Result<(), EngineError> {
        if let Some(label) = self.open_rings.keys().next() {
            return Err(EngineError::Parse(format!("unclosed ring bond {label}")));
        }
        if !self.branches.is_empty() {
            return Err(EngineError::Parse(format!("{} unmatched '('", self.branches.len())));
        }
        if self.pending.is_some() {
            return Err(EngineError::Parse("dangling bond at end of SMILES".into()));
        }
        Ok(())
    }

    fn assign_implicit_hydrogens(&mut self) {
        let graph = MolGraph::new(self.atoms.clone(), self.bonds.clone());
        for (i, atom) in self.atoms.iter_mut().enumerate() {
            if atom.bracket {
                continue;
            }
            atom.hydrogens = implicit_hydrogens(&graph, i);
        }
    }
}

/// Hidrógenos implícitos de un átomo del subconjunto orgánico según la
/// valencia por defecto. Los aromáticos ceden un electrón al sistema pi.
pub(crate) fn implicit_hydrogens(graph: &MolGraph, idx: usize) -> u8 {
    let atom = &graph.atoms[idx];
    let Some(elem) = element::by_number(atom.atomic_number) else {
        return 0;
    };
    if atom.aromatic {
        let degree = graph.degree(idx) as u8;
        let has_exocyclic_double = graph.adjacency(idx)
                                        .iter()
                                        .any(|&(_, bi)| graph.bonds[bi].order == BondOrder::Double);
        let pi = if has_exocyclic_double { 2 } else { 1 };
        let valence = elem.valences.first().copied().unwrap_or(0);
        return valence.saturating_sub(degree + pi);
    }
    let used = graph.bond_order_sum(idx);
    elem.default_valence(used).map(|v| v - used).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kekule_benzene_has_six_ch() {
        let g = parse("C1=CC=CC=C1").unwrap();
        assert_eq!(g.atom_count(), 6);
        assert_eq!(g.bond_count(), 6);
        assert!(g.atoms.iter().all(|a| a.hydrogens == 1));
    }

    #[test]
    fn aromatic_benzene_and_pyridine() {
        let g = parse("c1ccccc1").unwrap();
        assert!(g.bonds.iter().all(|b| b.order == BondOrder::Aromatic));
        assert!(g.atoms.iter().all(|a| a.hydrogens == 1));
        let py = parse("c1ccncc1").unwrap();
        assert_eq!(py.atoms[3].hydrogens, 0);
    }

    #[test]
    fn ethanol_hydrogens() {
        let g = parse("CCO").unwrap();
        let hs: Vec<u8> = g.atoms.iter().map(|a| a.hydrogens).collect();
        assert_eq!(hs, vec![3, 2, 1]);
    }

    #[test]
    fn bracket_atoms_keep_explicit_counts() {
        let g = parse("[NH4+]").unwrap();
        assert_eq!(g.atoms[0].hydrogens, 4);
        assert_eq!(g.atoms[0].charge, 1);
        let g = parse("[13CH3][O-]").unwrap();
        assert_eq!(g.atoms[0].isotope, Some(13));
        assert_eq!(g.atoms[1].charge, -1);
        assert_eq!(g.atoms[1].hydrogens, 0);

        assert_eq!(parse("[Fe+3]").unwrap().atoms[0].charge, 3);
        assert_eq!(parse("[O--]").unwrap().atoms[0].charge, -2);
        assert_eq!(parse("[C-15]").unwrap().atoms[0].charge, -15);
    }

    #[test]
    fn branches_and_two_digit_rings() {
        let g = parse("CC(C)(C)C").unwrap();
        assert_eq!(g.degree(1), 4);
        assert_eq!(g.atoms[1].hydrogens, 0);
        let g = parse("C%12CCCCC%12").unwrap();
        assert_eq!(g.bond_count(), 6);
    }

    #[test]
    fn fragments_are_disconnected() {
        let g = parse("[Na+].[Cl-]").unwrap();
        assert_eq!(g.bond_count(), 0);
        assert_eq!(g.components().len(), 2);
    }

    #[test]
    fn malformed_input_is_rejected() {
        let many_plus = format!("[C{}]", "+".repeat(200));
        for bad in ["C1CC", "C(C", "C)C", "C&C", "[Xx]", "C=", "(C)", "[CH3", "",
                    "[C-128]", "[C+128]", "[C+16]", "[99999999999C]", "[CH256]", "[70000C]", many_plus.as_str()] {
            assert!(matches!(parse(bad), Err(EngineError::Parse(_))), "{bad} should fail");
        }
    }
}
