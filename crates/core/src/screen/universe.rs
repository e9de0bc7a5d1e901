use crate::domain::index::{IndexConstituent, IndexName};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniverseEntry {
    pub symbol: String,
    pub display_name: String,
}

/// Symbol → display name, iterated in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct Universe {
    entries: Vec<UniverseEntry>,
    positions: HashMap<String, usize>,
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or renames. A symbol seen before keeps its position; the newer name wins.
    pub fn insert(&mut self, symbol: impl Into<String>, display_name: impl Into<String>) {
        let symbol = symbol.into();
        let display_name = display_name.into();
        match self.positions.get(&symbol) {
            Some(&idx) => self.entries[idx].display_name = display_name,
            None => {
                self.positions.insert(symbol.clone(), self.entries.len());
                self.entries.push(UniverseEntry {
                    symbol,
                    display_name,
                });
            }
        }
    }

    pub fn merge(&mut self, constituents: &[IndexConstituent]) {
        for c in constituents {
            self.insert(c.symbol, c.display_name);
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.positions
            .get(symbol)
            .map(|&idx| self.entries[idx].display_name.as_str())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.positions.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UniverseEntry> {
        self.entries.iter()
    }
}

impl<S: Into<String>, N: Into<String>> FromIterator<(S, N)> for Universe {
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        let mut out = Universe::new();
        for (symbol, name) in iter {
            out.insert(symbol, name);
        }
        out
    }
}

pub fn build_universe(selected_indices: &[IndexName]) -> Universe {
    let mut out = Universe::new();
    for index in selected_indices {
        out.merge(index.constituents());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn empty_selection_builds_empty_universe() {
        let u = build_universe(&[]);
        assert!(u.is_empty());
        assert_eq!(u.len(), 0);
    }

    #[test]
    fn key_set_is_union_of_selected_indices() {
        let selections: [&[IndexName]; 4] = [
            &[IndexName::Dax],
            &[IndexName::DowJones, IndexName::Sp500],
            &[IndexName::Nikkei, IndexName::Dax, IndexName::DowJones],
            &IndexName::ALL,
        ];

        for selected in selections {
            let u = build_universe(selected);
            let got: BTreeSet<&str> = u.iter().map(|e| e.symbol.as_str()).collect();
            let expected: BTreeSet<&str> = selected
                .iter()
                .flat_map(|i| i.constituents().iter().map(|c| c.symbol))
                .collect();
            assert_eq!(got, expected);
            assert!(!u.is_empty());
        }
    }

    #[test]
    fn later_index_overwrites_display_name_but_keeps_position() {
        let u = build_universe(&[IndexName::DowJones, IndexName::Sp500]);
        assert_eq!(u.get("AAPL"), Some("Apple Inc."));
        assert_eq!(u.iter().next().map(|e| e.symbol.as_str()), Some("AAPL"));

        let reversed = build_universe(&[IndexName::Sp500, IndexName::DowJones]);
        assert_eq!(reversed.get("AAPL"), Some("Apple"));
    }

    #[test]
    fn selecting_an_index_twice_is_harmless() {
        let once = build_universe(&[IndexName::Dax]);
        let twice = build_universe(&[IndexName::Dax, IndexName::Dax]);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn collects_from_pairs_with_last_write_wins() {
        let u: Universe = [("AAA", "Alpha"), ("BBB", "Beta"), ("AAA", "Alpha Corp")]
            .into_iter()
            .collect();
        assert_eq!(u.len(), 2);
        assert_eq!(u.get("AAA"), Some("Alpha Corp"));
        assert!(u.contains("BBB"));
        assert!(!u.contains("CCC"));
    }
}
