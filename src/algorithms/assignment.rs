use crate::{Model, Valuation};
use bitvec::{bitvec, vec::BitVec};

/// A partial assignment over a fixed, sorted list of symbols.
///
/// Symbols are assigned in the order of the list; the first `n_fixed` ones have a value, the others are unbound.
/// Extending an assignment builds a new one, so that the two branches of a choice never share their values.
#[derive(Clone, Debug)]
pub(crate) struct Assignment<'a> {
    symbols: &'a [String],
    values: BitVec,
    n_fixed: usize,
}

impl<'a> Assignment<'a> {
    /// Builds an assignment in which no symbol is fixed.
    ///
    /// The symbols must be sorted and without duplicates.
    pub fn new(symbols: &'a [String]) -> Self {
        debug_assert!(symbols.windows(2).all(|w| w[0] < w[1]));
        Self {
            symbols,
            values: bitvec![0; symbols.len()],
            n_fixed: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.n_fixed == self.symbols.len()
    }

    pub fn n_fixed(&self) -> usize {
        self.n_fixed
    }

    /// Returns a copy of this assignment in which the next symbol is fixed to the provided value.
    pub fn extended(&self, value: bool) -> Self {
        assert!(!self.is_complete(), "cannot extend a complete assignment");
        let mut values = self.values.clone();
        values.set(self.n_fixed, value);
        Self {
            symbols: self.symbols,
            values,
            n_fixed: self.n_fixed + 1,
        }
    }

    /// Returns the values of the fixed symbols, in the order of the symbol list.
    pub fn fixed_values(&self) -> impl Iterator<Item = bool> + '_ {
        self.values[..self.n_fixed].iter().by_vals()
    }

    pub fn to_model(&self) -> Model {
        self.symbols
            .iter()
            .zip(self.fixed_values())
            .map(|(s, v)| (s.as_str(), v))
            .collect()
    }
}

impl Valuation for Assignment<'_> {
    fn value_of(&self, name: &str) -> Option<bool> {
        match self.symbols.binary_search_by(|s| s.as_str().cmp(name)) {
            Ok(i) if i < self.n_fixed => Some(self.values[i]),
            _ => None,
        }
    }
}
