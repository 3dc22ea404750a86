use rustc_hash::FxHashMap;
use std::fmt::Display;

/// A trait for objects that give truth values to symbol names.
///
/// Sentences are evaluated against valuations; a symbol with no value makes the evaluation fail.
pub trait Valuation {
    /// Returns the value given to the symbol with the provided name, if any.
    fn value_of(&self, name: &str) -> Option<bool>;
}

/// An assignment of truth values to symbol names.
///
/// # Example
///
/// ```
/// use entailment_rs::{Model, Valuation};
///
/// let model = Model::from_iter([("rain", true)]);
/// assert_eq!(Some(true), model.value_of("rain"));
/// assert_eq!(None, model.value_of("wet"));
///
/// let extended = model.with("wet", false);
/// assert_eq!(Some(false), extended.value_of("wet"));
/// assert_eq!(None, model.value_of("wet"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model(FxHashMap<String, bool>);

impl Model {
    /// Builds an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a symbol, replacing the previous one if needed.
    pub fn set<S>(&mut self, name: S, value: bool)
    where
        S: Into<String>,
    {
        self.0.insert(name.into(), value);
    }

    /// Returns a copy of this model in which the symbol is set to the provided value.
    ///
    /// The current model is left untouched.
    #[must_use]
    pub fn with<S>(&self, name: S, value: bool) -> Self
    where
        S: Into<String>,
    {
        let mut extended = self.clone();
        extended.set(name, value);
        extended
    }

    /// Returns the value of a symbol, if it is set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    /// Returns the number of symbols set in this model.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff no symbol is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the symbols and their values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Valuation for Model {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name)
    }
}

impl<S> FromIterator<(S, bool)> for Model
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_unstable();
        write!(f, "{{")?;
        for (i, (name, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces() {
        let mut model = Model::new();
        assert!(model.is_empty());
        model.set("a", true);
        model.set("a", false);
        assert_eq!(1, model.len());
        assert_eq!(Some(false), model.get("a"));
    }

    #[test]
    fn test_with_does_not_alias() {
        let base = Model::from_iter([("a", true)]);
        let left = base.with("b", true);
        let right = base.with("b", false);
        assert_eq!(Some(true), left.get("b"));
        assert_eq!(Some(false), right.get("b"));
        assert_eq!(None, base.get("b"));
    }

    #[test]
    fn test_display_sorted() {
        let model = Model::from_iter([("wet", false), ("rain", true)]);
        assert_eq!("{rain: true, wet: false}", format!("{model}"));
    }
}
