use super::Assignment;
use crate::{EvaluationError, Model, Sentence};
use std::fmt::Display;

/// The truth table of a sentence.
///
/// The rows are given for every assignment of the symbols of the sentence, sorted by name.
/// They follow the same order as the entailment checker: the first symbol is set to `true` in the first half of the rows.
///
/// # Example
///
/// ```
/// use entailment_rs::{Implication, Sentence, Symbol, TruthTable};
///
/// let sentence = Sentence::from(Implication::new(Symbol::new("rain"), Symbol::new("wet")));
/// let table = TruthTable::new(&sentence).unwrap();
/// assert_eq!(["rain", "wet"], table.symbols());
/// assert_eq!(4, table.rows().len());
/// assert_eq!(3, table.n_models());
/// assert_eq!((vec![true, false], false), table.rows()[1]);
/// ```
#[derive(Debug, Clone)]
pub struct TruthTable {
    symbols: Vec<String>,
    rows: Vec<(Vec<bool>, bool)>,
}

impl TruthTable {
    /// Computes the truth table of a sentence.
    ///
    /// The table has `2^n` rows for `n` symbols; it is only practical up to around twenty symbols.
    ///
    /// # Errors
    ///
    /// An error is returned if the sentence cannot be evaluated; this never happens for well-formed sentences.
    pub fn new(sentence: &Sentence) -> Result<Self, EvaluationError> {
        let mut symbols = sentence.symbols().into_iter().collect::<Vec<_>>();
        symbols.sort_unstable();
        let mut rows = Vec::new();
        fill_rows(sentence, Assignment::new(&symbols), &mut rows)?;
        Ok(Self { symbols, rows })
    }

    /// Returns the sorted names of the symbols of the sentence.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the rows of the table.
    ///
    /// Each row is made of the values of the symbols (in the order given by [`symbols`](Self::symbols)) and the value of the sentence.
    #[must_use]
    pub fn rows(&self) -> &[(Vec<bool>, bool)] {
        &self.rows
    }

    /// Returns the number of rows in which the sentence holds.
    #[must_use]
    pub fn n_models(&self) -> usize {
        self.rows.iter().filter(|(_, v)| *v).count()
    }

    /// Iterates over the assignments in which the sentence holds.
    pub fn models(&self) -> impl Iterator<Item = Model> + '_ {
        self.rows.iter().filter(|(_, v)| *v).map(|(values, _)| {
            self.symbols
                .iter()
                .zip(values.iter())
                .map(|(s, v)| (s.as_str(), *v))
                .collect()
        })
    }
}

fn fill_rows(
    sentence: &Sentence,
    assignment: Assignment,
    rows: &mut Vec<(Vec<bool>, bool)>,
) -> Result<(), EvaluationError> {
    if assignment.is_complete() {
        let value = sentence.evaluate(&assignment)?;
        rows.push((assignment.fixed_values().collect(), value));
        return Ok(());
    }
    fill_rows(sentence, assignment.extended(true), rows)?;
    fill_rows(sentence, assignment.extended(false), rows)
}

fn bool_str(b: bool) -> &'static str {
    if b {
        "T"
    } else {
        "F"
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self
            .symbols
            .iter()
            .map(|s| s.chars().count())
            .collect::<Vec<_>>();
        for (s, w) in self.symbols.iter().zip(widths.iter().copied()) {
            write!(f, "{s:>w$} ")?;
        }
        writeln!(f, "| value")?;
        for (values, value) in &self.rows {
            for (v, w) in values.iter().zip(widths.iter().copied()) {
                write!(f, "{:>w$} ", bool_str(*v))?;
            }
            writeln!(f, "| {}", bool_str(*value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Biconditional, Or, Symbol};

    #[test]
    fn test_symbol() {
        let table = TruthTable::new(&Symbol::new("a").into()).unwrap();
        assert_eq!(
            vec![(vec![true], true), (vec![false], false)],
            table.rows().to_vec()
        );
        assert_eq!(1, table.n_models());
    }

    #[test]
    fn test_or_three() {
        let sentence: Sentence = Or::new([Symbol::new("a"), Symbol::new("b"), Symbol::new("c")])
            .unwrap()
            .into();
        let table = TruthTable::new(&sentence).unwrap();
        assert_eq!(8, table.rows().len());
        assert_eq!(7, table.n_models());
        assert_eq!((vec![false, false, false], false), table.rows()[7]);
    }

    #[test]
    fn test_many_symbols() {
        let names = (0..12).map(|i| format!("x{i}")).collect::<Vec<_>>();
        let sentence: Sentence = Or::new(names.iter().map(Symbol::new)).unwrap().into();
        let table = TruthTable::new(&sentence).unwrap();
        assert_eq!(12, table.symbols().len());
        assert_eq!(4096, table.rows().len());
        assert_eq!(4095, table.n_models());
        assert_eq!((vec![false; 12], false), table.rows()[4095]);
    }

    #[test]
    fn test_models() {
        let sentence: Sentence = Biconditional::new(Symbol::new("a"), Symbol::new("b")).into();
        let table = TruthTable::new(&sentence).unwrap();
        let models = table.models().collect::<Vec<_>>();
        assert_eq!(2, models.len());
        for model in models {
            assert_eq!(model.get("a"), model.get("b"));
            assert!(sentence.evaluate(&model).unwrap());
        }
    }

    #[test]
    fn test_display() {
        let sentence: Sentence = Biconditional::new(Symbol::new("a"), Symbol::new("bc")).into();
        let table = TruthTable::new(&sentence).unwrap();
        let expected = "a bc | value\nT  T | T\nT  F | F\nF  T | F\nF  F | T\n";
        assert_eq!(expected, format!("{table}"));
    }
}
