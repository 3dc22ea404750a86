use super::Assignment;
use crate::{EvaluationError, Sentence};
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns `true` iff the knowledge base entails the query.
///
/// This is a shortcut for building a [`ModelChecker`] and calling [`check`](ModelChecker::check).
///
/// # Errors
///
/// An error is returned if a sentence cannot be evaluated; this never happens for well-formed sentences.
///
/// # Example
///
/// ```
/// use entailment_rs::{model_check, Implication, Sentence, Symbol};
///
/// let knowledge = Sentence::from(Implication::new(Symbol::new("rain"), Symbol::new("wet")));
/// let query = Sentence::from(Symbol::new("wet"));
/// // rain=false, wet=false satisfies the knowledge base but not the query
/// assert!(!model_check(&knowledge, &query).unwrap());
/// ```
pub fn model_check(knowledge: &Sentence, query: &Sentence) -> Result<bool, EvaluationError> {
    ModelChecker::new(knowledge, query).check()
}

/// A structure used to decide entailment by enumerating the assignments of the involved symbols.
///
/// The symbols are the ones of the knowledge base and of the query.
/// The enumeration is a binary tree: each level fixes a symbol, first to `true`, then to `false`.
/// A complete assignment in which the knowledge base holds but the query does not proves the entailment wrong,
/// and the remaining assignments are not considered.
/// When the entailment holds, each one of the `2^n` complete assignments is checked exactly once.
///
/// The first levels of the tree may be explored in parallel using [`set_parallel_depth`](Self::set_parallel_depth).
///
/// # Example
///
/// ```
/// use entailment_rs::{Biconditional, ModelChecker, Sentence, Symbol};
///
/// let knowledge = Sentence::from(Symbol::new("p"));
/// let query = Sentence::from(Biconditional::new(Symbol::new("p"), Symbol::new("p")));
/// let checker = ModelChecker::new(&knowledge, &query);
/// assert!(checker.check().unwrap());
/// assert_eq!(2, checker.n_checked_models());
/// ```
pub struct ModelChecker<'a> {
    knowledge: &'a Sentence,
    query: &'a Sentence,
    symbols: Vec<String>,
    parallel_depth: usize,
    n_checked_models: AtomicUsize,
}

impl<'a> ModelChecker<'a> {
    /// Builds a new model checker given a knowledge base and a query.
    #[must_use]
    pub fn new(knowledge: &'a Sentence, query: &'a Sentence) -> Self {
        let mut symbols = knowledge.symbols();
        symbols.extend(query.symbols());
        let mut symbols = symbols.into_iter().collect::<Vec<_>>();
        symbols.sort_unstable();
        Self {
            knowledge,
            query,
            symbols,
            parallel_depth: 0,
            n_checked_models: AtomicUsize::new(0),
        }
    }

    /// Sets the number of enumeration levels for which both branches are explored in parallel.
    ///
    /// The default value is 0, for a sequential enumeration.
    /// The result does not depend on this value.
    pub fn set_parallel_depth(&mut self, parallel_depth: usize) {
        self.parallel_depth = parallel_depth;
    }

    /// Returns the sorted names of the symbols involved in the knowledge base or the query.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the number of complete assignments checked by the last call to [`check`](Self::check).
    ///
    /// Each call resets the counter; concurrent calls to [`check`](Self::check) on the same checker are not supported.
    #[must_use]
    pub fn n_checked_models(&self) -> usize {
        self.n_checked_models.load(Ordering::Relaxed)
    }

    /// Returns `true` iff the query holds in every assignment in which the knowledge base holds.
    ///
    /// # Errors
    ///
    /// An error is returned if a sentence cannot be evaluated; this never happens for well-formed sentences.
    pub fn check(&self) -> Result<bool, EvaluationError> {
        debug!(
            "checking entailment over {} symbols ({} parallel levels)",
            self.symbols.len(),
            self.parallel_depth
        );
        self.n_checked_models.store(0, Ordering::Relaxed);
        let result = self.check_from(Assignment::new(&self.symbols));
        debug!(
            "entailment check ended after {} models: {:?}",
            self.n_checked_models(),
            result
        );
        result
    }

    fn check_from(&self, assignment: Assignment) -> Result<bool, EvaluationError> {
        if assignment.is_complete() {
            return self.check_complete(&assignment);
        }
        if assignment.n_fixed() < self.parallel_depth {
            let (r_true, r_false) = rayon::join(
                || self.check_from(assignment.extended(true)),
                || self.check_from(assignment.extended(false)),
            );
            Ok(r_true? && r_false?)
        } else {
            Ok(self.check_from(assignment.extended(true))?
                && self.check_from(assignment.extended(false))?)
        }
    }

    fn check_complete(&self, assignment: &Assignment) -> Result<bool, EvaluationError> {
        self.n_checked_models.fetch_add(1, Ordering::Relaxed);
        if !self.knowledge.evaluate(assignment)? {
            return Ok(true);
        }
        let holds = self.query.evaluate(assignment)?;
        if !holds {
            debug!("counter-example: {}", assignment.to_model());
        }
        Ok(holds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Biconditional, Implication, Model, Or, Symbol};

    fn sym(name: &str) -> Sentence {
        Symbol::new(name).into()
    }

    fn implies(a: Sentence, c: Sentence) -> Sentence {
        Implication::new(a, c).into()
    }

    fn iff(l: Sentence, r: Sentence) -> Sentence {
        Biconditional::new(l, r).into()
    }

    fn or(predicates: Vec<Sentence>) -> Sentence {
        Or::new(predicates).unwrap().into()
    }

    /// Checks entailment by listing the models, without the recursive enumeration.
    fn naive_check(knowledge: &Sentence, query: &Sentence) -> bool {
        let checker = ModelChecker::new(knowledge, query);
        let symbols = checker.symbols();
        (0..1_usize << symbols.len()).all(|bits| {
            let model = symbols
                .iter()
                .enumerate()
                .map(|(i, s)| (s.as_str(), bits & (1 << i) != 0))
                .collect::<Model>();
            !knowledge.evaluate(&model).unwrap() || query.evaluate(&model).unwrap()
        })
    }

    #[test]
    fn test_implication_does_not_entail_consequent() {
        let knowledge = implies(sym("rain"), sym("wet"));
        assert!(!model_check(&knowledge, &sym("wet")).unwrap());
    }

    #[test]
    fn test_tautology() {
        let knowledge = sym("p");
        let query = iff(sym("p"), sym("p"));
        assert!(model_check(&knowledge, &query).unwrap());
        let knowledge = implies(sym("a"), sym("b"));
        let query = iff(sym("c"), sym("c"));
        assert!(model_check(&knowledge, &query).unwrap());
    }

    #[test]
    fn test_knowledge_entails_itself() {
        let knowledge = or(vec![implies(sym("a"), sym("b")), sym("c")]);
        assert!(model_check(&knowledge, &knowledge).unwrap());
    }

    #[test]
    fn test_weakening() {
        let knowledge = or(vec![sym("a"), sym("b")]);
        assert!(model_check(&knowledge, &or(vec![sym("a"), sym("b"), sym("c")])).unwrap());
        assert!(!model_check(&knowledge, &sym("a")).unwrap());
    }

    #[test]
    fn test_biconditional_gives_both_implications() {
        let knowledge = iff(sym("rain"), sym("wet"));
        assert!(model_check(&knowledge, &implies(sym("wet"), sym("rain"))).unwrap());
        assert!(model_check(&knowledge, &implies(sym("rain"), sym("wet"))).unwrap());
        let knowledge = implies(sym("rain"), sym("wet"));
        assert!(!model_check(&knowledge, &implies(sym("wet"), sym("rain"))).unwrap());
    }

    #[test]
    fn test_modus_ponens_with_biconditional_encoding() {
        // rain <=> (rain => wet) holds only when rain and wet are both true
        let knowledge = iff(sym("rain"), implies(sym("rain"), sym("wet")));
        assert!(model_check(&knowledge, &sym("wet")).unwrap());
        assert!(model_check(&knowledge, &sym("rain")).unwrap());
    }

    #[test]
    fn test_agrees_with_naive_check() {
        let sentences = vec![
            sym("a"),
            or(vec![sym("a"), sym("b")]),
            implies(sym("a"), sym("b")),
            implies(sym("b"), sym("a")),
            iff(sym("a"), sym("b")),
            iff(or(vec![sym("a"), sym("b")]), sym("c")),
            implies(iff(sym("a"), sym("c")), or(vec![sym("b")])),
        ];
        for knowledge in &sentences {
            for query in &sentences {
                assert_eq!(
                    naive_check(knowledge, query),
                    model_check(knowledge, query).unwrap(),
                    "{knowledge} |= {query}"
                );
            }
        }
    }

    #[test]
    fn test_exhaustive_when_entailed() {
        for n in 0..6 {
            let names = (0..n).map(|i| format!("x{i}")).collect::<Vec<_>>();
            let knowledge = if n == 0 {
                iff(sym("y"), sym("y"))
            } else {
                or(names.iter().map(|s| sym(s)).collect())
            };
            let checker = ModelChecker::new(&knowledge, &knowledge);
            assert!(checker.check().unwrap());
            let n_symbols = checker.symbols().len();
            assert_eq!(1 << n_symbols, checker.n_checked_models());
        }
    }

    #[test]
    fn test_short_circuit_when_not_entailed() {
        let knowledge = implies(sym("rain"), sym("wet"));
        let query = sym("wet");
        let checker = ModelChecker::new(&knowledge, &query);
        assert!(!checker.check().unwrap());
        assert!(checker.n_checked_models() <= 4);
    }

    #[test]
    fn test_stops_at_first_counter_example() {
        // a=true, b=true is checked first, then a=true, b=false disproves the entailment
        let knowledge = sym("a");
        let query = sym("b");
        let checker = ModelChecker::new(&knowledge, &query);
        assert!(!checker.check().unwrap());
        assert_eq!(2, checker.n_checked_models());
    }

    #[test]
    fn test_symbols_are_sorted_union() {
        let knowledge = implies(sym("rain"), sym("wet"));
        let query = or(vec![sym("cold"), sym("wet")]);
        let checker = ModelChecker::new(&knowledge, &query);
        assert_eq!(vec!["cold", "rain", "wet"], checker.symbols());
    }

    #[test]
    fn test_parallel() {
        let knowledge = iff(
            or(vec![sym("a"), sym("b"), sym("c")]),
            implies(sym("d"), sym("e")),
        );
        let entailed = implies(implies(sym("d"), sym("e")), or(vec![sym("c"), sym("b"), sym("a")]));
        let not_entailed = implies(sym("a"), sym("d"));
        for depth in 0..7 {
            let mut checker = ModelChecker::new(&knowledge, &entailed);
            checker.set_parallel_depth(depth);
            assert!(checker.check().unwrap());
            assert_eq!(32, checker.n_checked_models());
            let mut checker = ModelChecker::new(&knowledge, &not_entailed);
            checker.set_parallel_depth(depth);
            assert!(!checker.check().unwrap());
        }
    }

    #[test]
    fn test_repeated_check_resets_counter() {
        let knowledge = sym("a");
        let checker = ModelChecker::new(&knowledge, &knowledge);
        assert!(checker.check().unwrap());
        assert!(checker.check().unwrap());
        assert_eq!(2, checker.n_checked_models());
    }
}
