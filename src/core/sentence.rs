use super::{parenthesize, EvaluationError, SentenceError, Valuation};
use rustc_hash::FxHashSet;
use std::fmt::Display;

/// A propositional sentence.
///
/// Sentences are trees: atomic symbols are the leaves, and the inner nodes are disjunctions, implications and biconditionals.
/// Each compound node owns its children.
/// Sentences are immutable once built; equality and hashing are structural.
///
/// # Example
///
/// ```
/// use entailment_rs::{Biconditional, Model, Or, Sentence, Symbol};
///
/// let sentence: Sentence = Biconditional::new(
///     Symbol::new("a"),
///     Or::new([Symbol::new("b"), Symbol::new("c")]).unwrap(),
/// )
/// .into();
/// assert_eq!("a <=> (b ∨ c)", sentence.formula());
///
/// let model = Model::from_iter([("a", true), ("b", false), ("c", true)]);
/// assert!(sentence.evaluate(&model).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentence {
    /// An atomic symbol.
    Symbol(Symbol),
    /// A disjunction.
    Or(Or),
    /// A material implication.
    Implication(Implication),
    /// A biconditional.
    Biconditional(Biconditional),
}

impl Sentence {
    /// Evaluates the sentence under the provided valuation.
    ///
    /// # Errors
    ///
    /// An error is returned if the valuation gives no value to a symbol involved in the sentence.
    pub fn evaluate<V>(&self, model: &V) -> Result<bool, EvaluationError>
    where
        V: Valuation + ?Sized,
    {
        match self {
            Sentence::Symbol(s) => s.evaluate(model),
            Sentence::Or(s) => s.evaluate(model),
            Sentence::Implication(s) => s.evaluate(model),
            Sentence::Biconditional(s) => s.evaluate(model),
        }
    }

    /// Returns the names of the symbols involved in the sentence.
    #[must_use]
    pub fn symbols(&self) -> FxHashSet<String> {
        let mut symbols = FxHashSet::default();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut FxHashSet<String>) {
        match self {
            Sentence::Symbol(s) => {
                symbols.insert(s.name.clone());
            }
            Sentence::Or(s) => s.predicates.iter().for_each(|p| p.collect_symbols(symbols)),
            Sentence::Implication(s) => {
                s.antecedent.collect_symbols(symbols);
                s.consequent.collect_symbols(symbols);
            }
            Sentence::Biconditional(s) => {
                s.left.collect_symbols(symbols);
                s.right.collect_symbols(symbols);
            }
        }
    }

    /// Renders the sentence as an infix formula.
    #[must_use]
    pub fn formula(&self) -> String {
        match self {
            Sentence::Symbol(s) => s.formula(),
            Sentence::Or(s) => s.formula(),
            Sentence::Implication(s) => s.formula(),
            Sentence::Biconditional(s) => s.formula(),
        }
    }
}

impl Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}

/// An atomic sentence, that is a named boolean variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    /// Builds a new symbol given its name.
    #[must_use]
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self { name: name.into() }
    }

    /// Returns the name of the symbol.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the symbol in the valuation.
    ///
    /// # Errors
    ///
    /// An error is returned if the valuation has no value for this symbol.
    pub fn evaluate<V>(&self, model: &V) -> Result<bool, EvaluationError>
    where
        V: Valuation + ?Sized,
    {
        model
            .value_of(&self.name)
            .ok_or_else(|| EvaluationError::UnboundSymbol(self.name.clone()))
    }

    /// Returns the name of the symbol.
    #[must_use]
    pub fn formula(&self) -> String {
        self.name.clone()
    }
}

/// A disjunction of one or more sentences.
///
/// The order of the predicates is kept, and taken into account for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Or {
    predicates: Vec<Sentence>,
}

impl Or {
    /// Builds a disjunction from its predicates.
    ///
    /// # Errors
    ///
    /// An error is returned if no predicate is given.
    pub fn new<I, S>(predicates: I) -> Result<Self, SentenceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sentence>,
    {
        let predicates = predicates.into_iter().map(Into::into).collect::<Vec<_>>();
        if predicates.is_empty() {
            return Err(SentenceError::EmptyDisjunction);
        }
        Ok(Self { predicates })
    }

    /// Returns the predicates of the disjunction, in the order they were given.
    #[must_use]
    pub fn predicates(&self) -> &[Sentence] {
        &self.predicates
    }

    /// Returns `true` iff one of the predicates holds.
    ///
    /// All the predicates are evaluated, so that a missing symbol is always reported.
    ///
    /// # Errors
    ///
    /// An error is returned if the valuation gives no value to a symbol involved in a predicate.
    pub fn evaluate<V>(&self, model: &V) -> Result<bool, EvaluationError>
    where
        V: Valuation + ?Sized,
    {
        let mut result = false;
        for p in &self.predicates {
            result |= p.evaluate(model)?;
        }
        Ok(result)
    }

    /// Renders the disjunction; a single predicate is rendered alone.
    #[must_use]
    pub fn formula(&self) -> String {
        if let [p] = self.predicates.as_slice() {
            return p.formula();
        }
        self.predicates
            .iter()
            .map(|p| parenthesize(&p.formula()))
            .collect::<Vec<_>>()
            .join(" ∨ ")
    }
}

/// A material implication, false only when its antecedent holds and its consequent does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Implication {
    antecedent: Box<Sentence>,
    consequent: Box<Sentence>,
}

impl Implication {
    /// Builds an implication given its antecedent and its consequent.
    #[must_use]
    pub fn new<A, C>(antecedent: A, consequent: C) -> Self
    where
        A: Into<Sentence>,
        C: Into<Sentence>,
    {
        Self {
            antecedent: Box::new(antecedent.into()),
            consequent: Box::new(consequent.into()),
        }
    }

    /// Returns the antecedent.
    #[must_use]
    pub fn antecedent(&self) -> &Sentence {
        &self.antecedent
    }

    /// Returns the consequent.
    #[must_use]
    pub fn consequent(&self) -> &Sentence {
        &self.consequent
    }

    /// Evaluates the implication under the provided valuation.
    ///
    /// # Errors
    ///
    /// An error is returned if the valuation gives no value to a symbol involved in the implication.
    pub fn evaluate<V>(&self, model: &V) -> Result<bool, EvaluationError>
    where
        V: Valuation + ?Sized,
    {
        let antecedent = self.antecedent.evaluate(model)?;
        let consequent = self.consequent.evaluate(model)?;
        Ok(!antecedent || consequent)
    }

    /// Renders the implication.
    #[must_use]
    pub fn formula(&self) -> String {
        format!(
            "{} => {}",
            parenthesize(&self.antecedent.formula()),
            parenthesize(&self.consequent.formula())
        )
    }
}

/// A biconditional, that holds when both sides have the same truth value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Biconditional {
    left: Box<Sentence>,
    right: Box<Sentence>,
}

impl Biconditional {
    /// Builds a biconditional given its two sides.
    #[must_use]
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: Into<Sentence>,
        R: Into<Sentence>,
    {
        Self {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    /// Returns the left side.
    #[must_use]
    pub fn left(&self) -> &Sentence {
        &self.left
    }

    /// Returns the right side.
    #[must_use]
    pub fn right(&self) -> &Sentence {
        &self.right
    }

    /// Evaluates the biconditional under the provided valuation.
    ///
    /// # Errors
    ///
    /// An error is returned if the valuation gives no value to a symbol involved in the biconditional.
    pub fn evaluate<V>(&self, model: &V) -> Result<bool, EvaluationError>
    where
        V: Valuation + ?Sized,
    {
        Ok(self.left.evaluate(model)? == self.right.evaluate(model)?)
    }

    /// Renders the biconditional.
    #[must_use]
    pub fn formula(&self) -> String {
        format!(
            "{} <=> {}",
            parenthesize(&self.left.formula()),
            parenthesize(&self.right.formula())
        )
    }
}

macro_rules! impl_into_sentence {
    ($($t:ident),*) => {
        $(
            impl From<$t> for Sentence {
                fn from(value: $t) -> Self {
                    Sentence::$t(value)
                }
            }
        )*
    };
}

impl_into_sentence!(Symbol, Or, Implication, Biconditional);
