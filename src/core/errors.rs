use thiserror::Error;

/// An error raised when a sentence is evaluated under a model that misses some of its symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum EvaluationError {
    /// The model has no value for the symbol with this name.
    #[error("unbound symbol `{0}`")]
    UnboundSymbol(String),
}

/// An error raised when a sentence cannot be built from the provided parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum SentenceError {
    /// A disjunction needs at least one predicate.
    #[error("cannot build a disjunction without predicates")]
    EmptyDisjunction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            "unbound symbol `rain`",
            EvaluationError::UnboundSymbol("rain".to_string()).to_string()
        );
        assert_eq!(
            "cannot build a disjunction without predicates",
            SentenceError::EmptyDisjunction.to_string()
        );
    }
}
