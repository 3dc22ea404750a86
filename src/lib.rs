#![doc = include_str!("../README.md")]

mod algorithms;
pub use algorithms::model_check;
pub use algorithms::ModelChecker;
pub use algorithms::TruthTable;

mod core;
pub use core::parenthesize;
pub use core::Biconditional;
pub use core::EvaluationError;
pub use core::Implication;
pub use core::Model;
pub use core::Or;
pub use core::Sentence;
pub use core::SentenceError;
pub use core::Symbol;
pub use core::Valuation;
