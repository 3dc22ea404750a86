mod errors;
pub use errors::EvaluationError;
pub use errors::SentenceError;

mod formula;
pub use formula::parenthesize;

mod model;
pub use model::Model;
pub use model::Valuation;

mod sentence;
pub use sentence::Biconditional;
pub use sentence::Implication;
pub use sentence::Or;
pub use sentence::Sentence;
pub use sentence::Symbol;
