mod assignment;
pub(crate) use assignment::Assignment;

mod model_checker;
pub use model_checker::model_check;
pub use model_checker::ModelChecker;

mod truth_table;
pub use truth_table::TruthTable;
