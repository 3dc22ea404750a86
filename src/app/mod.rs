pub(crate) mod app_helper;

mod catalog;

pub(crate) mod cli_manager;

pub(crate) mod command;

mod common;

mod entailment;
pub(crate) use entailment::Command as EntailmentCommand;

mod list;
pub(crate) use list::Command as ListCommand;

mod truth_table;
pub(crate) use truth_table::Command as TruthTableCommand;
