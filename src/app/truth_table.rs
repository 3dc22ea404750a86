use super::{cli_manager, common};
use anyhow::Context;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use entailment_rs::TruthTable;

#[derive(Default)]
pub struct Command;

const CMD_NAME: &str = "truth-table";

const ARG_SIDE: &str = "ARG_SIDE";

impl<'a> super::command::Command<'a> for Command {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("prints the truth table of a sentence of the catalog")
            .setting(AppSettings::DisableVersion)
            .arg(common::arg_name().required(true))
            .arg(cli_manager::logging_level_cli_arg())
            .arg(
                Arg::with_name(ARG_SIDE)
                    .short("s")
                    .long("side")
                    .multiple(false)
                    .possible_values(&["knowledge", "query"])
                    .default_value("knowledge")
                    .help("the sentence of the entry to consider"),
            )
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> anyhow::Result<()> {
        for entry in common::read_catalog_entries(arg_matches)? {
            let sentence = if arg_matches.value_of(ARG_SIDE) == Some("query") {
                &entry.query
            } else {
                &entry.knowledge
            };
            let table = TruthTable::new(sentence)
                .with_context(|| format!("while computing the truth table of {sentence}"))?;
            println!("{sentence}");
            print!("{table}");
            println!("{} model(s)", table.n_models());
        }
        Ok(())
    }
}
