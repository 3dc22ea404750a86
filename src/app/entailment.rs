use super::{cli_manager, common};
use anyhow::Context;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use entailment_rs::ModelChecker;
use log::info;

#[derive(Default)]
pub struct Command;

const CMD_NAME: &str = "entailment";

const ARG_PARALLEL_DEPTH: &str = "ARG_PARALLEL_DEPTH";

impl<'a> super::command::Command<'a> for Command {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("checks whether the knowledge bases of the catalog entail their queries")
            .setting(AppSettings::DisableVersion)
            .arg(common::arg_name())
            .arg(cli_manager::logging_level_cli_arg())
            .arg(
                Arg::with_name(ARG_PARALLEL_DEPTH)
                    .short("p")
                    .long("parallel-depth")
                    .empty_values(false)
                    .multiple(false)
                    .help("sets the number of enumeration levels explored in parallel"),
            )
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> anyhow::Result<()> {
        let parallel_depth = match arg_matches.value_of(ARG_PARALLEL_DEPTH) {
            Some(str_depth) => str::parse::<usize>(str_depth)
                .context("while parsing the parallel depth provided on the command line")?,
            None => 0,
        };
        for entry in common::read_catalog_entries(arg_matches)? {
            let mut checker = ModelChecker::new(&entry.knowledge, &entry.query);
            checker.set_parallel_depth(parallel_depth);
            let entailed = common::log_time_for_step(&format!("checking {}", entry.name), || {
                checker.check()
            })
            .with_context(|| format!(r#"while checking catalog entry "{}""#, entry.name))?;
            info!(
                "{}: {} models checked over {} symbols",
                entry.name,
                checker.n_checked_models(),
                checker.symbols().len()
            );
            println!(
                "{}: {} |= {}: {entailed}",
                entry.name, entry.knowledge, entry.query
            );
        }
        Ok(())
    }
}
