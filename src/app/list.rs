use super::{catalog, cli_manager};
use clap::{App, AppSettings, ArgMatches, SubCommand};

#[derive(Default)]
pub struct Command;

const CMD_NAME: &str = "list";

impl<'a> super::command::Command<'a> for Command {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("lists the entries of the catalog")
            .setting(AppSettings::DisableVersion)
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> anyhow::Result<()> {
        for entry in catalog::catalog()? {
            println!("{}: {}", entry.name, entry.description);
            println!("  knowledge: {}", entry.knowledge);
            println!("  query: {}", entry.query);
        }
        Ok(())
    }
}
