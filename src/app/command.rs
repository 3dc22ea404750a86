use clap::{App, ArgMatches};

/// A subcommand of the application.
pub(crate) trait Command<'a> {
    /// The name of the subcommand, as typed on the command line.
    fn name(&self) -> &str;

    /// The clap definition of the subcommand and its arguments.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Runs the subcommand given the matched arguments.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> anyhow::Result<()>;
}
