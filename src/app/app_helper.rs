use super::{cli_manager, command::Command};
use clap::{App, AppSettings};
use log::{error, info};

pub(crate) struct AppHelper<'a> {
    app_name: &'a str,
    app_version: &'a str,
    authors: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> AppHelper<'a> {
    pub fn new(app_name: &'a str, app_version: &'a str, authors: &'a str, about: &'a str) -> Self {
        Self {
            app_name,
            app_version,
            authors,
            about,
            commands: Vec::new(),
        }
    }

    pub fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .version(self.app_version)
            .author(self.authors)
            .about(self.about)
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .setting(AppSettings::VersionlessSubcommands);
        for c in &self.commands {
            app = app.subcommand(c.clap_subcommand());
        }
        app
    }

    pub fn launch_app(&self) {
        let matches = self.clap_app().get_matches();
        let (name, sub_matches) = matches.subcommand();
        let Some(command) = self.commands.iter().find(|c| c.name() == name) else {
            unreachable!("clap accepted an unknown subcommand")
        };
        let Some(sub_matches) = sub_matches else {
            unreachable!("clap returned no matches for subcommand {name}")
        };
        if let Err(e) = cli_manager::init_logging(sub_matches) {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
        info!("{} {}", self.app_name, self.app_version);
        if let Err(e) = command.execute(sub_matches) {
            error!("{e:?}");
            std::process::exit(1);
        }
    }
}
