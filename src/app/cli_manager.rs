use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::str::FromStr;

const ARG_LOGGING_LEVEL: &str = "ARG_LOGGING_LEVEL";

const LOGGING_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_LOGGING_LEVEL)
        .long("logging-level")
        .multiple(false)
        .possible_values(&LOGGING_LEVELS)
        .default_value("info")
        .help("sets the minimal logging level")
}

pub(crate) fn init_logging(arg_matches: &ArgMatches<'_>) -> Result<()> {
    let level = match arg_matches.value_of(ARG_LOGGING_LEVEL) {
        Some(str_level) => LevelFilter::from_str(str_level)
            .map_err(|e| anyhow!(r#"while parsing the logging level "{str_level}": {e}"#))?,
        None => LevelFilter::Info,
    };
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}] [{:<5}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                colors.color(record.level()),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("while initializing the logger")
}
