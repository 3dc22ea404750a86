use super::catalog::{self, CatalogEntry};
use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches};
use log::info;
use std::time::Instant;

const ARG_NAME: &str = "ARG_NAME";

pub(crate) fn arg_name<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_NAME)
        .short("n")
        .long("name")
        .empty_values(false)
        .multiple(false)
        .help("the name of the catalog entry to use (see the list command)")
}

/// Returns the catalog entries selected on the command line, or all of them if no name was given.
pub(crate) fn read_catalog_entries(arg_matches: &ArgMatches<'_>) -> Result<Vec<CatalogEntry>> {
    let entries = catalog::catalog()?;
    match arg_matches.value_of(ARG_NAME) {
        None => Ok(entries),
        Some(name) => {
            let names = entries.iter().map(|e| e.name).collect::<Vec<_>>().join(", ");
            let entry = entries.into_iter().find(|e| e.name == name).ok_or_else(|| {
                anyhow!(r#"no catalog entry named "{name}" (expected one of {names})"#)
            })?;
            Ok(vec![entry])
        }
    }
}

pub(crate) fn log_time_for_step<F, T>(step_name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    info!("starting {step_name}");
    let start = Instant::now();
    let result = f();
    info!("{step_name} took {:.3}s", start.elapsed().as_secs_f64());
    result
}
