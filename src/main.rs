//! See the library documentation for more information.

mod app;

use app::{
    app_helper::AppHelper, command::Command, EntailmentCommand, ListCommand, TruthTableCommand,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "entailment-rs, propositional entailment by model checking.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::<EntailmentCommand>::default(),
        Box::<ListCommand>::default(),
        Box::<TruthTableCommand>::default(),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

fn main() {
    let app = create_app_helper();
    app.launch_app();
}
