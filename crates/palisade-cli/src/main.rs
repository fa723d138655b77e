mod cli;
mod commands;

use cli::{CheckParams, CstParams, EventsParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let matches = build_cli().get_matches();

    let code = match matches.subcommand() {
        Some(("check", m)) => commands::check::run(CheckParams::from_matches(m).into()),
        Some(("cst", m)) => commands::cst::run(CstParams::from_matches(m).into()),
        Some(("events", m)) => commands::events::run(EventsParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    };
    std::process::exit(code);
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
