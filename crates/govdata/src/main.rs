use clap::Parser;

mod cli;
mod commands;

fn main() {
    init_tracing();
    let cli = cli::Cli::parse();
    if let Err(err) = commands::run(cli.command) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; primary output owns stdout.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
