use clap::Parser;

mod args;
mod commands;
mod render;

/// Initialize the tracing subscriber.
///
/// Set `RUST_LOG` to control log levels, e.g. `RUST_LOG=tilth_query=debug`.
/// Logs go to stderr so command output stays pipeable.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = args::Cli::parse();

    match commands::run(cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
