use clap::Parser;
use std::process;
use todo::cli::{Cli, Commands};
use todo::cli_handlers;

fn main() {
    // Diagnostics go to stderr so list output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = cli.file.as_path();

    let result = match cli.command {
        Commands::Add { title } => cli_handlers::handle_add(file, &title),
        Commands::List => cli_handlers::handle_list(file),
        Commands::Done { position } => cli_handlers::handle_done(file, position),
        Commands::Delete { position } => cli_handlers::handle_delete(file, position),
        Commands::Merge { source } => cli_handlers::handle_merge(file, &source),
        Commands::Lists { dir } => cli_handlers::handle_lists(&dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
