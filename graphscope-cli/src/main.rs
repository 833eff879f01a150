mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })?;

    let cli = Cli::parse();

    // graphscope warnings on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        };
        env_logger::Builder::new()
            .filter_module("graphscope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Scc { path, top } => commands::scc::run(path, *top, &cli.global),
        Command::Dijkstra {
            path,
            source,
            targets,
            unreachable,
        } => commands::dijkstra::run(
            path,
            &commands::dijkstra::DijkstraOptions {
                source: *source,
                targets,
                unreachable: *unreachable,
            },
            &cli.global,
        ),
    }
}
