use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// graphscope - shortest paths and strongly connected components of directed graphs
#[derive(Debug, Parser)]
#[command(name = "graphscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report the largest strongly connected components of an edge-list graph.
    Scc {
        /// Path to an edge list: one `tail head` pair per line.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Number of component sizes to report, largest first.
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Compute shortest distances over an adjacency-list graph.
    Dijkstra {
        /// Path to an adjacency list: `vertex neighbor,weight ...` per line.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Source vertex. Defaults to the first vertex of the file.
        #[arg(short, long, value_name = "VERTEX")]
        source: Option<u64>,

        /// Report only these vertices (comma separated). Defaults to every vertex.
        #[arg(short, long, value_name = "V,V,..", value_delimiter = ',')]
        targets: Vec<u64>,

        /// Distance printed for vertices that cannot be reached.
        #[arg(long, value_name = "DISTANCE", default_value_t = 1_000_000)]
        unreachable: u64,
    },
}
