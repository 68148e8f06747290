//! Navgraph makes use of the `Clap` library to define and parse command-line arguments.
//!
//! `Cli` carries the global `verbose` count and one of the `Commands`.  Every command
//! that needs a graph reads it as a JSON adjacency matrix, either from `--file` or, when
//! no file is given, from stdin.  That keeps `ng` usable at the end of a pipe:
//!
//! ```text
//! echo '[[0,1,4],[1,0,2],[4,2,0]]' | ng shortest-path --root 0
//! ```

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ng",
    author,
    version,
    about,
    long_about = "ng validates adjacency matrices and computes shortest paths over them",
    propagate_version = true
)] // Read from `Cargo.toml`
pub struct Cli {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "More logging",
        long_help = "Raise the default log level, once for debug and twice for trace.  RUST_LOG overrides this when set."
    )]
    pub verbose: u8,
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Validate {
        #[arg(short, long, action = clap::ArgAction::Set, help = "JSON matrix file, stdin if absent")]
        file: Option<String>,
    },
    ShortestPath {
        #[arg(short, long, action = clap::ArgAction::Set, help = "JSON matrix file, stdin if absent")]
        file: Option<String>,
        #[arg(short, long, action = clap::ArgAction::Set, default_value_t = 0, help = "index of the root vertex")]
        root: usize,
    },
    Completions {
        #[arg(short, long, action = clap::ArgAction::Set, help = "print script for shell tab completion", long_help = "Pipe the output of this command to a file or to a shell program as appropriate for 'bash', or 'zsh', etc... install via 'ng completions -s zsh > /usr/local/share/zsh/site-functions/_ng'")]
        shell: clap_complete::Shell,
    },
}
