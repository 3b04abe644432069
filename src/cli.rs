//! src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Install Git hooks from inline config or from scripts kept in the project.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if started in <PROJECT_DIR> instead of the current directory.
    #[arg(short = 'C', long, global = true, value_name = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Show debug output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write every configured hook into .git/hooks.
    Install {
        /// Config file, relative to the project directory. Defaults to hookmate.toml.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Check the config and report the target files without writing them.
        #[arg(long)]
        dry_run: bool,
    },
    /// Create a starter config file.
    #[command(alias = "i")]
    Init {
        /// Config file, relative to the project directory. Defaults to hookmate.toml.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Show each configured hook and whether the installed copy is current.
    #[command(alias = "ls")]
    List {
        /// Config file, relative to the project directory. Defaults to hookmate.toml.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
