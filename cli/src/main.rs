mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{mount, print_commands, translate};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ross-mount")]
#[command(about = "Translate and perform fstab-style mounts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the mount flags and filesystem data for a list of options
    Translate {
        /// Options, either separate or comma-separated (e.g. ro,nodev)
        #[arg(required = true)]
        options: Vec<String>,
    },
    /// Print the mount command line for each entry of a mounts file
    Command {
        /// JSON file holding a list of mounts
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Mount every entry of a mounts file, stopping at the first failure
    Mount {
        /// JSON file holding a list of mounts
        #[arg(short, long)]
        file: PathBuf,

        /// Call mount(2) directly instead of running the mount tool
        #[arg(long, requires = "target")]
        syscall: bool,

        /// Mount point used for every entry with --syscall
        #[arg(long)]
        target: Option<PathBuf>,

        /// Mount tool to run
        #[arg(long, default_value = "mount", conflicts_with = "syscall")]
        mount_program: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Translate { options } => {
            translate(&options);
        }
        Commands::Command { file } => {
            print_commands(&file)?;
        }
        Commands::Mount {
            file,
            syscall,
            target,
            mount_program,
        } => {
            let target = if syscall { target } else { None };
            mount(&file, target.as_deref(), &mount_program)?;
        }
    }

    Ok(())
}
