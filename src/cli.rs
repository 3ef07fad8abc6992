use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::writer::{DEFAULT_CSV, DEFAULT_DATABASE};

#[derive(Parser, Debug)]
#[command(name = "hyg-to-sqlite")]
#[command(version, about = "Create the star catalog table and bulk-load it from the HYG CSV")]
pub struct Cli {
    /// Defaults to `load` with the default paths
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the table if needed, then append every row of the CSV file
    Load {
        /// HYG catalog CSV file
        #[arg(default_value = DEFAULT_CSV)]
        csv: PathBuf,

        #[command(flatten)]
        database: DatabaseArg,

        /// Store fields that do not match their column type as text instead of failing
        #[arg(short, long)]
        lenient: bool,
    },

    /// Only create the table if it does not exist
    Init {
        #[command(flatten)]
        database: DatabaseArg,
    },

    /// Print the CREATE TABLE statement
    Schema,
}

#[derive(Args, Debug, Clone)]
pub struct DatabaseArg {
    /// SQLite database path
    #[arg(short = 'd', long = "database", default_value = DEFAULT_DATABASE)]
    pub path: PathBuf,
}

impl Default for DatabaseArg {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE),
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to run, `load` with defaults when none was given
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Load {
            csv: PathBuf::from(DEFAULT_CSV),
            database: DatabaseArg::default(),
            lenient: false,
        })
    }
}
