use super::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// "0.3.2" for releases, "0.3.2@abc1234" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("SHELF_GIT_HASH");
    const IS_RELEASE: &str = env!("SHELF_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Browse, filter and curate a catalog of media titles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed document to load (overrides `seed_file` from config)
    #[arg(short = 'S', long, global = true, env = "SHELF_SEED")]
    pub seed: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, env = "SHELF_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Seed for the id generator, for reproducible sessions
    #[arg(long, global = true, hide = true)]
    pub id_seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the catalog, optionally filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Category to show, or "all"
        #[arg(short, long)]
        filter: Option<String>,

        /// name-asc, name-desc, category-asc, category-desc (or s0..s3)
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Add a title to the top of the list
    #[command(alias = "n")]
    Add(AddArgs),

    /// Remove a title by id
    #[command(alias = "rm")]
    Remove {
        id: u32,
    },

    /// Show featured titles
    Featured,

    /// Show one title's details
    Show {
        id: u32,
    },

    /// List the categories present in the catalog
    Filters,

    /// Apply intents read line by line from a file (or stdin)
    Session {
        /// Script to read; stdin when omitted
        file: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// Title name (words are joined with spaces)
    #[arg(num_args = 0..)]
    pub name: Vec<String>,

    /// Category of the new title
    #[arg(short, long, default_value = "drama")]
    pub category: String,

    /// Mark the title as featured
    #[arg(long)]
    pub featured: bool,

    /// Image reference for the title
    #[arg(long)]
    pub image: Option<String>,
}
