use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::adapters::adapter::PlatformRule;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-autofill",
    version,
    about = "Job application form detection and autofill"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: form-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect an application form in a page snapshot
    Detect {
        /// Path to a page snapshot JSON file
        #[arg(long)]
        page: String,

        /// Emit the detection summary as JSON instead of a console report
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Classify every fillable control in a page snapshot
    Classify {
        /// Path to a page snapshot JSON file
        #[arg(long)]
        page: String,

        /// Emit classified fields as JSON instead of a console report
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Fill a detected form from a candidate profile
    Fill {
        /// Path to a page snapshot JSON file
        #[arg(long)]
        page: String,

        /// Path to a profile file (.json, or YAML otherwise)
        #[arg(long)]
        profile: String,

        /// Undo the fill afterwards and report how many fields were restored
        #[arg(long, default_value_t = false)]
        undo: bool,

        /// Show the fill plan without touching the page
        #[arg(long, default_value_t = false)]
        plan: bool,

        /// Emit the fill summary as JSON instead of a console report
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Append trace events to this JSONL file
        #[arg(long)]
        trace: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-autofill.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fill: FillConfig,

    /// Extra platform rules, tried before the built-in set when present.
    #[serde(default)]
    pub platforms: Vec<PlatformRule>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fill: FillConfig::default(),
            platforms: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FillConfig {
    /// Default trace file; the --trace flag overrides it.
    pub trace: Option<String>,

    /// Fixed reference date (YYYY-MM-DD) for experience math. Defaults to
    /// the current local date when absent or unparseable.
    pub today: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
