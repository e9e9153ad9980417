//! CLI argument definitions and command handlers.

pub mod courses;
pub mod recommend;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// SkillMap: career roadmaps and course recommendations.
#[derive(Parser)]
#[command(name = "skillmap", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Export spans via OpenTelemetry (stdout exporter)
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },

    /// Recommend courses for a skill-gap description
    Recommend {
        /// Free-text description of the skills to acquire
        query: String,

        /// Number of courses to return
        #[arg(short, default_value_t = 5)]
        k: usize,
    },

    /// List the loaded course catalogue
    Courses,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
