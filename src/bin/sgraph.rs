//! CLI entry point for the `sgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use social_graph::cli::commands;
use social_graph::types::DEFAULT_LEAST_CONNECTED_LIMIT;

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "Social graph CLI — neighbor analytics over an edge-list file"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every member's neighbor list
    Show {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Print the all-pairs common-friends matrix
    Matrix {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Recommend a friend for one member, or for everyone
    Recommend {
        /// Path to the edge-list file
        file: PathBuf,
        /// Member to recommend for; omit to cover every member
        member: Option<String>,
    },
    /// Print a member's friend count
    Friends {
        /// Path to the edge-list file
        file: PathBuf,
        /// The member to look up
        member: String,
    },
    /// Print the members with the fewest friends
    Least {
        /// Path to the edge-list file
        file: PathBuf,
        /// How many members to list
        #[arg(long, default_value_t = DEFAULT_LEAST_CONNECTED_LIMIT)]
        limit: usize,
    },
    /// Run every query in sequence
    Report {
        /// Path to the edge-list file
        file: PathBuf,
        /// How many members in the least-connected section
        #[arg(long, default_value_t = DEFAULT_LEAST_CONNECTED_LIMIT)]
        limit: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    }

    let result = match cli.command {
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::Matrix { file } => commands::cmd_matrix(&file, json),
        Commands::Recommend { file, member } => {
            commands::cmd_recommend(&file, member.as_deref(), json)
        }
        Commands::Friends { file, member } => commands::cmd_friends(&file, &member, json),
        Commands::Least { file, limit } => commands::cmd_least(&file, limit, json),
        Commands::Report { file, limit } => commands::cmd_report(&file, limit, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            social_graph::GraphError::Io(_) => 1,
            social_graph::GraphError::MalformedHeader { .. } => 2,
            social_graph::GraphError::MemberNotFound(_)
            | social_graph::GraphError::EdgeNotFound { .. } => 4,
        };
        process::exit(code);
    }
}
