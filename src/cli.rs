use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "skillpath", version, about = "SkillPath learning client")]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: platform config dir)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, env = "SKILLPATH_API_URL", help = "Override api.base_url")]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and keep the session
    Login {
        email: String,
        #[arg(long, env = "SKILLPATH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Signup {
        name: String,
        email: String,
        #[arg(long, env = "SKILLPATH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Exchange the stored token for a fresh one
    Refresh,
    /// Show session state and the route it resolves to
    Status,
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// List domains and their courses
    Domains,
    /// Show one course with its chapters
    Course { id: u64 },
    Notes {
        #[command(subcommand)]
        command: NotesCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    Show,
    Update {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, env = "SKILLPATH_NEW_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotesCommands {
    List,
    Add {
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    Edit {
        id: u64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    Rm { id: u64 },
}
