//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{policies::PoliciesArgs, user::UserArgs};

/// Inspect autoscaling and IAM response documents.
#[derive(Parser, Debug)]
#[command(name = "cirrus")]
#[command(author, version = env!("CIRRUS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a describe-policies result
    Policies(PoliciesArgs),

    /// Decode an IAM user record
    User(UserArgs),
}
