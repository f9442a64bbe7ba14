//! User command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::info;

use cirrus_model::UserRecord;

use crate::output;

#[derive(Args, Debug)]
pub struct UserArgs {
    /// JSON document to decode, or `-` for stdin
    pub file: PathBuf,

    /// Print the wire JSON instead of the field listing
    #[arg(long)]
    pub json: bool,

    /// Check path, name, id and ARN against their documented constraints
    #[arg(long)]
    pub validate: bool,
}

pub fn run(args: UserArgs) -> Result<()> {
    let doc = super::read_document(&args.file)?;
    let user = UserRecord::from_json(&doc).context("Failed to decode user record")?;

    info!(user = user.name().unwrap_or_default(), "decoded user record");

    if args.json {
        output::json_pretty(&user)?;
    } else {
        println!("{user}");
    }

    if user.password_last_used_at().is_none() {
        eprintln!("{}", "Password never used or not reported.".dimmed());
    }

    if args.validate {
        super::report_validation(user.validate())?;
    }

    Ok(())
}
