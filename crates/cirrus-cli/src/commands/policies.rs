//! Policies command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cirrus_model::PolicySetResult;

use crate::output;

#[derive(Args, Debug)]
pub struct PoliciesArgs {
    /// JSON document to decode, or `-` for stdin
    pub file: PathBuf,

    /// Print the wire JSON instead of the field listing
    #[arg(long)]
    pub json: bool,

    /// Check the continuation token against its character class
    #[arg(long)]
    pub validate: bool,
}

pub fn run(args: PoliciesArgs) -> Result<()> {
    let doc = super::read_document(&args.file)?;
    let result = PolicySetResult::from_json(&doc).context("Failed to decode policy set")?;

    info!(policies = result.policies().len(), "decoded policy set");

    if args.json {
        output::json_pretty(&result)?;
    } else {
        println!("{result}");
    }

    if let Some(token) = result.continuation_token() {
        output::field("Next token", token);
    }

    if args.validate {
        super::report_validation(result.validate())?;
    }

    Ok(())
}
