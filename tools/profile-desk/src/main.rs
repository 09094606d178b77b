//! Profile desk: submit employee profiles and print the profile table.
//!
//! # Usage
//!
//! ```bash
//! profile-desk --base-url http://localhost:3114 submit \
//!     --full-name "Jane Doe" --username jdoe --email jane@x.com --department IT
//!
//! profile-desk list --refresh
//! ```
//!
//! `PROFILE_DESK_URL` (also read from `.env`) replaces `--base-url`.
//! Exits 1 when the form is rejected or the submission fails.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use profile_desk::client::{DeskClient, SubmitOutcome};
use profile_desk::form::FormArgs;
use profile_desk::reporter;

#[derive(Parser)]
#[command(about = "Employee profile data entry from the terminal")]
struct Args {
    /// Base URL of the profiles service (e.g. http://localhost:3114)
    #[arg(long, env = "PROFILE_DESK_URL", default_value = "http://localhost:3114")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one profile, then print the refreshed table
    Submit(FormArgs),
    /// Print the profile table
    List {
        /// Fetch from the store instead of printing the last loaded table
        #[arg(long)]
        refresh: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let client = DeskClient::new(&args.base_url);
    let mut out = io::stdout().lock();

    let succeeded = match args.command {
        Command::Submit(form) => match client.submit(&form.to_candidate()).await? {
            SubmitOutcome::Created {
                notification,
                listing,
            } => {
                reporter::print_notification(&mut out, &notification)?;
                writeln!(out)?;
                reporter::print_listing(&mut out, &listing)?;
                true
            }
            SubmitOutcome::Rejected { fields } => {
                reporter::print_field_errors(&mut out, &fields)?;
                false
            }
            SubmitOutcome::Failed { notification } => {
                reporter::print_notification(&mut out, &notification)?;
                false
            }
        },
        Command::List { refresh } => {
            let listing = client.listing(refresh).await?;
            reporter::print_listing(&mut out, &listing)?;
            true
        }
    };

    if succeeded {
        Ok(())
    } else {
        out.flush()?;
        std::process::exit(1);
    }
}
