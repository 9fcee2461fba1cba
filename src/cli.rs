// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "influencetx")]
#[command(version)]
#[command(about = "Browse Texas legislators, bills and votes from Open States", long_about = None)]
pub struct Cli {
    /// Two-letter state abbreviation
    #[arg(short, long, env = "INFLUENCETX_STATE")]
    pub state: Option<String>,

    /// Show setup instructions instead of failing when no API key is configured
    #[arg(long)]
    pub debug: bool,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List current legislators
    Legislators,
    /// Show one legislator
    Legislator {
        /// Open States legislator id (e.g. TXL000123)
        leg_id: String,
    },
    /// List bills from the current session
    Bills,
    /// Show one bill with its actions and votes
    Bill {
        /// Session identifier (e.g. 85)
        session: String,
        /// Bill id (e.g. "HB 1" or hb1)
        bill_id: String,
    },
    /// Explain how to obtain an Open States API key
    ApiKeyRequired,
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Check configuration and Open States connectivity
    Doctor,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Store the Open States API key in the system keychain
    #[cfg(feature = "secure-storage")]
    SetKey,
    /// Check whether an Open States API key is stored in the keychain
    #[cfg(feature = "secure-storage")]
    GetKey,
}
