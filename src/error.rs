// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Open States API key is not configured")]
    #[diagnostic(
        code(influencetx::openstates::missing_key),
        help(
            "Register at https://openstates.org/api/register/ and set OPENSTATES_API_KEY, \
             or run with --debug to see setup instructions"
        )
    )]
    MissingApiKey,

    #[error("Open States rejected the API key")]
    #[diagnostic(
        code(influencetx::openstates::unauthorized),
        help("Check the key configured in OPENSTATES_API_KEY or your config file")
    )]
    Unauthorized,

    #[error("{kind} '{id}' not found")]
    #[diagnostic(
        code(influencetx::openstates::not_found),
        help("Check the identifier; list records with `influencetx legislators` or `influencetx bills`")
    )]
    NotFound { kind: &'static str, id: String },

    #[error("Open States API error ({status}): {message}")]
    #[diagnostic(code(influencetx::openstates::api))]
    Api { status: u16, message: String },

    #[error("Unexpected Open States response: {0}")]
    #[diagnostic(code(influencetx::openstates::decode))]
    Decode(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(influencetx::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),

    #[cfg(feature = "secure-storage")]
    #[error("Keyring error: {0}")]
    #[diagnostic(
        code(influencetx::keyring::error),
        help("Check your system keychain configuration")
    )]
    Keyring(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
