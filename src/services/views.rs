// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Session, normalize_bill_id};
use crate::error::{Error, Result};
use crate::services::openstates::OpenStatesApi;
use crate::services::pages::Pages;

/// Every page the CLI can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    ApiKeyRequired,
    LegislatorList,
    LegislatorDetail { leg_id: String },
    BillList,
    BillDetail { session: Session, bill_id: String },
}

impl Route {
    /// Command line that opens this page.
    pub fn command(&self) -> String {
        match self {
            Self::Index => "influencetx".into(),
            Self::ApiKeyRequired => "influencetx api-key-required".into(),
            Self::LegislatorList => "influencetx legislators".into(),
            Self::LegislatorDetail { leg_id } => {
                format!("influencetx legislator {}", shell_quote(leg_id))
            }
            Self::BillList => "influencetx bills".into(),
            Self::BillDetail { session, bill_id } => format!(
                "influencetx bill {} {}",
                shell_quote(session.as_str()),
                shell_quote(bill_id)
            ),
        }
    }
}

fn shell_quote(arg: &str) -> Cow<'_, str> {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));
    if plain {
        Cow::Borrowed(arg)
    } else {
        // POSIX single quotes leave `$`, backticks and backslashes literal
        Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Page(String),
    Redirect(Route),
}

pub struct Views<A> {
    api: A,
    debug: bool,
    format: OutputFormat,
}

impl<A: OpenStatesApi> Views<A> {
    pub fn new(api: A, debug: bool, format: OutputFormat) -> Self {
        Self { api, debug, format }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn render(&self, route: &Route) -> Result<Response> {
        debug!(?route, "rendering");
        match route {
            Route::Index => Ok(self.index()),
            Route::ApiKeyRequired => Ok(self.api_key_required()),
            Route::LegislatorList => self.legislator_list().await,
            Route::LegislatorDetail { leg_id } => self.legislator_detail(leg_id).await,
            Route::BillList => self.bill_list().await,
            Route::BillDetail { session, bill_id } => self.bill_detail(session, bill_id).await,
        }
    }

    pub fn index(&self) -> Response {
        Response::Page(Pages::index())
    }

    pub fn api_key_required(&self) -> Response {
        Response::Page(Pages::api_key_required())
    }

    pub async fn legislator_list(&self) -> Result<Response> {
        if let Some(redirect) = self.require_api_key()? {
            return Ok(redirect);
        }
        let legislators = self.api.legislators().await?;
        self.page(&legislators, || Pages::legislator_list(&legislators))
    }

    pub async fn legislator_detail(&self, leg_id: &str) -> Result<Response> {
        if let Some(redirect) = self.require_api_key()? {
            return Ok(redirect);
        }
        let legislator = self
            .api
            .legislator(leg_id)
            .await?
            .ok_or_else(|| Error::NotFound {
                kind: "legislator",
                id: leg_id.to_string(),
            })?;
        self.page(&legislator, || Pages::legislator_detail(&legislator))
    }

    pub async fn bill_list(&self) -> Result<Response> {
        if let Some(redirect) = self.require_api_key()? {
            return Ok(redirect);
        }
        let bills = self.api.bills().await?;
        self.page(&bills, || Pages::bill_list(&bills))
    }

    pub async fn bill_detail(&self, session: &Session, bill_id: &str) -> Result<Response> {
        if let Some(redirect) = self.require_api_key()? {
            return Ok(redirect);
        }
        let bill_id = normalize_bill_id(bill_id);
        let bill = self
            .api
            .bill_detail(session, &bill_id)
            .await?
            .ok_or_else(|| Error::NotFound {
                kind: "bill",
                id: format!("{bill_id} (session {session})"),
            })?;
        self.page(&bill, || Pages::bill_detail(&bill))
    }

    /// Without a key, debug mode sends the user to setup instructions and
    /// anything else is a configuration error.
    fn require_api_key(&self) -> Result<Option<Response>> {
        if self.api.has_api_key() {
            return Ok(None);
        }
        if self.debug {
            warn!("no Open States API key configured, showing setup instructions");
            return Ok(Some(Response::Redirect(Route::ApiKeyRequired)));
        }
        Err(Error::MissingApiKey)
    }

    fn page<T: Serialize>(&self, data: &T, text: impl FnOnce() -> String) -> Result<Response> {
        match self.format {
            OutputFormat::Text => Ok(Response::Page(text())),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(data)?;
                json.push('\n');
                Ok(Response::Page(json))
            }
        }
    }
}
