// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use console::style;
use indicatif::ProgressBar;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::Session;
use crate::error::{Error, Result};
use crate::services::openstates::{OpenStatesApi, OpenStatesClient, REGISTER_URL};
use crate::services::views::{OutputFormat, Response, Route, Views};

pub struct App {
    cli: Cli,
    config: Config,
    cancel_token: CancellationToken,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            state = %config.state,
            base_url = %config.base_url,
            debug = config.debug,
            has_key = config.api_key.is_some(),
            "config loaded"
        );
        let cancel_token = CancellationToken::new();
        Ok(Self {
            cli,
            config,
            cancel_token,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup Ctrl+C handler with CancellationToken
        let cancel = self.cancel_token.clone();
        tokio::spawn(async move {
            signal::ctrl_c().await.ok();
            cancel.cancel();
        });

        let route = match self.cli.command {
            None => Route::Index,
            Some(Commands::Legislators) => Route::LegislatorList,
            Some(Commands::Legislator { ref leg_id }) => Route::LegislatorDetail {
                leg_id: leg_id.clone(),
            },
            Some(Commands::Bills) => Route::BillList,
            Some(Commands::Bill {
                ref session,
                ref bill_id,
            }) => Route::BillDetail {
                session: Session::new(session.trim()),
                bill_id: bill_id.clone(),
            },
            Some(Commands::ApiKeyRequired) => Route::ApiKeyRequired,
            Some(Commands::Init) => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                return Ok(());
            }
            Some(Commands::Config) => {
                if let Some(ref path) = Config::config_path() {
                    println!("# {}", path.display());
                }
                print!("{}", self.config.to_redacted_toml()?);
                return Ok(());
            }
            Some(Commands::Doctor) => return self.run_doctor().await,
            Some(Commands::Completions { shell }) => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(shell, &mut cmd, "influencetx", &mut std::io::stdout());
                return Ok(());
            }
            #[cfg(feature = "secure-storage")]
            Some(Commands::SetKey) => return self.set_api_key(),
            #[cfg(feature = "secure-storage")]
            Some(Commands::GetKey) => return self.get_api_key(),
        };

        self.show(route).await
    }

    async fn show(&self, route: Route) -> Result<()> {
        let format = if self.cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let views = Views::new(
            OpenStatesClient::new(&self.config),
            self.config.debug,
            format,
        );

        let response = match self.cancellable(views.render(&route)).await? {
            Response::Redirect(target) => self.cancellable(views.render(&target)).await?,
            page => page,
        };

        match response {
            Response::Page(text) => print!("{text}"),
            Response::Redirect(target) => println!("See: {}", target.command()),
        }
        Ok(())
    }

    /// Race a request against Ctrl+C, with a spinner on interactive terminals.
    async fn cancellable<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        if self.cancel_token.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let spinner = self.spinner();
        let result = tokio::select! {
            _ = self.cancel_token.cancelled() => Err(Error::Cancelled),
            r = fut => r,
        };
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        result
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !std::io::stderr().is_terminal() {
            return None;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!(
            "Contacting Open States ({})...",
            self.config.state.to_uppercase()
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }

    async fn run_doctor(&self) -> Result<()> {
        eprintln!("{} Running diagnostics...\n", style("→").cyan());

        // Config summary
        eprintln!("{}", style("Configuration").bold().underlined());
        eprintln!("  State:       {}", self.config.state.to_uppercase());
        eprintln!("  API root:    {}", self.config.base_url);
        eprintln!("  Timeout:     {}s", self.config.timeout_secs);
        eprintln!("  Debug:       {}", self.config.debug);
        if let Some(ref path) = Config::config_path() {
            let status = if path.exists() { "found" } else { "not found" };
            eprintln!("  Config file: {} ({})", path.display(), status);
        }
        eprintln!();

        eprintln!("{}", style("Open States").bold().underlined());
        let client = OpenStatesClient::new(&self.config);
        if !client.has_api_key() {
            eprintln!("  API key:     {}", style("MISSING").red().bold());
            eprintln!("  Register at: {}", style(REGISTER_URL).yellow());
        } else {
            eprintln!("  API key:     {}", style("configured").green());
            let checked = self.cancellable(client.metadata()).await;
            match checked {
                Ok(meta) => {
                    eprintln!("  Connection:  {}", style("OK").green().bold());
                    eprintln!("  Legislature: {} ({})", meta.legislature_name, meta.name);
                }
                Err(Error::Unauthorized) => {
                    eprintln!("  Connection:  {}", style("KEY REJECTED").red().bold());
                }
                Err(Error::Cancelled) => return Err(Error::Cancelled),
                Err(e) => {
                    eprintln!("  Connection:  {}: {}", style("ERROR").red().bold(), e);
                }
            }
        }

        eprintln!();
        eprintln!("{} Diagnostics complete.", style("✓").green().bold());

        Ok(())
    }

    // ─── Keyring Commands ───

    #[cfg(feature = "secure-storage")]
    fn set_api_key(&self) -> Result<()> {
        use crate::config::{KEYRING_ACCOUNT, KEYRING_SERVICE};

        eprintln!(
            "Enter your Open States API key (input will be hidden). Register at {}",
            style(REGISTER_URL).yellow()
        );

        let key = dialoguer::Password::new()
            .with_prompt("API key")
            .interact()?;

        if key.trim().is_empty() {
            return Err(Error::Config("API key cannot be empty".into()));
        }

        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_ACCOUNT)
            .map_err(|e| Error::Keyring(e.to_string()))?;
        entry
            .set_password(key.trim())
            .map_err(|e| Error::Keyring(e.to_string()))?;

        eprintln!("{} Open States API key stored", style("✓").green().bold());
        Ok(())
    }

    #[cfg(feature = "secure-storage")]
    fn get_api_key(&self) -> Result<()> {
        use crate::config::{KEYRING_ACCOUNT, KEYRING_SERVICE};

        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_ACCOUNT)
            .map_err(|e| Error::Keyring(e.to_string()))?;

        match entry.get_password() {
            Ok(_) => {
                eprintln!(
                    "{} Open States API key is stored in keychain",
                    style("✓").green().bold()
                );
            }
            Err(keyring::Error::NoEntry) => {
                eprintln!(
                    "{} No Open States API key found in keychain",
                    style("✗").red().bold()
                );
                eprintln!("  Store one with: {}", style("influencetx set-key").yellow());
            }
            Err(e) => {
                return Err(Error::Keyring(e.to_string()));
            }
        }

        Ok(())
    }
}
