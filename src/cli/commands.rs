//! CLI command implementations

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::{error, info, print_identity_table, success, warn, OutputFormat};
use crate::config::{self, Config};
use crate::poll::Poller;
use crate::session::{decode_token, GuardOutcome, Identity, RouteGuard, SessionService};
use crate::store::{FileStore, TokenStore, TOKEN_KEY};

/// Load configuration, falling back to defaults when no file exists.
fn load_or_default() -> Config {
    config::load_config().unwrap_or_default()
}

fn session_from(store: FileStore, config: &Config) -> SessionService<FileStore> {
    SessionService::new(store)
        .with_login_path(config.session.login_path.clone())
        .with_refresh_warning_secs(config.session.refresh_warning_secs)
}

/// Initialize a new storefront.toml configuration file
pub fn init() -> Result<()> {
    let config_path = std::path::Path::new("storefront.toml");

    if config_path.exists() {
        warn("storefront.toml already exists");
        return Ok(());
    }

    fs::write(config_path, config::loader::default_config_content())?;

    success("Created storefront.toml");
    Ok(())
}

/// Store a bearer token as the current session
pub fn login(token: &str) -> Result<()> {
    let config = load_or_default();
    let store = FileStore::open(&config.storage.path);
    store.set(TOKEN_KEY, token);

    let session = session_from(store, &config);
    match session.current_user() {
        Ok(identity) => {
            success(&format!("Signed in as {}", session.display_name()));
            print_identity_table(&identity);
            Ok(())
        }
        Err(e) => {
            // current_user has already purged the stored copy
            error(&format!("Rejected token: {}", e));
            Err(e.into())
        }
    }
}

/// Clear the current session
pub fn logout() -> Result<()> {
    let config = load_or_default();
    let session = session_from(FileStore::open(&config.storage.path), &config);

    let navigation = session.logout();
    success("Signed out");
    info(&format!("UI redirects to {} (replace)", navigation.target));
    Ok(())
}

/// Show the current session
pub fn whoami(format: OutputFormat) -> Result<()> {
    let config = load_or_default();
    let session = session_from(FileStore::open(&config.storage.path), &config);

    match session.current_user() {
        Ok(identity) => {
            match format {
                OutputFormat::Table => {
                    success(&format!("Signed in as {}", session.display_name()));
                    print_identity_table(&identity);
                    if session.is_token_expiring_soon() {
                        warn("Session expires soon, log in again to refresh");
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&identity)?);
                }
            }
            Ok(())
        }
        Err(e) if e.is_no_session() => {
            info(&format!("{} ({})", session.display_name(), e));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Decode a token without storing it
pub fn inspect(token: &str) -> Result<()> {
    match decode_token(token) {
        Ok(payload) => {
            let expired = payload.is_expired(chrono::Utc::now().timestamp());
            print_identity_table(&Identity::from_payload(&payload, None));
            if expired {
                warn("Token is expired");
            }
            Ok(())
        }
        Err(e) => {
            error(&format!("{}", e));
            Err(e.into())
        }
    }
}

/// Evaluate a route guard against the current session
pub fn guard(admin_only: bool, redirect_to: Option<String>, fallback: Option<String>) -> Result<()> {
    let config = load_or_default();
    let session = session_from(FileStore::open(&config.storage.path), &config);

    let mut guard = RouteGuard::new()
        .redirect_to(redirect_to.unwrap_or_else(|| config.session.login_path.clone()))
        .fallback(fallback.unwrap_or_else(|| config.session.home_path.clone()));
    if admin_only {
        guard = guard.admin_only();
    }

    match guard.evaluate(&session) {
        GuardOutcome::Render => success("Render"),
        GuardOutcome::Redirect(target) => info(&format!("Redirect to {} (replace)", target)),
    }
    Ok(())
}

/// Poll a backend list endpoint on the configured interval
pub async fn watch(resource: &str) -> Result<()> {
    let config = load_or_default();
    let store = Arc::new(FileStore::open(&config.storage.path));
    let client = Arc::new(ApiClient::new(&config.api, Arc::clone(&store)));
    let path = resource.trim_start_matches('/').to_string();

    info(&format!(
        "Refreshing {} every {}s, Ctrl-C to stop",
        path, config.polling.interval_secs
    ));

    let poller = Poller::spawn(
        Duration::from_secs(config.polling.interval_secs),
        move || {
            let client = Arc::clone(&client);
            let path = path.clone();
            async move {
                let items: serde_json::Value = client.get_json(&path).await?;
                match items.as_array() {
                    Some(list) => info(&format!("{}: {} items", path, list.len())),
                    None => info(&format!("{}: updated", path)),
                }
                Ok::<(), crate::error::Error>(())
            }
        },
    );

    tokio::signal::ctrl_c().await?;
    poller.stop();
    Ok(())
}
