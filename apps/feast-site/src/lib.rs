//! # Festive Feast Site Library
//!
//! Session layer of the Festive Feast catering site.
//! Owns the cart and language stores and answers display-component commands.
//!
//! ## Module Organization
//! ```text
//! feast_site/
//! ├── lib.rs          ◄─── You are here (site setup & run)
//! ├── site.rs         ◄─── State owner: manage / state::<T>()
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store
//! │   ├── language.rs ◄─── Language store + translator
//! │   ├── catalog.rs  ◄─── Static menu/gallery/reviews
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatcher (invoke)
//! │   └── ...         ◄─── One module per page or store
//! ├── ipc.rs          ◄─── JSON lines over stdin/stdout
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Site State Management                                │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    CartState     │ │  LanguageState   │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Cart items    │ │  • En / Ta       │ │  • Business name     │   │
//! │  │  • Count         │ │  • Translations  │ │  • Contact details   │   │
//! │  │                  │ │                  │ │  • Build mode        │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  Each command only requests the state it needs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod ipc;
pub mod site;
pub mod state;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use site::Site;
use state::{BuildMode, CartState, CatalogState, ConfigState, LanguageState};

/// Creates the site with every store managed.
///
/// ## Errors
/// `INTERNAL` if the bundled catalog fixtures do not parse.
pub fn build_site(config: ConfigState) -> Result<Site, ApiError> {
    let catalog_state = CatalogState::bundled()?;

    Ok(Site::builder()
        .manage(config)
        .manage(catalog_state)
        .manage(CartState::new())
        .manage(LanguageState::new())
        .build())
}

/// Runs the site until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Site Startup                                      │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then FEAST_* environment variables                      │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default filter from build mode, RUST_LOG overrides                │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: bundled fixtures                                    │
/// │     • CartState: empty cart                                             │
/// │     • LanguageState: base language                                      │
/// │                                                                         │
/// │  4. Serve Commands ───────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line, one response per stdout line     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigState::from_env();

    init_tracing(config.build_mode);

    info!(
        business = %config.business_name,
        mode = ?config.build_mode,
        "Starting Festive Feast site"
    );

    let site = build_site(config)?;
    info!("State initialized");

    ipc::serve(&site, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=feast_site=trace` - Show trace for the site crate only
/// - Default: see [`BuildMode::default_log_filter`]
fn init_tracing(mode: BuildMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(mode.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
