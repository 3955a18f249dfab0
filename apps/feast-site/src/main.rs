//! # Festive Feast Site Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Festive Feast Site                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Display Components                            │  │
//! │  │  • Navbar + language toggle   • Menu cards + cart sidebar        │  │
//! │  │  • Gallery / Reviews          • Booking form                     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                  {"command": "...", "args": {...}}  (stdin)             │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the runtime                                │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Config, logging, state, command loop              │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► add_to_cart, toggle_language, submit_booking      │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► CartState, LanguageState, CatalogState, Config    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                  {"ok": true, "data": {...}}  (stdout)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = feast_site::run().await {
        eprintln!("feast-site: {}", err);
        std::process::exit(1);
    }
}
