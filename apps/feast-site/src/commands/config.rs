//! # Config Commands
//!
//! Commands for retrieving site configuration.

use tracing::debug;

use crate::error::ApiError;
use crate::site::Site;
use crate::state::ConfigState;

/// Gets the current site configuration.
///
/// ## When Used
/// - Startup (business name in the navbar)
/// - Footer and contact page details
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(site: &Site) -> Result<ConfigState, ApiError> {
    debug!("get_config command");
    Ok(site.state::<ConfigState>()?.clone())
}
