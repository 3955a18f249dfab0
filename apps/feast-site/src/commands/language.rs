//! # Language Commands
//!
//! The navbar language toggle and translation lookups.

use std::collections::BTreeMap;

use feast_core::{Language, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::site::Site;
use crate::state::LanguageState;

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateArgs {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetLanguageArgs {
    /// Language code; case and region tags are ignored (`"ta-IN"`)
    pub language: String,
}

/// The active language plus what the toggle button shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResponse {
    pub language: Language,
    pub native_name: &'static str,
    /// Name of the language the toggle switches to, in that language
    pub toggle_label: &'static str,
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        LanguageResponse {
            language,
            native_name: language.native_name(),
            toggle_label: language.toggled().native_name(),
        }
    }
}

/// Every translation of the active language, for components that resolve
/// keys themselves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationsResponse {
    pub language: Language,
    pub entries: BTreeMap<&'static str, &'static str>,
}

pub fn get_language(site: &Site) -> Result<LanguageResponse, ApiError> {
    debug!("get_language command");
    Ok(site.state::<LanguageState>()?.current().into())
}

/// Switches between English and Tamil.
///
/// Applying it twice returns to the starting language.
pub fn toggle_language(site: &Site) -> Result<LanguageResponse, ApiError> {
    let language = site.state::<LanguageState>()?.toggle();
    info!(language = %language, "language toggled");
    Ok(language.into())
}

/// Selects a language by code, e.g. from a saved preference or a browser
/// locale.
///
/// ## Errors
/// `VALIDATION_ERROR` if the code names neither English nor Tamil.
pub fn set_language(site: &Site, code: &str) -> Result<LanguageResponse, ApiError> {
    let language = Language::parse(code).ok_or_else(|| ValidationError::NotAllowed {
        field: "language".to_string(),
        allowed: Language::ALL
            .iter()
            .map(|language| language.code().to_string())
            .collect(),
    })?;

    site.state::<LanguageState>()?.set(language);
    info!(language = %language, "language set");
    Ok(language.into())
}

/// Resolves one key. Unknown keys come back unchanged.
pub fn translate(site: &Site, key: &str) -> Result<String, ApiError> {
    debug!(key = %key, "translate command");
    Ok(site.state::<LanguageState>()?.translate(key))
}

pub fn get_translations(site: &Site) -> Result<TranslationsResponse, ApiError> {
    debug!("get_translations command");
    let t = site.state::<LanguageState>()?.translator();
    Ok(TranslationsResponse {
        language: t.language(),
        entries: t.entries().collect(),
    })
}
