//! # Contact Commands
//!
//! The contact page is still a placeholder: business details from
//! configuration, a "coming soon" notice and the cart the visitor brought
//! along.

use serde::Serialize;
use tracing::debug;

use super::cart::{cart_view, CartResponse};
use crate::error::ApiError;
use crate::site::Site;
use crate::state::{ConfigState, LanguageState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub title: String,
    pub subtitle: String,
    pub notice_title: String,
    pub notice_text: String,
    pub business_name: String,
    pub phone: String,
    pub email: String,
    pub cart: CartResponse,
}

pub fn get_contact(site: &Site) -> Result<ContactResponse, ApiError> {
    debug!("get_contact command");

    let config = site.state::<ConfigState>()?;
    let t = site.state::<LanguageState>()?.translator();

    Ok(ContactResponse {
        title: t.t("contact"),
        subtitle: t.t("contactSubtitle"),
        notice_title: t.t("contactComingSoon"),
        notice_text: t.t("contactComingSoonText"),
        business_name: config.business_name.clone(),
        phone: config.contact_phone.clone(),
        email: config.contact_email.clone(),
        cart: cart_view(site)?,
    })
}

/// The cart sidebar's "Proceed to Contact" button.
pub fn proceed_to_contact(site: &Site) -> Result<ContactResponse, ApiError> {
    debug!("proceed_to_contact command");
    get_contact(site)
}
