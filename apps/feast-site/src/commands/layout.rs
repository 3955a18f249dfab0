//! # Layout Commands
//!
//! The chrome shared by every page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Festive Feast Home    Menu  Gallery  Reviews  Booking  Contact Cart(2) │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                              (page)                                     │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Quick Enquiry    Call Us: +91 ...    Email Us: hello@...    Follow Us  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use super::language::LanguageResponse;
use crate::error::ApiError;
use crate::site::Site;
use crate::state::{CartState, ConfigState, LanguageState};

/// Navbar entries as (route, translation key).
pub const NAV_ROUTES: [(&str, &str); 6] = [
    ("/", "home"),
    ("/menu", "menu"),
    ("/gallery", "gallery"),
    ("/reviews", "reviews"),
    ("/booking", "booking"),
    ("/contact", "contact"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub route: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub quick_enquiry_label: String,
    pub call_label: String,
    pub phone: String,
    pub email_label: String,
    pub email: String,
    pub follow_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    pub business_name: String,
    pub nav: Vec<NavLink>,
    pub language: LanguageResponse,
    pub cart_count: usize,
    pub footer: Footer,
}

pub fn get_layout(site: &Site) -> Result<LayoutResponse, ApiError> {
    debug!("get_layout command");

    let config = site.state::<ConfigState>()?;
    let cart = site.state::<CartState>()?;
    let t = site.state::<LanguageState>()?.translator();

    Ok(LayoutResponse {
        business_name: config.business_name.clone(),
        nav: NAV_ROUTES
            .into_iter()
            .map(|(route, key)| NavLink {
                route,
                label: t.t(key),
            })
            .collect(),
        language: t.language().into(),
        cart_count: cart.count(),
        footer: Footer {
            quick_enquiry_label: t.t("quickEnquiry"),
            call_label: t.t("callUs"),
            phone: config.contact_phone.clone(),
            email_label: t.t("emailUs"),
            email: config.contact_email.clone(),
            follow_label: t.t("followUs"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{cart, test_site};
    use feast_core::Language;

    #[test]
    fn test_nav_follows_language() {
        let site = test_site();

        let en = get_layout(&site).unwrap();
        assert_eq!(en.nav[1].label, "Menu");
        assert_eq!(en.language.language, Language::En);

        site.state::<LanguageState>().unwrap().toggle();

        let ta = get_layout(&site).unwrap();
        assert_eq!(ta.nav[1].label, "உணவு பட்டியல்");
        assert_eq!(ta.nav[1].route, "/menu");
        assert_eq!(ta.language.toggle_label, "English");
    }

    #[test]
    fn test_badge_counts_cart() {
        let site = test_site();
        cart::add_to_cart(&site, "d1").unwrap();
        cart::add_to_cart(&site, "d2").unwrap();

        assert_eq!(get_layout(&site).unwrap().cart_count, 2);
    }
}
