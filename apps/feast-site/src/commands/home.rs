//! # Home Commands
//!
//! The landing page: hero banner, about section and service tiles.

use feast_core::EventType;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::site::Site;
use crate::state::LanguageState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    /// Route the call-to-action opens
    pub cta_route: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub text: String,
    pub stats: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTile {
    pub event_type: EventType,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub hero: Hero,
    pub about: About,
    pub services_title: String,
    pub services: Vec<ServiceTile>,
}

pub fn get_home(site: &Site) -> Result<HomeResponse, ApiError> {
    debug!("get_home command");

    let t = site.state::<LanguageState>()?.translator();

    Ok(HomeResponse {
        hero: Hero {
            title: t.t("heroTitle"),
            subtitle: t.t("heroSubtitle"),
            cta_label: t.t("bookNow"),
            cta_route: "/booking",
        },
        about: About {
            title: t.t("aboutTitle"),
            text: t.t("aboutText"),
            stats: vec![t.t("yearsExperience"), t.t("eventsCompleted")],
        },
        services_title: t.t("eventCategoriesTitle"),
        services: EventType::ALL
            .into_iter()
            .map(|event_type| ServiceTile {
                event_type,
                label: t.t(event_type.service_key()),
            })
            .collect(),
    })
}
