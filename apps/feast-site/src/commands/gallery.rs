//! # Gallery Commands

use feast_core::GalleryEvent;
use serde::Serialize;
use tracing::debug;

use super::EventTypeOption;
use crate::error::ApiError;
use crate::site::Site;
use crate::state::{CatalogState, LanguageState, Translator};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemView {
    pub id: String,
    pub image: String,
    pub caption: String,
    pub event: EventTypeOption,
}

impl GalleryItemView {
    fn new(event: &GalleryEvent, t: &Translator) -> Self {
        GalleryItemView {
            id: event.id.clone(),
            image: event.image.clone(),
            caption: t.text(&event.caption),
            event: EventTypeOption::new(event.event_type, t),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryResponse {
    pub title: String,
    pub subtitle: String,
    pub events: Vec<GalleryItemView>,
}

/// Lists past event photos in catalog order.
pub fn list_gallery(site: &Site) -> Result<GalleryResponse, ApiError> {
    debug!("list_gallery command");

    let catalog = site.state::<CatalogState>()?.inner();
    let t = site.state::<LanguageState>()?.translator();

    Ok(GalleryResponse {
        title: t.t("gallery"),
        subtitle: t.t("gallerySubtitle"),
        events: catalog
            .gallery()
            .iter()
            .map(|event| GalleryItemView::new(event, &t))
            .collect(),
    })
}
