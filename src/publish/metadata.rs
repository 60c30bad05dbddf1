//! Page metadata of a site's detail page: title, canonical URL, Open Graph and Twitter cards.

use crate::catalog::{Catalog, Site};
use crate::publish::sitemap::site_page_url;
use crate::publish::SITE_NAME;
use serde::Serialize;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
const LOCALE: &str = "fr_FR";
const TWITTER_CARD: &str = "summary_large_image";
const NOT_FOUND_TITLE: &str = "Site Non Trouvé | NEXAI";
const NOT_FOUND_DESCRIPTION: &str = "Ce site n'existe pas dans la collection NEXAI.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub alternates: Alternates,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: String,
    pub locale: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub images: Vec<OpenGraphImage>,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternates {
    pub canonical: String,
}

impl PageMetadata {
    /// Metadata of an existing site
    pub fn for_site(site: &Site, base_url: &str) -> Self {
        let canonical = site_page_url(base_url, site);
        let image = format!("{}{}", base_url, site.image);

        Self {
            title: format!("{} | {} Collection Corrompue", site.name, SITE_NAME),
            description: site.description.clone(),
            open_graph: OpenGraph {
                kind: "website".to_string(),
                locale: LOCALE.to_string(),
                url: canonical.clone(),
                title: site.name.clone(),
                description: site.description.clone(),
                images: vec![OpenGraphImage {
                    url: image.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: site.name.clone(),
                }],
                site_name: SITE_NAME.to_string(),
            },
            twitter: TwitterCard {
                card: TWITTER_CARD.to_string(),
                title: site.name.clone(),
                description: site.description.clone(),
                images: vec![image],
            },
            alternates: Alternates { canonical },
        }
    }

    /// Metadata served for an unknown id; canonical points at the home page
    pub fn not_found(base_url: &str) -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_string(),
            description: NOT_FOUND_DESCRIPTION.to_string(),
            open_graph: OpenGraph {
                kind: "website".to_string(),
                locale: LOCALE.to_string(),
                url: base_url.to_string(),
                title: NOT_FOUND_TITLE.to_string(),
                description: NOT_FOUND_DESCRIPTION.to_string(),
                images: Vec::new(),
                site_name: SITE_NAME.to_string(),
            },
            twitter: TwitterCard {
                card: TWITTER_CARD.to_string(),
                title: NOT_FOUND_TITLE.to_string(),
                description: NOT_FOUND_DESCRIPTION.to_string(),
                images: Vec::new(),
            },
            alternates: Alternates {
                canonical: base_url.to_string(),
            },
        }
    }

    /// Look `id` up in the catalogue, falling back to the not-found metadata
    pub fn lookup(catalog: &Catalog, id: &str, base_url: &str) -> Self {
        match catalog.find_site(id) {
            Ok(site) => Self::for_site(site, base_url),
            Err(err) => {
                log::debug!("{}", err);
                Self::not_found(base_url)
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.title == NOT_FOUND_TITLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://nexai.directory";

    #[test]
    fn site_metadata() {
        let catalog = Catalog::bundled().unwrap();
        let meta = PageMetadata::lookup(&catalog, "1", BASE);

        assert!(!meta.is_not_found());
        assert_eq!(meta.title, "Nothing | NEXAI Collection Corrompue");
        assert_eq!(meta.alternates.canonical, "https://nexai.directory/site/1");
        assert_eq!(meta.open_graph.url, meta.alternates.canonical);
        assert_eq!(meta.open_graph.images.len(), 1);
        assert_eq!(meta.open_graph.images[0].width, 1200);
        assert_eq!(meta.open_graph.images[0].height, 630);
        assert_eq!(
            meta.twitter.images,
            vec!["https://nexai.directory/images/void-protocol.jpg".to_string()]
        );
        assert_eq!(meta.twitter.card, "summary_large_image");
    }

    #[test]
    fn unknown_id_gets_not_found_metadata() {
        let catalog = Catalog::bundled().unwrap();
        let meta = PageMetadata::lookup(&catalog, "does-not-exist", BASE);

        assert!(meta.is_not_found());
        assert_eq!(meta.title, "Site Non Trouvé | NEXAI");
        assert_eq!(meta.alternates.canonical, BASE);
        assert!(meta.open_graph.images.is_empty());
        assert!(meta.twitter.images.is_empty());
    }

    #[test]
    fn serializes_with_web_field_names() {
        let catalog = Catalog::bundled().unwrap();
        let meta = PageMetadata::lookup(&catalog, "1", BASE);
        let value = serde_json::to_value(&meta).unwrap();

        assert_eq!(value["openGraph"]["type"], "website");
        assert_eq!(value["openGraph"]["siteName"], "NEXAI");
        assert_eq!(value["openGraph"]["locale"], "fr_FR");
        assert_eq!(value["alternates"]["canonical"], "https://nexai.directory/site/1");
    }
}
