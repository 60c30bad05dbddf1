//! schema.org JSON-LD documents describing the directory.

use crate::catalog::Site;
use crate::error::{NexaiError, Result};
use crate::publish::{SITE_DESCRIPTION, SITE_NAME};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Site-wide document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Organization,
    Website,
    ItemList,
    CreativeWork,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::Organization,
        SchemaKind::Website,
        SchemaKind::ItemList,
        SchemaKind::CreativeWork,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Organization => "organization",
            SchemaKind::Website => "website",
            SchemaKind::ItemList => "itemlist",
            SchemaKind::CreativeWork => "creativework",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = NexaiError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_ascii_lowercase().replace(['-', '_'], "");
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| NexaiError::InvalidArgument {
                message: format!(
                    "unknown structured data kind `{}` (expected organization, website, itemlist or creativework)",
                    s
                ),
            })
    }
}

/// The site's tags followed by its category
fn keywords(site: &Site) -> Vec<String> {
    site.tags
        .iter()
        .cloned()
        .chain(std::iter::once(site.category.as_str().to_string()))
        .collect()
}

/// Build the site-wide document of `kind`.
pub fn document(kind: SchemaKind, base_url: &str, sites: &[Site], copyright_year: i32) -> Value {
    match kind {
        SchemaKind::Organization => json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Organization",
            "name": SITE_NAME,
            "description": SITE_DESCRIPTION,
            "url": base_url,
            "logo": format!("{}/og-image.png", base_url),
            "sameAs": [],
            "inLanguage": "fr",
        }),
        SchemaKind::Website => json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "WebSite",
            "name": format!("{} - Collection Corrompue", SITE_NAME),
            "description": SITE_DESCRIPTION,
            "url": base_url,
            "copyrightYear": copyright_year,
            "inLanguage": "fr",
        }),
        SchemaKind::CreativeWork => json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "CreativeWork",
            "name": format!("{} Collection", SITE_NAME),
            "description": "Collection de sites web expérimentaux avec esthétique glitch et corruption numérique.",
            "genre": ["Design", "Portfolio", "SaaS", "E-commerce"],
            "inLanguage": "fr",
        }),
        SchemaKind::ItemList => {
            let items: Vec<Value> = sites
                .iter()
                .enumerate()
                .map(|(index, site)| {
                    json!({
                        "@type": "ListItem",
                        "position": index + 1,
                        "item": {
                            "@type": "WebSite",
                            "name": site.name,
                            "description": site.description,
                            "url": site.url,
                            "genre": site.tags,
                            "keywords": keywords(site),
                        },
                    })
                })
                .collect();

            json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "ItemList",
                "name": format!("{} Directory", SITE_NAME),
                "description": "Collection de sites web expérimentaux",
                "itemListElement": items,
            })
        }
    }
}

/// `CreativeWork` document embedded in a site's detail page.
pub fn site_document(site: &Site, base_url: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "CreativeWork",
        "name": site.name,
        "description": site.description,
        "url": site.url,
        "image": format!("{}{}", base_url, site.image),
        "genre": site.category.as_str(),
        "keywords": keywords(site).join(", "),
        "author": {
            "@type": "Organization",
            "name": SITE_NAME,
        },
        "inLanguage": "fr",
    })
}

/// Shallow merge: top-level keys of `overrides` replace those of `base`.
/// A non-object `base` is returned unchanged.
pub fn with_overrides(mut base: Value, overrides: Map<String, Value>) -> Value {
    if let Value::Object(ref mut fields) = base {
        for (key, value) in overrides {
            fields.insert(key, value);
        }
    }
    base
}
