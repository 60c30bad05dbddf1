//! Derived output for the web rendition of the directory: sitemap, JSON-LD and page
//! metadata. All of it is computed from the validated catalogue and a base URL.

pub mod metadata;
pub mod sitemap;
pub mod structured_data;

pub use metadata::PageMetadata;
pub use sitemap::{entries as sitemap_entries, render_xml as render_sitemap, SitemapEntry};
pub use structured_data::{document, site_document, with_overrides, SchemaKind};

/// Public name of the directory.
pub const SITE_NAME: &str = "NEXAI";
/// One-line description used by the site-wide documents.
pub const SITE_DESCRIPTION: &str = "Une zone corrompue. Un directory horizontal avec glitch.";
