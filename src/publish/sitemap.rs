//! Sitemap of the public pages: the home page and one detail page per site.

use crate::catalog::Site;
use chrono::NaiveDate;
use std::fmt;

/// Priority of the home page.
pub const HOME_PRIORITY: f32 = 1.0;
/// Priority of every site detail page.
pub const SITE_PRIORITY: f32 = 0.8;

/// `<changefreq>` values of the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Canonical URL of a site's detail page
pub fn site_page_url(base_url: &str, site: &Site) -> String {
    format!("{}/site/{}", base_url, site.id)
}

/// Home page first, then one entry per site in catalogue order.
pub fn entries(base_url: &str, sites: &[Site], last_modified: NaiveDate) -> Vec<SitemapEntry> {
    let home = SitemapEntry {
        loc: base_url.to_string(),
        last_modified,
        change_frequency: ChangeFrequency::Monthly,
        priority: HOME_PRIORITY,
    };

    std::iter::once(home)
        .chain(sites.iter().map(|site| SitemapEntry {
            loc: site_page_url(base_url, site),
            last_modified,
            change_frequency: ChangeFrequency::Monthly,
            priority: SITE_PRIORITY,
        }))
        .collect()
}

/// Serialize entries as a sitemap.org `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
