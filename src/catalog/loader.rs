//! Loading of the static record lists.
//!
//! Records ship inside the binary and may be replaced by a data directory holding
//! `sites.toml` and `artifacts.toml`. Loading is fail-fast: the first list containing an
//! invalid record aborts with an error naming every invalid record in that list. Top-level
//! keys other than the known lists are rejected, and a data directory must define `sites`.

use crate::catalog::record::{Artifact, GenreNode, Site, SlotFilter};
use crate::catalog::schema::{validate_all, Schema};
use crate::error::{NexaiError, Result};
use std::path::{Path, PathBuf};

/// File name of the site list inside a data directory.
pub const SITES_FILE: &str = "sites.toml";
/// File name of the artifact list inside a data directory.
pub const ARTIFACTS_FILE: &str = "artifacts.toml";

const BUNDLED_SITES: &str = include_str!("../../data/sites.toml");
const BUNDLED_ARTIFACTS: &str = include_str!("../../data/artifacts.toml");

/// Every validated record known to the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    sites: Vec<Site>,
    artifacts: Vec<Artifact>,
    genre_nodes: Vec<GenreNode>,
    slot_filters: Vec<SlotFilter>,
}

impl Catalog {
    /// Load the records compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::parse(
            BUNDLED_SITES,
            Path::new("<bundled>/sites.toml"),
            BUNDLED_ARTIFACTS,
            Path::new("<bundled>/artifacts.toml"),
        )
    }

    /// Load the records from a data directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let sites_path = dir.join(SITES_FILE);
        let artifacts_path = dir.join(ARTIFACTS_FILE);
        let sites_src = read_source(&sites_path)?;
        let artifacts_src = read_source(&artifacts_path)?;

        log::debug!("Loading catalog from {}", dir.display());
        // An override without a site list is almost certainly a misnamed table.
        if !parse_document(&sites_src, &sites_path)?.contains_key("sites") {
            return Err(NexaiError::parse(&sites_path, "missing `sites` list"));
        }
        Self::parse(&sites_src, &sites_path, &artifacts_src, &artifacts_path)
    }

    /// Load the records from in-memory TOML documents
    pub fn from_toml(sites_src: &str, artifacts_src: &str) -> Result<Self> {
        Self::parse(
            sites_src,
            Path::new(SITES_FILE),
            artifacts_src,
            Path::new(ARTIFACTS_FILE),
        )
    }

    fn parse(
        sites_src: &str,
        sites_origin: &Path,
        artifacts_src: &str,
        artifacts_origin: &Path,
    ) -> Result<Self> {
        let mut sites_doc = parse_document(sites_src, sites_origin)?;
        let mut artifacts_doc = parse_document(artifacts_src, artifacts_origin)?;

        let sites = load_list::<Site>(&mut sites_doc, "sites", sites_origin)?;
        let artifacts = load_list::<Artifact>(&mut artifacts_doc, "artifacts", artifacts_origin)?;
        let genre_nodes =
            load_list::<GenreNode>(&mut artifacts_doc, "genre_nodes", artifacts_origin)?;
        let slot_filters =
            load_list::<SlotFilter>(&mut artifacts_doc, "slot_filters", artifacts_origin)?;
        reject_leftover_keys(&sites_doc, sites_origin)?;
        reject_leftover_keys(&artifacts_doc, artifacts_origin)?;

        log::info!(
            "Catalog loaded: {} sites, {} artifacts, {} genre nodes, {} slot filters",
            sites.len(),
            artifacts.len(),
            genre_nodes.len(),
            slot_filters.len()
        );

        Ok(Self {
            sites,
            artifacts,
            genre_nodes,
            slot_filters,
        })
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn genre_nodes(&self) -> &[GenreNode] {
        &self.genre_nodes
    }

    pub fn slot_filters(&self) -> &[SlotFilter] {
        &self.slot_filters
    }

    /// Look up a site by id
    pub fn find_site(&self, id: &str) -> Result<&Site> {
        self.sites
            .iter()
            .find(|site| site.id == id)
            .ok_or_else(|| NexaiError::site_not_found(id))
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| NexaiError::file_error(format!("Cannot read {}", path.display()), e))
}

fn parse_document(src: &str, origin: &Path) -> Result<toml::Table> {
    src.parse::<toml::Table>()
        .map_err(|e| NexaiError::parse(origin, e.message()))
}

/// Remove `key` from the document and validate it as a list of `T`.
/// A missing key is an empty list.
fn load_list<T: Schema>(doc: &mut toml::Table, key: &str, origin: &Path) -> Result<Vec<T>> {
    let values = match doc.remove(key) {
        None => Vec::new(),
        Some(toml::Value::Array(values)) => values,
        Some(other) => {
            return Err(NexaiError::parse(
                PathBuf::from(origin),
                format!("`{}` must be an array of tables, found {}", key, other.type_str()),
            ))
        }
    };

    validate_all::<T>(values).map_err(|violations| NexaiError::CatalogInvalid {
        kind: T::KIND,
        violations,
    })
}

/// Every known list has been removed by now; anything left is a typo or stray data.
fn reject_leftover_keys(doc: &toml::Table, origin: &Path) -> Result<()> {
    match doc.keys().next() {
        Some(key) => Err(NexaiError::parse(origin, format!("unknown key `{}`", key))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::Category;
    use std::fs;
    use tempfile::TempDir;

    const ONE_SITE: &str = r#"
[[sites]]
id = "a"
name = "Alpha"
description = "First"
url = "https://alpha.example"
category = "saas"
image = "/a.jpg"
tags = ["one"]
"#;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.sites().is_empty());
        assert_eq!(catalog.artifacts().len(), 10);
        assert_eq!(catalog.genre_nodes().len(), 5);
        assert_eq!(catalog.slot_filters().len(), 4);
        assert_eq!(catalog.sites()[0].category, Category::Nothing);
    }

    #[test]
    fn find_site_by_id() {
        let catalog = Catalog::from_toml(ONE_SITE, "").unwrap();
        assert_eq!(catalog.find_site("a").unwrap().name, "Alpha");

        let err = catalog.find_site("zzz").unwrap_err();
        assert!(matches!(err, NexaiError::NotFound { .. }));
    }

    #[test]
    fn missing_lists_are_empty() {
        let catalog = Catalog::from_toml("", "").unwrap();
        assert!(catalog.sites().is_empty());
        assert!(catalog.artifacts().is_empty());
    }

    #[test]
    fn misnamed_lists_are_rejected() {
        let err = Catalog::from_toml(&ONE_SITE.replace("[[sites]]", "[[site]]"), "").unwrap_err();
        match err {
            NexaiError::ParseError { path, message } => {
                assert_eq!(path, PathBuf::from(SITES_FILE));
                assert_eq!(message, "unknown key `site`");
            }
            other => panic!("expected ParseError, got {other:?}"),
        }

        let err = Catalog::from_toml(ONE_SITE, "[[artifact]]\nid = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("unknown key `artifact`"));
    }

    #[test]
    fn data_directory_without_site_list_is_rejected() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join(SITES_FILE), "").unwrap();
        fs::write(dir.path().join(ARTIFACTS_FILE), "").unwrap();

        let err = Catalog::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("missing `sites` list"));
    }

    #[test]
    fn one_invalid_record_aborts_loading() {
        let broken = ONE_SITE.replace("https://alpha.example", "alpha");
        let err = Catalog::from_toml(&broken, "").unwrap_err();
        match err {
            NexaiError::CatalogInvalid { kind, violations } => {
                assert_eq!(kind, "site");
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].fields[0].field, "url");
            }
            other => panic!("expected CatalogInvalid, got {other:?}"),
        }
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        let err = Catalog::from_toml("[[sites]\n", "").unwrap_err();
        assert!(matches!(err, NexaiError::ParseError { .. }));

        let err = Catalog::from_toml("sites = 3", "").unwrap_err();
        assert!(err.to_string().contains("must be an array of tables"));
    }

    #[test]
    fn loads_from_data_directory() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join(SITES_FILE), ONE_SITE).unwrap();
        fs::write(dir.path().join(ARTIFACTS_FILE), "").unwrap();

        let catalog = Catalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.sites().len(), 1);
    }

    #[test]
    fn missing_data_file_is_file_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join(SITES_FILE), ONE_SITE).unwrap();

        let err = Catalog::from_dir(dir.path()).unwrap_err();
        match err {
            NexaiError::FileError { message, .. } => {
                assert!(message.contains(ARTIFACTS_FILE));
            }
            other => panic!("expected FileError, got {other:?}"),
        }
    }
}
