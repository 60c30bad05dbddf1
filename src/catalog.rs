//! Static content: record types, load-time schema validation, and the catalogue pager.

pub mod loader;
pub mod pager;
pub mod record;
pub mod schema;

pub use loader::Catalog;
pub use pager::{CatalogPager, ITEMS_PER_PAGE};
pub use record::{Artifact, Category, Genre, GenreNode, ItemType, Rarity, Site, Slot, SlotFilter};
pub use schema::{validate, validate_all, validate_or_fail, FieldViolation, RecordViolation, Schema};
