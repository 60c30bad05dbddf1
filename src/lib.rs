//! # nexai - Glitch Terminal Directory
//!
//! A horizontal, slide-by-slide directory of curated sites rendered in the terminal.
//! Four full-screen slides are navigated with the mouse wheel, the arrow keys or the
//! indicator row; the catalogue slide pages through the site list three cards at a time.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Settings file, environment and CLI flag resolution
//! - [`catalog`] - Static records, load-time validation and the catalogue pager
//! - [`navigation`] - Slide state machine, animation lock and input coalescing
//! - [`input`] - Terminal input collection and key bindings
//! - [`render`] - Event loop state and the terminal user interface
//! - [`publish`] - Sitemap, JSON-LD and page metadata for the web rendition
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod error;

// Content and navigation
pub mod catalog;
pub mod navigation;

// Terminal front end
pub mod input;
pub mod render;

// Derived output
pub mod publish;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{NexaiError, Result};

// Public API surface for external usage
pub use app::Application;
pub use catalog::{Catalog, CatalogPager};
pub use config::Config;
pub use navigation::NavigationController;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
