//! Catalog of cards, enemies and levels.
//!
//! - `Catalog`: Read-only lookup contract the battle depends on
//! - `StaticCatalog`: In-memory implementation, loadable from JSON
//! - `LevelDef` / `Rewards`: Level encounter and victory rewards

pub mod provider;
pub mod static_catalog;

pub use provider::{Catalog, LevelDef, LevelId, Rewards};
pub use static_catalog::{CatalogData, CatalogError, StaticCatalog};
