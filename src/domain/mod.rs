//! Domain layer for the Showcase plugin.
//!
//! Pure types and functions with no dependency on Zellij or rendering:
//!
//! - [`item`]: `Item`, `ItemId`, `CarouselImage`
//! - [`catalog`]: the compiled-in catalog, search filtering, carousel paging
//! - [`stats`]: character-frequency statistics over item titles
//! - [`error`]: error type and result alias

pub mod catalog;
pub mod error;
pub mod item;
mod seed;
pub mod stats;

pub use catalog::{filter, Carousel, Catalog, MatchPolicy};
pub use error::{Result, ShowcaseError};
pub use item::{CarouselImage, Item, ItemId};
pub use stats::{compute_stats, CharFrequency, StatsSnapshot};
