//! Catalog item and carousel image models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog item.
///
/// Assigned in load order. The list view keys rows by this id rather than by
/// title, so two items may share a title without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A displayable catalog entry.
///
/// Items are immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub subtitle: String,
    /// Identifier of the thumbnail shown next to the item.
    pub image_name: String,
}

impl Item {
    #[must_use]
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            image_name: image_name.into(),
        }
    }
}

/// One page of the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselImage {
    pub image_name: String,
}

impl CarouselImage {
    #[must_use]
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(7).to_string(), "#7");
    }

    #[test]
    fn test_items_with_same_title_are_distinct() {
        let a = Item::new(ItemId(0), "Alpha", "first", "img-a");
        let b = Item::new(ItemId(1), "Alpha", "first", "img-a");
        assert_ne!(a, b);
        assert_ne!(a.id, b.id);
    }
}
