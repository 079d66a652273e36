//! Item catalog, search filtering and carousel paging.
//!
//! The catalog is loaded once from the compiled-in data set and never mutated.
//! Filtering is a pure function over a slice of items: the caller owns the
//! query and stores the derived view, the catalog itself stays untouched.

use super::item::{CarouselImage, Item, ItemId};
use super::seed;

/// Substring matching policy used by [`filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Characters are compared after Unicode lowercasing.
    #[default]
    CaseInsensitive,
    /// Characters must be equal as written.
    CaseSensitive,
}

impl MatchPolicy {
    fn chars_eq(self, a: char, b: char) -> bool {
        match self {
            Self::CaseSensitive => a == b,
            Self::CaseInsensitive => a == b || a.to_lowercase().eq(b.to_lowercase()),
        }
    }
}

/// Returns the char-index range `(start, end)` of the first occurrence of
/// `query` in `text`, or `None` when it does not occur.
///
/// An empty query matches at `(0, 0)`.
///
/// # Example
///
/// ```
/// use showcase::domain::catalog::{match_range, MatchPolicy};
///
/// assert_eq!(match_range("Alpaca", "PAC", MatchPolicy::CaseInsensitive), Some((2, 5)));
/// assert_eq!(match_range("Alpaca", "PAC", MatchPolicy::CaseSensitive), None);
/// ```
#[must_use]
pub fn match_range(text: &str, query: &str, policy: MatchPolicy) -> Option<(usize, usize)> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return Some((0, 0));
    }

    let haystack: Vec<char> = text.chars().collect();
    if needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .find(|&start| {
            haystack[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(&h, &n)| policy.chars_eq(h, n))
        })
        .map(|start| (start, start + needle.len()))
}

fn item_matches(item: &Item, query: &str, policy: MatchPolicy) -> bool {
    match_range(&item.title, query, policy).is_some()
        || match_range(&item.subtitle, query, policy).is_some()
}

/// Returns the items whose title or subtitle contains `query`.
///
/// The result preserves the input order. An empty query returns every item.
///
/// # Example
///
/// ```
/// use showcase::domain::catalog::{filter, Catalog, MatchPolicy};
///
/// let catalog = Catalog::from_entries(
///     &[("Alpha", "first", "a"), ("Alpaca", "woolly", "b"), ("Beta", "second", "c")],
///     &[],
/// );
/// let hits = filter(catalog.items(), "lp", MatchPolicy::CaseInsensitive);
/// assert_eq!(hits.len(), 2);
/// ```
#[must_use]
pub fn filter(items: &[Item], query: &str, policy: MatchPolicy) -> Vec<Item> {
    let _span = tracing::debug_span!(
        "filter",
        total_items = items.len(),
        query_len = query.len(),
        policy = ?policy
    )
    .entered();

    if query.is_empty() {
        return items.to_vec();
    }

    let matched: Vec<Item> = items
        .iter()
        .filter(|item| item_matches(item, query, policy))
        .cloned()
        .collect();

    tracing::debug!(matched = matched.len(), "filter applied");
    matched
}

/// The static collection of items and carousel images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    images: Vec<CarouselImage>,
}

impl Catalog {
    /// Builds the catalog from the compiled-in data set.
    ///
    /// Calling this again produces an identical catalog.
    #[must_use]
    pub fn load() -> Self {
        let catalog = Self::from_entries(seed::ITEMS, seed::CAROUSEL_IMAGES);
        tracing::debug!(
            items = catalog.items.len(),
            images = catalog.images.len(),
            "catalog loaded"
        );
        catalog
    }

    /// Builds a catalog from `(title, subtitle, image_name)` tuples and image
    /// names, assigning ids in order.
    #[must_use]
    pub fn from_entries(items: &[(&str, &str, &str)], images: &[&str]) -> Self {
        let items = items
            .iter()
            .zip(0u32..)
            .map(|(&(title, subtitle, image), id)| Item::new(ItemId(id), title, subtitle, image))
            .collect();
        let images = images.iter().map(|&name| CarouselImage::new(name)).collect();
        Self { items, images }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn images(&self) -> &[CarouselImage] {
        &self.images
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Active-page tracking for the carousel.
///
/// Page indices are always clamped into the image range; with no images the
/// page is `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    page_count: usize,
    current: usize,
}

impl Carousel {
    #[must_use]
    pub const fn new(page_count: usize) -> Self {
        Self {
            page_count,
            current: 0,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    /// Moves to `index`, clamped into `[0, page_count - 1]`. Returns the page
    /// actually selected.
    pub fn update_page(&mut self, index: i64) -> usize {
        let last = self.page_count.saturating_sub(1);
        self.current = if index <= 0 {
            0
        } else {
            usize::try_from(index).map_or(last, |i| i.min(last))
        };
        self.current
    }

    pub fn next_page(&mut self) -> usize {
        let last = self.page_count.saturating_sub(1);
        self.current = (self.current + 1).min(last);
        self.current
    }

    pub fn previous_page(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }
}
