//! Compiled-in data set shown by the plugin.

/// `(title, subtitle, image_name)` for every catalog item, in display order.
pub const ITEMS: &[(&str, &str, &str)] = &[
    ("Apple", "Crisp and sweet", "fruit-apple"),
    ("Banana", "Rich in potassium", "fruit-banana"),
    ("Cherry", "Small, red and tart", "fruit-cherry"),
    ("Dragon Fruit", "Speckled pink flesh", "fruit-dragon"),
    ("Elderberry", "Dark purple clusters", "fruit-elderberry"),
    ("Fig", "Soft with tiny seeds", "fruit-fig"),
    ("Grape", "Grows on vines", "fruit-grape"),
    ("Honeydew", "Pale green melon", "fruit-honeydew"),
    ("Kiwi", "Fuzzy brown skin", "fruit-kiwi"),
    ("Lemon", "Sour citrus", "fruit-lemon"),
    ("Mango", "Tropical stone fruit", "fruit-mango"),
    ("Papaya", "Orange and buttery", "fruit-papaya"),
];

/// Carousel page images, in page order.
pub const CAROUSEL_IMAGES: &[&str] = &["banner-orchard", "banner-market", "banner-harvest"];
