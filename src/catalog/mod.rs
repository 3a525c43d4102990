//! Static catalog of heritage content.
//!
//! Three disjoint, read-only collections (places, performing arts,
//! festivals) built into the binary. Collections are ordered slices so
//! listing pages iterate in declaration order; lookups scan the slice,
//! which is fine at this size.

use std::fmt;

/// The closed set of content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Places,
    Arts,
    Festivals,
}

impl Category {
    /// Parse a URL/body category string. Returns `None` for anything
    /// outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "places" => Some(Category::Places),
            "arts" => Some(Category::Arts),
            "festivals" => Some(Category::Festivals),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Places => "places",
            Category::Arts => "arts",
            Category::Festivals => "festivals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry. `coords` is present only for places.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub key: &'static str,
    pub name: &'static str,
    pub coords: Option<Coordinates>,
    pub img: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

const fn place(
    key: &'static str,
    name: &'static str,
    lat: f64,
    lng: f64,
    img: &'static str,
) -> CatalogItem {
    CatalogItem {
        key,
        name,
        coords: Some(Coordinates { lat, lng }),
        img,
    }
}

const fn entry(key: &'static str, name: &'static str, img: &'static str) -> CatalogItem {
    CatalogItem {
        key,
        name,
        coords: None,
        img,
    }
}

static PLACES: &[CatalogItem] = &[
    place("taj-mahal", "Taj Mahal", 27.1751, 78.0421, "taj.jpg"),
    place("hampi", "Hampi", 15.3350, 76.4600, "hampi.jpg"),
    place("konark", "Konark Sun Temple", 19.8876, 86.0945, "konark.jpg"),
    place("ajanta", "Ajanta Caves", 20.5519, 75.7033, "ajanta.jpg"),
    place("varanasi", "Varanasi Ghats", 25.3176, 82.9739, "varanasi.jpg"),
    place("meenakshi", "Meenakshi Temple", 9.9195, 78.1193, "meenakshi.jpg"),
    place("redfort", "Red Fort", 28.6562, 77.2410, "redfort.jpg"),
    place("statue", "Statue of Unity", 21.8380, 73.7191, "statue.jpg"),
    place("charminar", "Charminar", 17.3616, 78.4747, "charminar.jpg"),
    place("mysore", "Mysore Palace", 12.3051, 76.6551, "mysore.jpg"),
    place("khajuraho", "Khajuraho Temples", 24.8318, 79.9199, "khajuraho.jpg"),
    place("sanchi", "Sanchi Stupa", 23.4793, 77.7399, "sanchi.jpg"),
];

static ARTS: &[CatalogItem] = &[
    entry("kathakali", "Kathakali", "kathakali.jpg"),
    entry("bharatanatyam", "Bharatanatyam", "bharatanatyam.jpg"),
    entry("yakshagana", "Yakshagana", "yakshagana.jpg"),
    entry("kathak", "Kathak", "kathak.jpg"),
    entry("madhubani", "Madhubani Painting", "madhubani.jpg"),
    entry("chhau", "Chhau Dance", "chhau.jpg"),
    entry("odissi", "Odissi Dance", "odissi.jpg"),
    entry("kalaripayattu", "Kalaripayattu", "kalaripayattu.jpg"),
];

static FESTIVALS: &[CatalogItem] = &[
    entry("diwali", "Diwali", "diwali.jpg"),
    entry("pongal", "Pongal", "pongal.jpg"),
    entry("navratri", "Navratri", "navratri.jpg"),
    entry("holi", "Holi", "holi.jpg"),
    entry("onam", "Onam", "onam.jpg"),
    entry("durga", "Durga Puja", "durga.jpg"),
    entry("ganesh", "Ganesh Chaturthi", "ganesh.jpg"),
    entry("ramzan", "Ramzan (Eid-ul-Fitr)", "ramzan.jpg"),
];

/// Display names whose Wikipedia article title differs (disambiguation
/// suffixes, alternate phrasing).
static WIKI_TITLE_ALIASES: &[(&str, &str)] = &[
    ("Varanasi Ghats", "Ghats in Varanasi"),
    ("Khajuraho Temples", "Khajuraho Group of Monuments"),
    ("Chhau Dance", "Chhau dance"),
    ("Odissi Dance", "Odissi"),
    ("Pongal", "Pongal (festival)"),
    ("Ramzan (Eid-ul-Fitr)", "Eid al-Fitr"),
];

/// The collection for a category, in declaration order.
pub fn items(category: Category) -> &'static [CatalogItem] {
    match category {
        Category::Places => PLACES,
        Category::Arts => ARTS,
        Category::Festivals => FESTIVALS,
    }
}

/// Look up a single item by key within a category.
pub fn find(category: Category, key: &str) -> Option<&'static CatalogItem> {
    items(category).iter().find(|item| item.key == key)
}

/// Resolve a display name to the canonical Wikipedia article title.
/// Names without an alias are used unchanged.
pub fn canonical_wiki_title(name: &str) -> &str {
    WIKI_TITLE_ALIASES
        .iter()
        .find(|(display, _)| *display == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}
