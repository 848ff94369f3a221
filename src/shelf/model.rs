use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Name given to titles added without one.
pub const UNTITLED: &str = "untitled";

/// The closed set of categories a title can carry.
///
/// Ordering follows the canonical string form (see [`Category::as_str`]), not
/// declaration order, so sorted category lists read alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Drama,
    News,
    Comedy,
    Reality,
    LateNight,
    Special,
    StudioOriginal,
    Sports,
    SciFi,
    Biopic,
    Animation,
    Action,
    Other,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Drama,
        Category::News,
        Category::Comedy,
        Category::Reality,
        Category::LateNight,
        Category::Special,
        Category::StudioOriginal,
        Category::Sports,
        Category::SciFi,
        Category::Biopic,
        Category::Animation,
        Category::Action,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Drama => "drama",
            Category::News => "news",
            Category::Comedy => "comedy",
            Category::Reality => "reality",
            Category::LateNight => "late-night",
            Category::Special => "special",
            Category::StudioOriginal => "studio-original",
            Category::Sports => "sports",
            Category::SciFi => "sci-fi",
            Category::Biopic => "biopic",
            Category::Animation => "animation",
            Category::Action => "action",
            Category::Other => "other",
        }
    }

    /// Human readable label for menus and headings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Drama => "Drama",
            Category::News => "News",
            Category::Comedy => "Comedy",
            Category::Reality => "Reality",
            Category::LateNight => "Late Night",
            Category::Special => "Special",
            Category::StudioOriginal => "Studio Original",
            Category::Sports => "Sports",
            Category::SciFi => "Sci-Fi",
            Category::Biopic => "Biopic",
            Category::Animation => "Animation",
            Category::Action => "Action",
            Category::Other => "Other",
        }
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Some(category) = Category::ALL
            .iter()
            .find(|c| c.as_str() == normalized)
        {
            return Ok(*category);
        }
        // Spellings used by older seed files
        match normalized.as_str() {
            "latenight" | "late night" => Ok(Category::LateNight),
            "peacockoriginal" | "studiooriginal" | "studio original" => {
                Ok(Category::StudioOriginal)
            }
            "scifi" | "sci fi" => Ok(Category::SciFi),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// A single media title in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub id: u32,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl TitleRecord {
    pub fn new(id: u32, title: NewTitle) -> Self {
        Self {
            id,
            name: title.name,
            category: title.category,
            image: title.image,
            featured: title.featured,
        }
    }
}

/// The user supplied fields of a title about to be added. The id is assigned
/// by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTitle {
    pub name: String,
    pub category: Category,
    pub image: Option<String>,
    pub featured: bool,
}

impl NewTitle {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            name
        };
        Self {
            name,
            category,
            image: None,
            featured: false,
        }
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}

/// Restricts the display view to one category, or shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn matches(&self, record: &TitleRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => record.category == *category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        s.parse::<Category>()
            .map(Filter::Only)
            .map_err(|_| format!("Invalid filter: {} (expected \"all\" or a category)", s))
    }
}

impl Serialize for Filter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    Name,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Which field the display view is ordered by, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    pub const NAME_ASC: SortOption = SortOption::new(SortField::Name, SortDirection::Ascending);
    pub const NAME_DESC: SortOption = SortOption::new(SortField::Name, SortDirection::Descending);
    pub const CATEGORY_ASC: SortOption =
        SortOption::new(SortField::Category, SortDirection::Ascending);
    pub const CATEGORY_DESC: SortOption =
        SortOption::new(SortField::Category, SortDirection::Descending);

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Decodes the numeric part of a legacy sort code (`s0`..`s3`).
    ///
    /// Codes below 2 sort by name, the rest by category; even codes ascend and
    /// odd codes descend.
    pub fn from_code(code: u8) -> Option<Self> {
        if code > 3 {
            return None;
        }
        let field = if code < 2 {
            SortField::Name
        } else {
            SortField::Category
        };
        let direction = if code % 2 == 0 {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        Some(Self::new(field, direction))
    }

    pub fn code(&self) -> u8 {
        let field = match self.field {
            SortField::Name => 0,
            SortField::Category => 2,
        };
        let direction = match self.direction {
            SortDirection::Ascending => 0,
            SortDirection::Descending => 1,
        };
        field + direction
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Name => "name",
            SortField::Category => "category",
        };
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}-{}", field, direction)
    }
}

impl FromStr for SortOption {
    type Err = String;

    /// Accepts `name-asc`, `name-desc`, `category-asc`, `category-desc`, or a
    /// legacy code such as `s2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Some(code) = normalized.strip_prefix('s').and_then(|rest| rest.parse().ok()) {
            if let Some(option) = SortOption::from_code(code) {
                return Ok(option);
            }
        }
        let (field, direction) = normalized
            .split_once('-')
            .unwrap_or((normalized.as_str(), "asc"));
        let field = match field {
            "name" | "title" => SortField::Name,
            "category" => SortField::Category,
            _ => return Err(format!("Invalid sort option: {}", s)),
        };
        let direction = match direction {
            "asc" | "ascending" => SortDirection::Ascending,
            "desc" | "descending" => SortDirection::Descending,
            _ => return Err(format!("Invalid sort option: {}", s)),
        };
        Ok(SortOption::new(field, direction))
    }
}

impl Serialize for SortOption {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SortOption {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
