//! Product Model
//!
//! Brand and category selection plus the catalog record returned by the
//! reference-code lookup.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Watch brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Brand {
    #[serde(alias = "rolex")]
    Rolex,
    #[serde(alias = "tudor")]
    Tudor,
}

impl Brand {
    /// Upper-case label printed on the document and stored in the catalog
    pub const fn label(&self) -> &'static str {
        match self {
            Brand::Rolex => "ROLEX",
            Brand::Tudor => "TUDOR",
        }
    }

    /// Title-case name used in lookup messages
    pub const fn display_name(&self) -> &'static str {
        match self {
            Brand::Rolex => "Rolex",
            Brand::Tudor => "Tudor",
        }
    }

    /// Match a catalog BRAND cell (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "ROLEX" => Some(Brand::Rolex),
            "TUDOR" => Some(Brand::Tudor),
            _ => None,
        }
    }
}

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[serde(alias = "SAAT", alias = "saat")]
    Watch,
    #[serde(alias = "AKSESUAR", alias = "aksesuar")]
    Accessory,
}

impl Category {
    /// Catalog label (Turkish)
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Watch => "SAAT",
            Category::Accessory => "AKSESUAR",
        }
    }

    /// Title-case name used in lookup messages
    pub const fn display_name(&self) -> &'static str {
        match self {
            Category::Watch => "Saat",
            Category::Accessory => "Aksesuar",
        }
    }

    /// Match a catalog CATEGORY cell (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "SAAT" | "WATCH" => Some(Category::Watch),
            "AKSESUAR" | "ACCESSORY" => Some(Category::Accessory),
            _ => None,
        }
    }
}

/// Raw brand/category pair, the wire form of [`ProductLine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub brand: Brand,
    pub category: Category,
}

/// A brand/category combination that exists in the shop.
///
/// Tudor accessories are not sold, so `(TUDOR, ACCESSORY)` has no variant.
/// Rolex accessories (cufflinks) have relaxed serial rules and their own
/// sentence templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Selection", into = "Selection")]
pub enum ProductLine {
    RolexWatch,
    RolexAccessory,
    TudorWatch,
}

impl ProductLine {
    /// Build a product line from an independent brand and category choice
    pub fn from_parts(brand: Brand, category: Category) -> AppResult<Self> {
        match (brand, category) {
            (Brand::Rolex, Category::Watch) => Ok(ProductLine::RolexWatch),
            (Brand::Rolex, Category::Accessory) => Ok(ProductLine::RolexAccessory),
            (Brand::Tudor, Category::Watch) => Ok(ProductLine::TudorWatch),
            (Brand::Tudor, Category::Accessory) => Err(AppError::with_message(
                ErrorCode::InvalidProductLine,
                "TUDOR has no accessory line",
            )
            .with_detail("brand", brand.label())
            .with_detail("category", category.label())),
        }
    }

    pub const fn brand(&self) -> Brand {
        match self {
            ProductLine::RolexWatch | ProductLine::RolexAccessory => Brand::Rolex,
            ProductLine::TudorWatch => Brand::Tudor,
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            ProductLine::RolexWatch | ProductLine::TudorWatch => Category::Watch,
            ProductLine::RolexAccessory => Category::Accessory,
        }
    }

    /// Rolex cufflinks
    pub const fn is_accessory(&self) -> bool {
        matches!(self, ProductLine::RolexAccessory)
    }

    /// Product noun: "saat" / "aksesuar"
    pub const fn noun(&self) -> &'static str {
        if self.is_accessory() { "aksesuar" } else { "saat" }
    }

    /// Genitive form: "saatin" / "aksesuarın"
    pub const fn genitive(&self) -> &'static str {
        if self.is_accessory() { "aksesuarın" } else { "saatin" }
    }

    /// Sentence-initial genitive: "Saatin" / "Aksesuarın"
    pub const fn genitive_capitalized(&self) -> &'static str {
        if self.is_accessory() { "Aksesuarın" } else { "Saatin" }
    }
}

impl TryFrom<Selection> for ProductLine {
    type Error = AppError;

    fn try_from(selection: Selection) -> Result<Self, Self::Error> {
        ProductLine::from_parts(selection.brand, selection.category)
    }
}

impl From<ProductLine> for Selection {
    fn from(line: ProductLine) -> Self {
        Selection {
            brand: line.brand(),
            category: line.category(),
        }
    }
}

/// Catalog row for one reference code (RMC)
///
/// Produced by the lookup collaborator; every descriptive cell may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ProductRecord {
    pub rmc: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub dial: Option<String>,
    #[serde(default)]
    pub bracelet: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
