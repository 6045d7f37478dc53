// 📦 Product Catalogue - Records tested by specifications
// Products are plain values: created once, compared structurally, never mutated

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

// ============================================================================
// ATTRIBUTES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| anyhow!("Unknown color '{}' (expected red, green or blue)", s))
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Size::ALL
            .into_iter()
            .find(|sz| sz.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| anyhow!("Unknown size '{}' (expected small, medium or large)", s))
    }
}

impl TryFrom<String> for Size {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

// ============================================================================
// PRODUCT
// ============================================================================

/// A catalogue entry. Two products are the same product iff all three
/// attributes are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Product {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

/// The three-product catalogue used by the demo and most tests
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Medium),
    ]
}

// ============================================================================
// LOADERS
// ============================================================================

/// Load products from a CSV file with a `name,color,size` header row
pub fn load_csv(csv_path: &Path) -> Result<Vec<Product>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;

    let mut products = Vec::new();

    for result in rdr.deserialize() {
        let product: Product = match result {
            Ok(product) => product,
            Err(err) => {
                let location = err
                    .position()
                    .map(|pos| format!(" on line {}", pos.line()))
                    .unwrap_or_default();
                return Err(err)
                    .with_context(|| format!("Failed to deserialize product{}", location));
            }
        };
        products.push(product);
    }

    info!(path = ?csv_path, count = products.len(), "loaded products from CSV");
    Ok(products)
}

/// Load products from a JSON array
pub fn load_json(json_path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read products file: {:?}", json_path))?;

    let products: Vec<Product> =
        serde_json::from_str(&content).context("Failed to parse products JSON")?;

    info!(path = ?json_path, count = products.len(), "loaded products from JSON");
    Ok(products)
}

/// Load products, picking the format from the file extension
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        _ => Err(anyhow!(
            "Unsupported products file {:?} (expected .csv or .json)",
            path
        )),
    }
}

// ============================================================================
// TESTS
// ============================================================================
