// 🏷️ Specification Definitions - Specifications as Data
// JSON descriptions of specification trees, compiled once when loaded

use crate::filter::filter;
use crate::product::{Color, Product, Size};
use crate::specification::{AndSpecification, ColorSpecification, SizeSpecification, Specification};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

// ============================================================================
// DEFINITION
// ============================================================================

/// One node of a specification tree.
///
/// JSON shape (externally tagged):
/// - `{"color": "green"}`
/// - `{"size": "large"}`
/// - `{"and": [ {"color": "blue"}, {"size": "medium"} ]}`
///
/// A `null` child or an unknown attribute value is a parse error, so a
/// definition that parses always compiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecificationDef {
    Color(Color),
    Size(Size),
    And(Vec<SpecificationDef>),
}

impl SpecificationDef {
    /// Parse a single definition from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse specification JSON")
    }

    /// Load a single definition from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read specification file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    /// Compile into a live specification
    pub fn build(&self) -> Box<dyn Specification> {
        match self {
            SpecificationDef::Color(color) => Box::new(ColorSpecification::new(*color)),
            SpecificationDef::Size(size) => Box::new(SizeSpecification::new(*size)),
            SpecificationDef::And(children) => {
                Box::new(children.iter().map(SpecificationDef::build).collect::<AndSpecification>())
            }
        }
    }
}

/// A definition with a stable id, as stored in a definitions file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSpecification {
    /// Unique within a set
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub spec: SpecificationDef,
}

// ============================================================================
// FILTER REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FilterReport<'a> {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub matches: Vec<&'a Product>,
}

// ============================================================================
// SPECIFICATION SET
// ============================================================================

struct CompiledSpecification {
    id: String,
    description: Option<String>,
    spec: Box<dyn Specification>,
}

/// An ordered collection of named, already-compiled specifications
#[derive(Default)]
pub struct SpecificationSet {
    entries: Vec<CompiledSpecification>,
}

impl SpecificationSet {
    /// Create a new empty set
    pub fn new() -> Self {
        SpecificationSet { entries: Vec::new() }
    }

    /// Load definitions from a JSON file holding an array of named specifications
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read definitions file: {:?}", path.as_ref()))?;

        let set = Self::from_json(&content)?;
        info!(path = ?path.as_ref(), count = set.len(), "loaded specification definitions");
        Ok(set)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let definitions: Vec<NamedSpecification> =
            serde_json::from_str(json).context("Failed to parse definitions JSON")?;

        Self::from_definitions(definitions)
    }

    /// Compile a list of definitions, keeping their order. Every bad id is
    /// reported in one error.
    pub fn from_definitions(definitions: Vec<NamedSpecification>) -> Result<Self> {
        let problems = validate_ids(&definitions);
        if !problems.is_empty() {
            bail!(
                "{} invalid definition(s): {}",
                problems.len(),
                problems.join("; ")
            );
        }

        let mut set = SpecificationSet::new();
        for definition in definitions {
            set.add(definition)?;
        }
        Ok(set)
    }

    /// Add a single definition. Ids must be non-empty and unique.
    pub fn add(&mut self, definition: NamedSpecification) -> Result<()> {
        let id = definition.id.trim();
        if id.is_empty() {
            bail!("Specification id must not be empty");
        }
        if self.entries.iter().any(|e| e.id == id) {
            bail!("Duplicate specification id '{}'", id);
        }

        self.entries.push(CompiledSpecification {
            id: id.to_string(),
            description: definition.description,
            spec: definition.spec.build(),
        });
        Ok(())
    }

    /// Look up a compiled specification by id
    pub fn get(&self, id: &str) -> Option<&dyn Specification> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.spec.as_ref())
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    /// Get number of specifications loaded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filter `products` with every specification, one report per
    /// specification in load order
    pub fn run<'a>(&self, products: &'a [Product]) -> Vec<FilterReport<'a>> {
        self.entries
            .iter()
            .map(|entry| FilterReport {
                id: entry.id.clone(),
                description: entry.description.clone(),
                matches: filter(products, entry.spec.as_ref()),
            })
            .collect()
    }
}

impl std::fmt::Debug for SpecificationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.id, e.spec.describe())))
            .finish()
    }
}

/// Check a set of definitions without compiling them: reports every
/// duplicate or empty id at once
pub fn validate_ids(definitions: &[NamedSpecification]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut problems = Vec::new();

    for (index, definition) in definitions.iter().enumerate() {
        let id = definition.id.trim();
        if id.is_empty() {
            problems.push(format!("definition #{} has an empty id", index + 1));
        } else if !seen.insert(id) {
            problems.push(format!("definition #{} reuses id '{}'", index + 1, id));
        }
    }

    problems
}

// ============================================================================
// TESTS
// ============================================================================
