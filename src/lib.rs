// Product Filter - Core Library
// Exposes the specification engine for the CLI and for tests

pub mod product;        // Records: Product, Color, Size + catalogue loaders
pub mod specification;  // Predicate contract + color/size/AND specifications
pub mod filter;         // Order-preserving filter pass
pub mod definition;     // Specifications as data (JSON)

// Re-export commonly used types
pub use product::{
    Color, Product, Size,
    load_csv, load_json, load_products, sample_catalog,
};
pub use specification::{
    Specification, SpecificationExt,
    ColorSpecification, SizeSpecification, AndSpecification,
    and, evaluate,
};
pub use filter::{filter, filter_cloned, ProductFilter};
pub use definition::{
    SpecificationDef, NamedSpecification, SpecificationSet, FilterReport,
    validate_ids,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
