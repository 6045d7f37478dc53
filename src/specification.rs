// 🧩 Specification Engine - Open/Closed filtering
// A specification is a side-effect-free test over a product. New filters are
// new specifications; nothing that consumes them has to change.

use crate::product::{Color, Product, Size};
use std::fmt;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// Specification - the predicate contract
///
/// Implementations must be pure: the answer depends only on the product and
/// on whatever the specification captured when it was built.
pub trait Specification: Send + Sync {
    /// Does `product` satisfy this specification?
    fn is_satisfied(&self, product: &Product) -> bool;

    /// Human-readable form for logs and CLI output
    fn describe(&self) -> String {
        "custom".to_string()
    }
}

impl<S: Specification + ?Sized> Specification for &S {
    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl fmt::Debug for dyn Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Specification({})", self.describe())
    }
}

/// Evaluate `spec` against `product`. Total: never fails.
pub fn evaluate<S: Specification + ?Sized>(spec: &S, product: &Product) -> bool {
    spec.is_satisfied(product)
}

// ============================================================================
// ATTRIBUTE SPECIFICATIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        ColorSpecification { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Specification for ColorSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color == self.color
    }

    fn describe(&self) -> String {
        format!("color = {}", self.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        SizeSpecification { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Specification for SizeSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size == self.size
    }

    fn describe(&self) -> String {
        format!("size = {}", self.size)
    }
}

// ============================================================================
// CONJUNCTION
// ============================================================================

/// AndSpecification - satisfied only when every child is
///
/// Children are evaluated in insertion order and evaluation stops at the
/// first child that is not satisfied. An empty conjunction is satisfied by
/// every product.
#[derive(Default)]
pub struct AndSpecification {
    specs: Vec<Box<dyn Specification>>,
}

impl AndSpecification {
    /// Create an empty conjunction (matches everything)
    pub fn new() -> Self {
        AndSpecification { specs: Vec::new() }
    }

    pub fn from_specs(specs: Vec<Box<dyn Specification>>) -> Self {
        AndSpecification { specs }
    }

    /// Append a child, builder style
    pub fn with<S: Specification + 'static>(mut self, spec: S) -> Self {
        self.push(spec);
        self
    }

    /// Append a child. Chaining onto a conjunction extends it instead of
    /// nesting a new one.
    pub fn and<S: Specification + 'static>(self, spec: S) -> Self {
        self.with(spec)
    }

    pub fn push<S: Specification + 'static>(&mut self, spec: S) {
        self.specs.push(Box::new(spec));
    }

    pub fn push_boxed(&mut self, spec: Box<dyn Specification>) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Specification for AndSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(product))
    }

    fn describe(&self) -> String {
        match self.specs.len() {
            0 => "any".to_string(),
            1 => self.specs[0].describe(),
            _ => {
                let parts: Vec<String> = self.specs.iter().map(|s| s.describe()).collect();
                format!("({})", parts.join(" AND "))
            }
        }
    }
}

impl fmt::Debug for AndSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.specs.iter()).finish()
    }
}

impl FromIterator<Box<dyn Specification>> for AndSpecification {
    fn from_iter<I: IntoIterator<Item = Box<dyn Specification>>>(iter: I) -> Self {
        AndSpecification::from_specs(iter.into_iter().collect())
    }
}

/// Conjunction over the full supplied sequence, in order
pub fn and<I>(specs: I) -> AndSpecification
where
    I: IntoIterator<Item = Box<dyn Specification>>,
{
    specs.into_iter().collect()
}

// ============================================================================
// COMBINATOR SUGAR
// ============================================================================

/// `a.and(b)` for any pair of specifications
pub trait SpecificationExt: Specification + Sized + 'static {
    fn and<S: Specification + 'static>(self, other: S) -> AndSpecification {
        AndSpecification::new().with(self).with(other)
    }

    fn boxed(self) -> Box<dyn Specification> {
        Box::new(self)
    }
}

impl<T: Specification + 'static> SpecificationExt for T {}

// ============================================================================
// TESTS
// ============================================================================
