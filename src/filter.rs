// 🔎 Product Filter - one linear pass over a catalogue
// `filter` only asks a specification; the by-attribute helpers build one first.

use crate::product::{Color, Product, Size};
use crate::specification::{ColorSpecification, Specification, SizeSpecification, SpecificationExt};
use tracing::debug;

/// Return the products satisfying `spec`, in their original order.
///
/// Takes any iterator of borrowed products, so the output of one pass can be
/// fed straight into another.
pub fn filter<'a, I, S>(products: I, spec: &S) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
    S: Specification + ?Sized,
{
    let mut seen = 0usize;
    let matches: Vec<&'a Product> = products
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|product| spec.is_satisfied(product))
        .collect();

    debug!(
        spec = %spec.describe(),
        seen,
        matched = matches.len(),
        "filtered products"
    );

    matches
}

/// Owned-result variant of [`filter`]
pub fn filter_cloned<S>(products: &[Product], spec: &S) -> Vec<Product>
where
    S: Specification + ?Sized,
{
    filter(products, spec).into_iter().cloned().collect()
}

// ============================================================================
// FIXED-PURPOSE FILTERS
// ============================================================================

/// ProductFilter - the one-method-per-criterion filters, each now a thin
/// wrapper that builds the matching specification
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn new() -> Self {
        ProductFilter
    }

    /// General entry point: any specification
    pub fn filter<'a, S: Specification + ?Sized>(
        &self,
        products: &'a [Product],
        spec: &S,
    ) -> Vec<&'a Product> {
        filter(products, spec)
    }

    pub fn by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        filter(products, &ColorSpecification::new(color))
    }

    pub fn by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        filter(products, &SizeSpecification::new(size))
    }

    pub fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        let spec = SizeSpecification::new(size).and(ColorSpecification::new(color));
        filter(products, &spec)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::sample_catalog;
    use crate::specification::AndSpecification;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    /// Larger catalogue with repeats so ordering is observable
    fn mixed_catalog() -> Vec<Product> {
        vec![
            Product::new("Pear", Color::Green, Size::Small),
            Product::new("Brick", Color::Red, Size::Small),
            Product::new("Lake", Color::Blue, Size::Large),
            Product::new("Leaf", Color::Green, Size::Small),
            Product::new("Barn", Color::Red, Size::Large),
            Product::new("Pear", Color::Green, Size::Small),
            Product::new("Sky", Color::Blue, Size::Large),
        ]
    }

    fn is_subsequence(sub: &[&Product], full: &[Product]) -> bool {
        let mut rest = full.iter();
        sub.iter()
            .all(|wanted| rest.by_ref().any(|candidate| std::ptr::eq(candidate, *wanted)))
    }

    #[test]
    fn test_scenario_green() {
        let catalog = sample_catalog();
        let result = filter(&catalog, &ColorSpecification::new(Color::Green));
        assert_eq!(names(&result), vec!["Apple", "Tree"]);
    }

    #[test]
    fn test_scenario_large() {
        let catalog = sample_catalog();
        let result = filter(&catalog, &SizeSpecification::new(Size::Large));
        assert_eq!(names(&result), vec!["Tree"]);
    }

    #[test]
    fn test_scenario_blue_and_medium() {
        let catalog = sample_catalog();
        let spec = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Medium));
        let result = filter(&catalog, &spec);
        assert_eq!(names(&result), vec!["House"]);
    }

    #[test]
    fn test_scenario_green_and_blue_is_empty() {
        let catalog = sample_catalog();
        let spec = ColorSpecification::new(Color::Green).and(ColorSpecification::new(Color::Blue));
        assert!(filter(&catalog, &spec).is_empty());
    }

    #[test]
    fn test_large_and_green() {
        let catalog = sample_catalog();
        let spec = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Green));
        assert_eq!(names(&filter(&catalog, &spec)), vec!["Tree"]);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let empty: Vec<Product> = Vec::new();
        assert!(filter(&empty, &AndSpecification::new()).is_empty());
        assert!(filter(&empty, &ColorSpecification::new(Color::Red)).is_empty());
    }

    #[test]
    fn test_no_match_gives_empty_output() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, &ColorSpecification::new(Color::Red)).is_empty());
    }

    #[test]
    fn test_empty_conjunction_keeps_everything() {
        let catalog = mixed_catalog();
        let result = filter(&catalog, &AndSpecification::new());
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = mixed_catalog();
        let specs: Vec<Box<dyn Specification>> = vec![
            ColorSpecification::new(Color::Green).boxed(),
            ColorSpecification::new(Color::Red).boxed(),
            SizeSpecification::new(Size::Large).boxed(),
            ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large)).boxed(),
            AndSpecification::new().boxed(),
        ];

        for spec in &specs {
            let result = filter(&catalog, spec);
            assert!(
                is_subsequence(&result, &catalog),
                "{} broke ordering",
                spec.describe()
            );
        }

        let green = filter(&catalog, &ColorSpecification::new(Color::Green));
        assert_eq!(names(&green), vec!["Pear", "Leaf", "Pear"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = mixed_catalog();
        let spec = SizeSpecification::new(Size::Small).and(ColorSpecification::new(Color::Green));

        let once = filter(&catalog, &spec);
        let twice = filter(once.iter().copied(), &spec);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let catalog = mixed_catalog();
        let before = catalog.clone();
        let _ = filter(&catalog, &ColorSpecification::new(Color::Blue));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_filter_cloned() {
        let catalog = sample_catalog();
        let owned = filter_cloned(&catalog, &SizeSpecification::new(Size::Medium));
        assert_eq!(owned, vec![Product::new("House", Color::Blue, Size::Medium)]);
    }

    #[test]
    fn test_product_filter_helpers() {
        let catalog = sample_catalog();
        let pf = ProductFilter::new();

        assert_eq!(names(&pf.by_color(&catalog, Color::Green)), vec!["Apple", "Tree"]);
        assert_eq!(names(&pf.by_size(&catalog, Size::Small)), vec!["Apple"]);
        assert_eq!(
            names(&pf.by_size_and_color(&catalog, Size::Medium, Color::Blue)),
            vec!["House"]
        );
        assert!(pf.by_size_and_color(&catalog, Size::Large, Color::Blue).is_empty());
        assert_eq!(
            pf.filter(&catalog, &AndSpecification::new()).len(),
            catalog.len()
        );
    }
}
