mod cli;

use anyhow::Result;
use cli::{CommandLine, Commands, FilterArgs};
use product_filter::{
    filter, load_products, sample_catalog, Color, ColorSpecification, FilterReport, Product,
    ProductFilter, Size, SizeSpecification, Specification, SpecificationExt, SpecificationSet,
};
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

fn main() -> Result<()> {
    let commands = CommandLine::parse_args();

    init_logging(commands.verbose);

    match commands.command {
        Commands::Demo => run_demo(),
        Commands::Filter(args) => run_filter(&args),
        Commands::Run {
            products,
            specs,
            json,
        } => run_set(&products, &specs, json),
    }
}

/// stderr logging, `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "product_filter=debug"
    } else {
        "product_filter=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() -> Result<()> {
    println!("🧩 Specification filter - open/closed walkthrough");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let products = sample_catalog();
    println!("\n📦 Catalogue:");
    for product in &products {
        println!("   {}", product);
    }

    // Fixed-purpose filter
    let green = ProductFilter::new().by_color(&products, Color::Green);
    print_products("green products (by_color)", &green);

    // Same question, any specification
    let blue_spec = ColorSpecification::new(Color::Blue);
    print_products("blue products", &filter(&products, &blue_spec));

    let large_spec = SizeSpecification::new(Size::Large);
    print_products("large products", &filter(&products, &large_spec));

    let large_green = large_spec.and(ColorSpecification::new(Color::Green));
    print_products("large and green products", &filter(&products, &large_green));

    Ok(())
}

fn run_filter(args: &FilterArgs) -> Result<()> {
    print!("{}", render_filter(args)?);
    Ok(())
}

fn run_set(products_path: &Path, specs_path: &Path, json: bool) -> Result<()> {
    print!("{}", render_set(products_path, specs_path, json)?);
    Ok(())
}

fn print_products(label: &str, products: &[&Product]) {
    print!("{}", render_products(label, products));
}

// ============================================================================
// OUTPUT
// ============================================================================

fn render_filter(args: &FilterArgs) -> Result<String> {
    let products = load_products(&args.products)?;
    let spec = args.to_specification()?;
    debug!(spec = %spec.describe(), "built specification from flags");

    let matches = filter(&products, &spec);

    if args.json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&matches)?))
    } else {
        Ok(render_products(&spec.describe(), &matches))
    }
}

fn render_set(products_path: &Path, specs_path: &Path, json: bool) -> Result<String> {
    let products = load_products(products_path)?;
    let set = SpecificationSet::from_file(specs_path)?;

    render_reports(&set.run(&products), json)
}

fn render_reports(reports: &[FilterReport<'_>], json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(reports)?));
    }

    let mut out = String::new();
    for report in reports {
        let label = match &report.description {
            Some(description) => format!("{} - {}", report.id, description),
            None => report.id.clone(),
        };
        out.push_str(&render_products(&label, &report.matches));
    }
    Ok(out)
}

fn render_products(label: &str, products: &[&Product]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n🔎 {} ({}):", label, products.len());
    if products.is_empty() {
        let _ = writeln!(out, "   (none)");
    }
    for product in products {
        let _ = writeln!(out, "   {}", product);
    }
    out
}
