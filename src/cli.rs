use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use product_filter::{
    AndSpecification, Color, ColorSpecification, Size, SizeSpecification, SpecificationDef,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "product-filter")]
#[command(about = "Filter a product catalogue with composable specifications.")]
#[command(version)]
pub struct CommandLine {
    /// Log debug output to stderr (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in three-product walkthrough
    Demo,
    /// Filter a catalogue by attribute flags and/or a specification file
    #[command(alias = "f")]
    Filter(FilterArgs),
    /// Run every named specification in a definitions file
    #[command(alias = "r")]
    Run {
        /// Products file (.csv or .json)
        #[arg(short, long)]
        products: PathBuf,
        /// JSON array of {"id", "description"?, "spec"} definitions
        #[arg(short, long)]
        specs: PathBuf,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Products file (.csv or .json)
    #[arg(short, long)]
    pub products: PathBuf,
    /// Keep products of this color
    #[arg(short, long)]
    pub color: Option<Color>,
    /// Keep products of this size
    #[arg(short = 'z', long)]
    pub size: Option<Size>,
    /// Specification definition file, ANDed with the flags above
    #[arg(long)]
    pub spec: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl FilterArgs {
    /// Conjunction of the supplied criteria in flag order: color, size, file.
    /// No criteria means every product matches.
    pub fn to_specification(&self) -> Result<AndSpecification> {
        let mut spec = AndSpecification::new();

        if let Some(color) = self.color {
            spec.push(ColorSpecification::new(color));
        }
        if let Some(size) = self.size {
            spec.push(SizeSpecification::new(size));
        }
        if let Some(path) = &self.spec {
            spec.push_boxed(SpecificationDef::from_file(path)?.build());
        }

        Ok(spec)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
