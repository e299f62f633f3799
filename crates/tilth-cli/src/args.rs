use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tilth_core::{CatalogKind, PriceRange};

#[derive(Parser, Debug)]
#[command(name = "tilth")]
#[command(about = "Browse agricultural storefront catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Which storefront section to open.
    #[arg(long, value_enum, default_value = "rentals", global = true)]
    pub catalog: CatalogArg,

    /// Read items from a JSON file instead of the bundled sample data.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Config file to use instead of the per-user one.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the filtered, sorted catalog.
    List(ListArgs),

    /// Show the detail view of one item.
    Show {
        id: String,
    },

    /// List the category, subcategory and location values.
    Facets,

    /// Print the effective configuration.
    Config {
        /// Write the defaults to the config file if it does not exist.
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against name and description.
    #[arg(long, short)]
    pub search: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub subcategory: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Hide items that cannot be ordered or rented right now.
    #[arg(long)]
    pub available: bool,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    /// Sort key: recommended, price-low, price-high, rating, name-asc,
    /// name-desc, stock-asc, stock-desc.
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long, short, default_value = "1")]
    pub page: usize,

    /// Override the configured page size.
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListArgs {
    pub fn price_range(&self) -> Option<PriceRange> {
        if self.min_price.is_none() && self.max_price.is_none() {
            None
        } else {
            Some(PriceRange::new(self.min_price, self.max_price))
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogArg {
    Products,
    Rentals,
    Inventory,
}

impl From<CatalogArg> for CatalogKind {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Products => CatalogKind::Products,
            CatalogArg::Rentals => CatalogKind::Rentals,
            CatalogArg::Inventory => CatalogKind::Inventory,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_args() {
        let cli = Cli::try_parse_from([
            "tilth",
            "--catalog",
            "products",
            "list",
            "--search",
            "fertilizer",
            "--sort",
            "price-low",
            "--max-price",
            "30",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.catalog, CatalogArg::Products);
        assert_eq!(cli.format, OutputFormat::Plain);
        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.search.as_deref(), Some("fertilizer"));
        assert_eq!(args.sort.as_deref(), Some("price-low"));
        assert_eq!(args.page, 2);
        assert_eq!(args.price_range(), Some(PriceRange::at_most(30.0)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tilth", "show", "4", "--format", "json"]).unwrap();
        assert_eq!(cli.catalog, CatalogArg::Rentals);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Show { ref id } if id == "4"));
    }

    #[test]
    fn test_no_price_flags_means_no_range() {
        assert_eq!(ListArgs::default().price_range(), None);
    }

    #[test]
    fn test_unknown_catalog_rejected() {
        assert!(Cli::try_parse_from(["tilth", "--catalog", "seeds", "facets"]).is_err());
    }
}
