use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use tilth_core::{
    config_path, samples, CatalogError, CatalogKind, ConfigError, InventoryProduct, ItemId,
    Product, RentalTool, StorefrontConfig,
};
use tilth_query::{CatalogSession, CatalogSource, JsonFileSource, StaticSource};

use crate::args::{Cli, Commands, ListArgs, OutputFormat};
use crate::render::{self, Render};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No {kind} item with id '{id}'")]
    NotFound { kind: CatalogKind, id: ItemId },
}

/// What to do once a catalog is open.
enum Query {
    List(ListArgs),
    Show(ItemId),
    Facets,
}

#[derive(Serialize)]
struct DetailView<'a, T> {
    item: &'a T,
    related: Vec<&'a T>,
}

pub fn run(cli: Cli) -> Result<String, CliError> {
    let Cli {
        catalog,
        file,
        config,
        format,
        command,
    } = cli;

    let config_file = config.or_else(config_path);
    let settings = match &config_file {
        Some(path) => StorefrontConfig::load_from(path)?,
        None => StorefrontConfig::default(),
    };

    let query = match command {
        Commands::Config { init } => {
            return show_config(&settings, config_file.as_deref(), init, format);
        }
        Commands::List(args) => Query::List(args),
        Commands::Show { id } => Query::Show(ItemId::from(id)),
        Commands::Facets => Query::Facets,
    };

    let file = file.as_deref();
    match CatalogKind::from(catalog) {
        CatalogKind::Rentals => {
            run_query::<RentalTool>(query, file, format, &settings, samples::rental_tools)
        }
        CatalogKind::Products => {
            run_query::<Product>(query, file, format, &settings, samples::products)
        }
        CatalogKind::Inventory => {
            run_query::<InventoryProduct>(query, file, format, &settings, samples::inventory)
        }
    }
}

fn run_query<T>(
    query: Query,
    file: Option<&Path>,
    format: OutputFormat,
    config: &StorefrontConfig,
    sample: impl FnOnce() -> Result<Vec<T>, CatalogError>,
) -> Result<String, CliError>
where
    T: Render + Serialize + DeserializeOwned,
{
    let source: Box<dyn CatalogSource<T>> = match file {
        Some(path) => Box::new(JsonFileSource::<T>::new(path)),
        None => Box::new(StaticSource::new(sample()?)),
    };
    let mut session = CatalogSession::from_source(source.as_ref(), config)?;

    match query {
        Query::List(args) => {
            apply_list_args(&mut session, &args);
            let page = session.current_view();
            match format {
                OutputFormat::Plain => Ok(render::page(&page)),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&page)?),
            }
        }
        Query::Show(id) => {
            session.select(&id);
            let Some(item) = session.selected() else {
                return Err(CliError::NotFound { kind: T::KIND, id });
            };
            let related = session.related(T::related_limit());
            match format {
                OutputFormat::Plain => Ok(render::detail(item, &related)),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&DetailView {
                    item,
                    related,
                })?),
            }
        }
        Query::Facets => {
            let facets = session.view().facets();
            match format {
                OutputFormat::Plain => Ok(render::facets(&facets)),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&facets)?),
            }
        }
    }
}

fn apply_list_args<T: Render>(session: &mut CatalogSession<T>, args: &ListArgs) {
    let view = session.view_mut();
    if let Some(term) = &args.search {
        view.set_search_term(term.as_str());
    }
    if args.category.is_some() {
        view.set_category(args.category.clone());
    }
    if args.subcategory.is_some() {
        view.set_subcategory(args.subcategory.clone());
    }
    if args.location.is_some() {
        view.set_location(args.location.clone());
    }
    if args.available {
        view.set_available_only(true);
    }
    if let Some(range) = args.price_range() {
        view.set_price_range(Some(range));
    }
    if let Some(sort) = &args.sort {
        view.set_sort_by(sort);
    }
    if let Some(size) = args.page_size {
        view.set_page_size(size);
    }
    // Last, since every change above resets to page 1.
    view.set_page(args.page);
}

fn show_config(
    config: &StorefrontConfig,
    path: Option<&Path>,
    init: bool,
    format: OutputFormat,
) -> Result<String, CliError> {
    if init {
        let path: PathBuf = path.map(Path::to_path_buf).ok_or(ConfigError::NoConfigDir)?;
        if path.exists() {
            tracing::info!("Config already exists at {}", path.display());
        } else {
            StorefrontConfig::default().save_to(&path)?;
            tracing::info!("Wrote default config to {}", path.display());
        }
    }

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Plain => {
            let location = path.map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
            let sort = config
                .default_sort
                .map_or_else(|| "catalog default".to_string(), |k| k.to_string());
            Ok(format!(
                "config:     {}\ndefault sort: {}\nlayout:     {:?}\npage sizes: products {}, rentals {}, inventory {}\n",
                location,
                sort,
                config.layout,
                config.page_size.products,
                config.page_size.rentals,
                config.page_size.inventory
            ))
        }
    }
}
