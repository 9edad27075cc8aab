use catalog_search::catalog::Catalog;
use catalog_search::facets::FacetCache;
use catalog_search::listing::{self, ListingFilter, SortOrder, DEFAULT_MAX_PRICE};
use catalog_search::search::{debug_matches, product_matches};
use catalog_search::taxonomy::Taxonomy;
use catalog_search::types::Language;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Settings read from `config.toml`. Every field is optional.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    language: Language,
    taxonomy: Option<PathBuf>,
    max_price: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::El,
            taxonomy: None,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

#[derive(Parser)]
#[command(name = "catalog-tool")]
#[command(about = "Search, categorize and facet a furniture catalog snapshot")]
struct Cli {
    /// Config file (default: ~/.config/catalog-search/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print products matching a search term
    Search {
        /// Catalog snapshot (.json or .cbor)
        #[arg(long, short)]
        catalog: PathBuf,
        query: String,
        /// Show which fields matched
        #[arg(long)]
        debug: bool,
    },
    /// Resolve raw material labels to taxonomy categories
    Categorize {
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Print the filter panel facets for a catalog
    Facets {
        #[arg(long, short)]
        catalog: PathBuf,
    },
    /// Filter and sort a catalog the way the storefront grid does
    List {
        #[arg(long, short)]
        catalog: PathBuf,
        #[arg(long, short, default_value = "")]
        query: String,
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long = "color")]
        colors: Vec<String>,
        #[arg(long = "material")]
        materials: Vec<String>,
        #[arg(long = "material-category")]
        material_categories: Vec<String>,
        #[arg(long, default_value_t = 0.0)]
        min_price: f64,
        #[arg(long)]
        max_price: Option<f64>,
        /// featured, price-asc, price-desc or name
        #[arg(long, default_value = "featured")]
        sort: SortOrder,
    },
}

fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("catalog-search");
    p.push("config.toml");
    Some(p)
}

fn load_config(path: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let explicit = path.is_some();
    let Some(path) = path.or_else(default_config_path) else {
        return Ok(Config::default());
    };
    if !explicit && !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let config: Config = toml::from_str(&fs::read_to_string(&path)?)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn load_taxonomy(config: &Config) -> Result<Taxonomy, Box<dyn std::error::Error>> {
    match &config.taxonomy {
        Some(path) => Ok(Taxonomy::from_toml_str(&fs::read_to_string(path)?)?),
        None => Ok(Taxonomy::builtin().clone()),
    }
}

fn load_catalog(path: &Path) -> Result<Catalog, Box<dyn std::error::Error>> {
    let catalog = match path.extension().and_then(|e| e.to_str()) {
        Some("cbor") => Catalog::from_cbor(&fs::read(path)?)?,
        _ => Catalog::from_json(&fs::read_to_string(path)?)?,
    };
    tracing::info!(
        "loaded {} products, {} categories from {}",
        catalog.products.len(),
        catalog.categories.len(),
        path.display()
    );
    Ok(catalog)
}

fn run_search(catalog: &Catalog, query: &str, debug: bool) {
    let mut hits = 0;
    for product in &catalog.products {
        let doc = product.searchable();
        if !product_matches(&doc, query) {
            continue;
        }
        hits += 1;
        println!("{}\t{}\t{}", product.id, product.name, product.name_en);
        if debug {
            for field in debug_matches(&doc, query) {
                println!("    {field}");
            }
        }
    }
    println!("{hits} of {} products match", catalog.products.len());
}

fn run_categorize(taxonomy: &Taxonomy, labels: &[String], language: Language) {
    for label in labels {
        let key = taxonomy.categorize(label);
        println!("{label}\t{}", taxonomy.display_name(&key, language));
    }
}

fn run_facets(catalog: &Catalog, taxonomy: &Taxonomy, language: Language) {
    let facets = FacetCache::new(taxonomy).facets(catalog);

    println!("Categories:");
    for c in &facets.categories {
        println!("  {:<30} {}", c.label(language), c.count);
    }
    println!("Colors:");
    for c in &facets.colors {
        println!("  {:<30} {:>4}  {}", c.swatch.label, c.count, c.swatch.hex);
    }
    println!("Material categories:");
    for m in &facets.material_categories {
        let name = match language {
            Language::El => &m.display_name,
            Language::En => &m.display_name_en,
        };
        println!("  {:<30} {:>4}  ({} labels)", name, m.count, m.raw_labels.len());
    }
    println!("Materials:");
    for m in &facets.materials {
        println!("  {:<30} {}", m.label, m.count);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;
    let taxonomy = load_taxonomy(&config)?;

    match cli.command {
        Commands::Search {
            catalog,
            query,
            debug,
        } => run_search(&load_catalog(&catalog)?, &query, debug),
        Commands::Categorize { labels } => run_categorize(&taxonomy, &labels, config.language),
        Commands::Facets { catalog } => {
            run_facets(&load_catalog(&catalog)?, &taxonomy, config.language)
        }
        Commands::List {
            catalog,
            query,
            categories,
            colors,
            materials,
            material_categories,
            min_price,
            max_price,
            sort,
        } => {
            let catalog = load_catalog(&catalog)?;
            let filter = ListingFilter {
                search: query,
                categories,
                colors,
                materials,
                material_categories,
                price_range: (min_price, max_price.unwrap_or(config.max_price)),
            };
            let products = listing::list_products(&catalog.products, &filter, sort, &taxonomy);
            for p in &products {
                println!("{}\t{:>8.2}\t{}", p.id, p.effective_price(), p.name);
            }
            println!(
                "{} products ({} active filters)",
                products.len(),
                filter.active_counts(config.max_price).total()
            );
        }
    }
    Ok(())
}
