use anyhow::Context;
use clap::Parser;
use propspotter::cli::Cli;
use propspotter::format::format_price;
use propspotter::models::LISTED_DATE_FORMAT;
use propspotter::search::location_suggestions;
use propspotter::sources::save_properties;
use propspotter::{filter_properties, paginate, JsonFileSource, PropertySource, SampleGenerator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("🏠 PropSpotter");

    let source: Box<dyn PropertySource> = match &cli.input {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => {
            let generator = SampleGenerator::new(cli.count);
            Box::new(match cli.seed {
                Some(seed) => generator.with_seed(seed),
                None => generator,
            })
        }
    };

    let properties = source
        .load()
        .await
        .with_context(|| format!("Failed to load properties from {}", source.source_name()))?;
    info!(
        "Loaded {} properties from {}",
        properties.len(),
        source.source_name()
    );

    let criteria = cli.criteria();
    if cli.validate {
        if let Some(criteria) = &criteria {
            criteria.validate()?;
        }
    }

    let matches = filter_properties(&properties, criteria.as_ref());
    if matches.is_empty() {
        warn!("No properties found matching your criteria");
        if let Some(location) = &cli.location {
            let suggestions = location_suggestions(location);
            if !suggestions.is_empty() {
                info!("Try one of: {}", suggestions.join("; "));
            }
        }
    }

    if let Some(path) = &cli.save {
        save_properties(path, &matches).await?;
    }

    let page = paginate(&matches, cli.page, cli.per_page);
    let meta = page.meta;

    if meta.total_items > 0 {
        println!(
            "Showing {}-{} of {} properties (page {} of {})\n",
            meta.start_index, meta.end_index, meta.total_items, meta.current_page, meta.total_pages
        );
    }

    for property in &page.items {
        println!(
            "{}. {} ({})",
            property.id,
            property.title,
            format_price(property.price)
        );
        println!(
            "   {}, {}, {} {}",
            property.address, property.city, property.state, property.zip_code
        );
        println!(
            "   {} beds, {} baths, {} sq ft",
            property.beds, property.baths, property.square_feet
        );
        println!("   Features: {}", property.features.join(", "));
        println!("   Listed: {}", property.listed_date.format(LISTED_DATE_FORMAT));
        println!();
    }

    if meta.total_pages > 1 {
        let window: Vec<String> = meta
            .page_window()
            .into_iter()
            .map(|p| match p {
                Some(n) if n == meta.current_page => format!("[{}]", n),
                Some(n) => n.to_string(),
                None => "…".to_string(),
            })
            .collect();
        println!("Pages: {}", window.join(" "));
    }

    Ok(())
}
