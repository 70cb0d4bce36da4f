use clap::Parser;
use log::warn;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use recipe_cart::config::load_config;
use recipe_cart::{CartConfig, CartError, CatalogState, RecipeScreen, RecipeSourceBuilder};

#[derive(Parser, Debug)]
#[command(
    name = "recipe-cart",
    version,
    about = "Pick recipes from a catalog and print the combined ingredient list"
)]
struct Cli {
    /// Catalog URL (overrides the configured source_url)
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Read the catalog from a local JSON file instead of fetching it
    #[arg(long)]
    file: Option<PathBuf>,

    /// Configuration file name, without extension
    #[arg(long, default_value = "recipe-cart")]
    config: String,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Recipe id to add to the selection (repeatable)
    #[arg(short, long = "select", value_name = "ID")]
    select: Vec<String>,

    /// Print the selection and combined ingredients as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config: CartConfig = load_config(&cli.config)?;
    let mut builder = RecipeSourceBuilder::from_config(&config);
    if let Some(url) = cli.url {
        builder = builder.url(url);
    }
    if let Some(path) = cli.file {
        builder = builder.file(path);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let source = builder.build()?;

    let mut screen = RecipeScreen::new();
    screen.load(source.as_ref()).await;

    if let CatalogState::Failed(message) = screen.catalog() {
        eprintln!("{}", message);
        return Ok(ExitCode::FAILURE);
    }

    for id in &cli.select {
        match screen.select(id) {
            Ok(true) => {}
            Ok(false) => warn!("Recipe '{}' is already selected", id),
            Err(e @ CartError::UnknownRecipe(_)) => eprintln!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }

    if cli.json {
        let selected: Vec<&str> = screen
            .selection()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        let output = json!({
            "selected": selected,
            "ingredients": screen.selection().aggregate(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", screen.render());
    }

    Ok(ExitCode::SUCCESS)
}
