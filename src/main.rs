//! nexai - Glitch Terminal Directory
//!
//! Runs the slide directory in the terminal, or prints the derived web output.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Arg, ArgMatches, Command};
use nexai::config::{CliOverrides, ThemeName};
use nexai::publish::{self, PageMetadata, SchemaKind};
use nexai::render::ui::{ColorTheme, TerminalUI};
use nexai::{Application, Catalog, Config};
use std::path::PathBuf;
use std::sync::Arc;

fn cli() -> Command {
    Command::new("nexai")
        .version(nexai::VERSION)
        .about("A glitch-themed terminal directory of curated sites")
        .long_about(
            "nexai renders a horizontal, four-slide directory in the terminal. \
             Without a subcommand it takes over the terminal; the subcommands print \
             the sitemap, JSON-LD and page metadata derived from the same records.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Settings file (defaults to the user config directory)"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory holding sites.toml and artifacts.toml"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .global(true)
                .value_name("NAME")
                .value_parser(["glitch", "monochrome", "high-contrast"])
                .help("Color theme"),
        )
        .subcommand(Command::new("validate").about("Validate the records and print counts"))
        .subcommand(Command::new("sitemap").about("Print the sitemap XML"))
        .subcommand(
            Command::new("structured-data")
                .about("Print schema.org JSON-LD")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_name("KIND")
                        .conflicts_with("site")
                        .help("organization, website, itemlist or creativework"),
                )
                .arg(
                    Arg::new("site")
                        .long("site")
                        .value_name("ID")
                        .help("Print the document of one site's detail page"),
                ),
        )
        .subcommand(
            Command::new("metadata")
                .about("Print the metadata of a site's detail page as JSON")
                .arg(Arg::new("id").required(true).index(1).help("Site id")),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let matches = cli().get_matches();

    let overrides = CliOverrides {
        theme: matches
            .get_one::<String>("theme")
            .map(|name| name.parse::<ThemeName>())
            .transpose()?,
        data_dir: matches.get_one::<PathBuf>("data-dir").cloned(),
    };
    let config = Config::load(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        &overrides,
    )?;

    let catalog = match &config.data_dir {
        Some(dir) => Catalog::from_dir(dir)
            .with_context(|| format!("Failed to load records from {}", dir.display()))?,
        None => Catalog::bundled()?,
    };

    match matches.subcommand() {
        Some(("validate", _)) => print_counts(&catalog),
        Some(("sitemap", _)) => {
            let today = chrono::Local::now().date_naive();
            let entries = publish::sitemap_entries(&config.site_url, catalog.sites(), today);
            print!("{}", publish::render_sitemap(&entries));
        }
        Some(("structured-data", sub)) => print_structured_data(&catalog, &config, sub)?,
        Some(("metadata", sub)) => {
            let id = sub
                .get_one::<String>("id")
                .context("site id is required")?;
            let meta = PageMetadata::lookup(&catalog, id, &config.site_url);
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }
        _ => {
            let ui_renderer = TerminalUI::with_theme(ColorTheme::from_name(config.theme))?;
            let mut app = Application::new(Arc::new(catalog), ui_renderer, config);
            app.run().await?;
        }
    }

    Ok(())
}

fn print_counts(catalog: &Catalog) {
    println!("sites:        {}", catalog.sites().len());
    println!("artifacts:    {}", catalog.artifacts().len());
    println!("genre nodes:  {}", catalog.genre_nodes().len());
    println!("slot filters: {}", catalog.slot_filters().len());
    println!("all records valid");
}

/// One document for `--site` or `--kind`, otherwise every site-wide document as an array
fn print_structured_data(catalog: &Catalog, config: &Config, sub: &ArgMatches) -> Result<()> {
    let base = config.site_url.as_str();
    let year = chrono::Local::now().year();

    let value = if let Some(id) = sub.get_one::<String>("site") {
        publish::site_document(catalog.find_site(id)?, base)
    } else if let Some(kind) = sub.get_one::<String>("kind") {
        publish::document(kind.parse::<SchemaKind>()?, base, catalog.sites(), year)
    } else {
        serde_json::Value::Array(
            SchemaKind::ALL
                .into_iter()
                .map(|kind| publish::document(kind, base, catalog.sites(), year))
                .collect(),
        )
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
