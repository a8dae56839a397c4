use clap::Parser;
use std::io::IsTerminal;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use twolist::application::{init::init, AssumeYes, Confirm, ConfigService, ItemStore, TerminalConfirm};
use twolist::cli::{format_category_header, format_item_list, Cli, Commands};
use twolist::domain::{Category, ItemId, TimestampIdGenerator};
use twolist::error::{Result, TwolistError};
use twolist::infrastructure::{FileSystemRepository, ListRepository, PersistenceGateway};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_logging();

    match run(cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// RUST_LOG wins; otherwise the `log` key of the discovered config
fn init_logging() {
    let fallback = FileSystemRepository::discover()
        .and_then(|repo| repo.load_config())
        .map(|config| config.log)
        .unwrap_or_else(|_| "warn".to_string());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Use { category }) => {
            let category = parse_category(&category)?;
            let service = ConfigService::new(FileSystemRepository::discover()?);
            service.select(category)?;
            println!("{}", format_category_header(category));
            Ok(())
        }
        Some(Commands::List { category }) => {
            let (repo, category) = discover_with_category(category)?;
            let store = open_store(&repo, category).await;

            println!("{}", format_category_header(category));
            println!("{}", format_item_list(category, store.current_items()).trim_end());
            Ok(())
        }
        Some(Commands::Add { category, text }) => {
            let (repo, category) = discover_with_category(category)?;
            let mut store = open_store(&repo, category).await;

            let text = text.join(" ");
            let before = store.items(category).len();
            let after = store.add_item(category, &text).len();
            store.flush().await;

            if after > before {
                println!("Added to {}: {}", category, text);
            }
            Ok(())
        }
        Some(Commands::Remove { category, yes, id }) => {
            let (repo, category) = discover_with_category(category)?;
            let mut store = open_store(&repo, category).await;

            let id = ItemId::new(id);
            let text = store.items(category).get(&id).map(str::to_string);

            let confirm: &dyn Confirm = if yes { &AssumeYes } else { &TerminalConfirm };
            let remaining = store.remove_item(category, &id, confirm).contains(&id);
            store.flush().await;

            match text {
                Some(text) if !remaining => println!("Deleted from {}: {}", category, text),
                Some(_) => println!("Cancelled"),
                None => println!("No item {} in {}", id, category),
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("category = {}", config.category.to_string().to_lowercase());
                println!("log = {}", config.log);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: twolist config [--list | <key> [<value>]]");
                println!("Valid keys: category, log");
                Ok(())
            }
        }
        None => {
            println!("twolist - Work and Travel to-do lists");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn parse_category(value: &str) -> Result<Category> {
    Category::from_str(value).map_err(TwolistError::InvalidCategory)
}

/// Locate the list root and pick the explicit category or the selected one
fn discover_with_category(category: Option<String>) -> Result<(FileSystemRepository, Category)> {
    let repo = FileSystemRepository::discover()?;
    let category = match category {
        Some(value) => parse_category(&value)?,
        None => repo.load_config()?.category,
    };
    Ok((repo, category))
}

async fn open_store(repo: &FileSystemRepository, category: Category) -> ItemStore {
    let gateway = Arc::new(PersistenceGateway::new(Arc::new(repo.item_store())));
    let mut store = ItemStore::open(gateway, Box::new(TimestampIdGenerator::new())).await;
    store.select_category(category);
    store
}
