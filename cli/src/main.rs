//! CLI entrypoint for stayscout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod cli;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command, CompareAction};
use output::ConsoleCompareNotifier;
use std::sync::Arc;
use stayscout_application::{
    CompareError, ManageComparisonUseCase, PropertyStore, SearchListingsInput,
    SearchListingsUseCase,
};
use stayscout_domain::{featured_properties, CompareStore, ComparePersister, PropertyId};
use stayscout_infrastructure::{
    ConfigLoader, FileComparePersister, InMemoryComparePersister, JsonPropertyStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Could not load configuration: {}", e))?;
    info!(
        "Using property data from {}",
        config.data.properties_path.display()
    );

    // === Dependency Injection ===
    let store = Arc::new(
        JsonPropertyStore::from_file(&config.data.properties_path)
            .context("Could not load property data")?,
    );

    match cli.command {
        Command::List(args) => {
            let criteria = args.to_criteria(config.search.default_max_price);
            let use_case = SearchListingsUseCase::new(store);
            let output = use_case.execute(SearchListingsInput::new(criteria)).await?;

            if args.featured {
                let featured = featured_properties(&output.properties, 6);
                output::print_listings(&featured, output.total_available);
            } else {
                output::print_listings(&output.properties, output.total_available);
            }
        }

        Command::Show { id } => {
            let id = PropertyId::new(id);
            match store.get_property(&id).await? {
                Some(property) => output::print_property(&property),
                None => bail!("No property with id {}", id),
            }
        }

        Command::Compare { action } => {
            let persister: Box<dyn ComparePersister> = if cli.ephemeral {
                Box::new(InMemoryComparePersister::new())
            } else {
                Box::new(FileComparePersister::new(&config.compare.state_path))
            };
            let mut compare = CompareStore::new(persister);
            let use_case =
                ManageComparisonUseCase::new(store, Arc::new(ConsoleCompareNotifier));

            match action {
                CompareAction::Add { id } => {
                    handle_compare_result(use_case.add(&mut compare, &PropertyId::new(id)).await)?;
                }
                CompareAction::Remove { id } => {
                    use_case.remove(&mut compare, &PropertyId::new(id));
                }
                CompareAction::Toggle { id } => {
                    handle_compare_result(
                        use_case.toggle(&mut compare, &PropertyId::new(id)).await,
                    )?;
                }
                CompareAction::Clear => {
                    use_case.clear(&mut compare);
                }
                CompareAction::Show => {
                    output::print_matrix(&use_case.matrix(&compare));
                }
            }
        }
    }

    Ok(())
}

// A full comparison set is user guidance, not a failure exit; the
// notifier already printed the message.
fn handle_compare_result(result: std::result::Result<(), CompareError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(CompareError::LimitExceeded { .. }) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
