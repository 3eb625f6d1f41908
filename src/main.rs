mod domain;
mod clients;
mod messages;

mod app_system;
mod inventory_service;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod inventory_actor;
mod blob_actor;
mod lookup_actor;

use clap::Parser;
use tracing::{error, info, warn, Instrument};
use crate::app_system::{load_config, setup_tracing, InventorySystem};
use crate::inventory_service::QuantityChange;

/// Track pantry items by name or UPC barcode.
#[derive(Debug, Parser)]
#[command(name = "pantry_inventory")]
struct Cli {
    /// Add one unit of an item by name
    #[arg(long = "name", value_name = "NAME")]
    names: Vec<String>,

    /// Add one unit of the product behind a UPC barcode
    #[arg(long = "upc", value_name = "CODE")]
    upcs: Vec<String>,

    /// Remove one unit of the item with this ID
    #[arg(long = "decrement", value_name = "ID")]
    decrements: Vec<String>,

    /// Replace the image of an item with a local file
    #[arg(long = "image", value_name = "ID=PATH")]
    images: Vec<String>,

    /// Only list items whose name contains this text
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let config = load_config().map_err(|e| e.to_string())?;

    setup_tracing(&config.log_level);

    info!("Starting pantry inventory");

    let system = InventorySystem::new(&config).map_err(|e| e.to_string())?;

    // A failed operation is logged and the next one still runs.
    for name in &cli.names {
        let span = tracing::info_span!("add_by_name");
        match system.inventory.add_item_by_name(name).instrument(span).await {
            Ok(item) => info!(item_id = %item.id, quantity = item.quantity, "Added item"),
            Err(e) => error!(error = %e, name = %name, "Could not add item"),
        }
    }

    for code in &cli.upcs {
        let span = tracing::info_span!("add_by_upc");
        match system.inventory.add_item_by_upc(code).instrument(span).await {
            Ok(item) => info!(item_id = %item.id, name = %item.name, quantity = item.quantity, "Added product"),
            Err(e) => error!(error = %e, upc = %code, "Could not add product"),
        }
    }

    for id in &cli.decrements {
        match system.inventory.change_quantity(id, -1).await {
            Ok(QuantityChange::Updated(item)) => info!(item_id = %item.id, quantity = item.quantity, "Decremented item"),
            Ok(QuantityChange::Removed) => info!(item_id = %id, "Removed item"),
            Ok(QuantityChange::Missing) => warn!(item_id = %id, "No such item"),
            Err(e) => error!(error = %e, item_id = %id, "Could not decrement item"),
        }
    }

    for spec in &cli.images {
        let Some((id, path)) = spec.split_once('=') else {
            error!(image = %spec, "Expected ID=PATH");
            continue;
        };
        let file_name = std::path::Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, path = %path, "Could not read image");
                continue;
            }
        };
        match system.inventory.set_item_image(id, &file_name, bytes).await {
            Ok(Some(item)) => info!(item_id = %item.id, image_url = %item.image_url, "Updated image"),
            Ok(None) => warn!(item_id = %id, "No such item"),
            Err(e) => error!(error = %e, item_id = %id, "Could not update image"),
        }
    }

    let term = cli.search.as_deref().unwrap_or("");
    match system.inventory.search_items(term).await {
        Ok(items) => {
            info!(item_count = items.len(), "Inventory");
            for item in items {
                match serde_json::to_string(&item) {
                    Ok(doc) => println!("{}", doc),
                    Err(e) => error!(error = %e, item_id = %item.id, "Could not render item"),
                }
            }
        }
        Err(e) => error!(error = %e, "Could not list inventory"),
    }

    system.shutdown().await?;

    info!("Pantry inventory finished");
    Ok(())
}
