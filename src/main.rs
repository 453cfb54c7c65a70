//! Demo session for the cart engine.
//!
//! Uses the inventory service at `CART_INVENTORY_URL` when set, otherwise a small
//! seeded catalogue. The cart is stored under `CART_STORAGE_DIR`, so running the
//! demo twice starts the second run from the first run's cart.

use cart_engine::config::CartConfig;
use cart_engine::inventory::{HttpInventory, InMemoryInventory, Inventory};
use cart_engine::lifecycle::{setup_tracing, CartSystem};
use cart_engine::model::{Product, ProductId};
use cart_engine::notify::TracingSink;
use cart_engine::storage::FileStorage;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

fn seeded_inventory() -> InMemoryInventory {
    InMemoryInventory::new()
        .with_product(Product::new(ProductId(1), "Trail Runner", 179.9, "trail-runner.jpg"), 3)
        .with_product(Product::new(ProductId(2), "Court Classic", 139.9, "court-classic.jpg"), 5)
        .with_product(Product::new(ProductId(3), "City Loafer", 219.9, "city-loafer.jpg"), 1)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CartConfig::from_env();
    info!(?config, "Starting cart session");

    let inventory: Arc<dyn Inventory> = match &config.inventory_url {
        Some(url) => Arc::new(HttpInventory::new(url.clone())),
        None => Arc::new(seeded_inventory()),
    };
    let storage = Arc::new(FileStorage::open(&config.storage_dir)?);

    let system = CartSystem::start(&config, inventory, storage, Arc::new(TracingSink))?;
    let cart = system.cart_client.clone();

    let span = tracing::info_span!("shopping");
    async {
        info!(items = cart.cart().await?.len(), "Cart on startup");

        // Failures are also announced through the sink; the results are only logged here.
        for (step, result) in [
            ("add 1", cart.add_product(ProductId(1)).await),
            ("add 1 again", cart.add_product(ProductId(1)).await),
            ("add 3", cart.add_product(ProductId(3)).await),
            ("set 3 to 2", cart.update_product_amount(ProductId(3), 2).await),
            ("remove 2", cart.remove_product(ProductId(2)).await),
        ] {
            match result {
                Ok(c) => info!(step, items = c.len(), units = c.total_units(), "Step ok"),
                Err(e) => warn!(step, error = %e, "Step failed"),
            }
        }

        let final_cart = cart.cart().await?;
        for item in &final_cart {
            info!(id = item.product.id.0, title = %item.product.title, amount = item.amount, "Line");
        }
        info!(subtotal = final_cart.subtotal(), "Cart total");
        Ok::<_, cart_engine::cart_actor::CartError>(())
    }
    .instrument(span)
    .await?;

    drop(cart);
    system.shutdown().await?;

    info!("Session completed successfully");
    Ok(())
}
