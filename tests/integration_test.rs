use cart_engine::config::CartConfig;
use cart_engine::inventory::InMemoryInventory;
use cart_engine::lifecycle::CartSystem;
use cart_engine::model::{Product, ProductId};
use cart_engine::notify::{Notice, RecordingSink};
use cart_engine::storage::{FileStorage, MemoryStorage};
use std::sync::Arc;

fn catalogue() -> InMemoryInventory {
    InMemoryInventory::new()
        .with_product(Product::new(ProductId(1), "Trail Runner", 179.9, "trail.jpg"), 10)
        .with_product(Product::new(ProductId(2), "Court Classic", 139.9, "court.jpg"), 2)
}

fn config_for(dir: &std::path::Path) -> CartConfig {
    CartConfig {
        storage_dir: dir.to_path_buf(),
        ..CartConfig::default()
    }
}

/// Full session against file-backed storage, then a restart that must see the same cart.
#[tokio::test]
async fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let inventory = Arc::new(catalogue());

    let system = CartSystem::start(
        &config,
        inventory.clone(),
        Arc::new(FileStorage::open(&config.storage_dir).unwrap()),
        Arc::new(RecordingSink::new()),
    )
    .expect("Failed to start system");

    system.cart_client.add_product(ProductId(2)).await.unwrap();
    system.cart_client.add_product(ProductId(1)).await.unwrap();
    system
        .cart_client
        .update_product_amount(ProductId(1), 4)
        .await
        .unwrap();
    let before = system.cart_client.cart().await.unwrap();
    system.shutdown().await.expect("Failed to shutdown system");

    let restarted = CartSystem::start(
        &config,
        inventory,
        Arc::new(FileStorage::open(&config.storage_dir).unwrap()),
        Arc::new(RecordingSink::new()),
    )
    .unwrap();
    let after = restarted.cart_client.cart().await.unwrap();

    assert_eq!(after, before);
    let ids: Vec<_> = after.iter().map(|item| item.product.id).collect();
    assert_eq!(ids, vec![ProductId(2), ProductId(1)]);
    assert_eq!(after.amount_of(ProductId(1)), Some(4));

    restarted.shutdown().await.unwrap();
}

/// Concurrent adds of the same product are applied one after another, none lost.
#[tokio::test]
async fn test_concurrent_adds_do_not_lose_updates() {
    let sink = Arc::new(RecordingSink::new());
    let system = CartSystem::start(
        &CartConfig::default(),
        Arc::new(catalogue()),
        Arc::new(MemoryStorage::new()),
        sink.clone(),
    )
    .unwrap();

    let mut handles = vec![];
    for _ in 0..8 {
        let client = system.cart_client.clone();
        handles.push(tokio::spawn(async move { client.add_product(ProductId(1)).await }));
    }
    for handle in handles {
        handle.await.unwrap().expect("add should succeed with enough stock");
    }

    let cart = system.cart_client.cart().await.unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(ProductId(1)), Some(8));
    assert!(sink.messages().is_empty());

    system.shutdown().await.unwrap();
}

/// More concurrent adds than stock: exactly `stock` succeed, the rest are out of stock.
#[tokio::test]
async fn test_concurrent_adds_stop_at_stock() {
    let sink = Arc::new(RecordingSink::new());
    let system = CartSystem::start(
        &CartConfig::default(),
        Arc::new(catalogue()),
        Arc::new(MemoryStorage::new()),
        sink.clone(),
    )
    .unwrap();

    let mut handles = vec![];
    for _ in 0..5 {
        let client = system.cart_client.clone();
        handles.push(tokio::spawn(async move { client.add_product(ProductId(2)).await }));
    }

    let mut successful = 0;
    let mut failed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(_) => failed += 1,
        }
    }

    assert_eq!(successful, 2, "stock for product 2 is 2");
    assert_eq!(failed, 3);
    assert_eq!(
        system.cart_client.cart().await.unwrap().amount_of(ProductId(2)),
        Some(2)
    );
    assert_eq!(sink.messages(), vec![Notice::OutOfStock.to_string(); 3]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreadable_stored_cart_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let storage = Arc::new(FileStorage::open(&config.storage_dir).unwrap());
    cart_engine::storage::CartStorage::set(storage.as_ref(), &config.storage_key, "{{{").unwrap();

    let system = CartSystem::start(
        &config,
        Arc::new(catalogue()),
        storage,
        Arc::new(RecordingSink::new()),
    )
    .unwrap();

    assert!(system.cart_client.cart().await.unwrap().is_empty());
    system.cart_client.add_product(ProductId(1)).await.unwrap();
    assert_eq!(
        system.cart_client.cart().await.unwrap().amount_of(ProductId(1)),
        Some(1)
    );

    system.shutdown().await.unwrap();
}
