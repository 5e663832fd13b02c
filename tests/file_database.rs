mod common;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::future::join_all;
use rust_decimal_macros::dec;

use common::{checkout, Shop};
use storefront::application::usecase::{OrderUseCase, OrderWorkflow};
use storefront::config::DatabaseConfig;
use storefront::domain::errors::DomainError;
use storefront::infrastructure::database::Database;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("storefront-{}-{}.db", name, std::process::id()))
}

fn remove_database_files(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_owned();
        file.push(suffix);
        std::fs::remove_file(file).ok();
    }
}

async fn open_file_database(path: &Path) -> Database {
    remove_database_files(path);

    let database = Database::connect(&DatabaseConfig {
        url: format!("sqlite://{}", path.display()),
        max_connections: 5,
        acquire_timeout_secs: 30,
    })
    .await
    .unwrap();
    database.migrate().await.unwrap();
    database
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn pooled_checkouts_on_a_file_database_never_oversell() {
    let path = scratch_path("contention");
    let shop = Shop::on(open_file_database(&path).await).await;
    let product = shop.add_product("Festival pass", dec!(60.00), 100).await;
    let workflow = shop.workflow();

    let attempts = (0..60).map(|_| {
        let workflow = workflow.clone();
        let request = checkout(shop.user.id, &[(product.id, 3)]);
        tokio::spawn(async move { workflow.place_order(request).await })
    });

    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task completed"))
        .collect();

    let failures: Vec<&DomainError> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    assert!(
        failures
            .iter()
            .all(|e| matches!(e, DomainError::InsufficientStock { .. })),
        "unexpected failures: {:?}",
        failures
    );

    let sold: i64 = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .flat_map(|order| order.items.iter())
        .map(|item| item.quantity)
        .sum();

    let remaining = shop.stock_of(product.id).await;
    assert!(remaining >= 0);
    assert_eq!(100 - remaining, sold);
    assert_eq!(remaining, 1);
    assert_eq!(shop.all_orders().await.len(), 33);

    shop.database.close().await;
    remove_database_files(&path);
}

#[tokio::test]
async fn file_database_keeps_orders_across_reconnects() {
    let path = scratch_path("reconnect");
    let shop = Shop::on(open_file_database(&path).await).await;
    let product = shop.add_product("Tent", dec!(150.00), 4).await;

    let order = shop
        .workflow()
        .place_order(checkout(shop.user.id, &[(product.id, 1)]))
        .await
        .unwrap();
    shop.database.close().await;

    let reopened = Database::connect(&DatabaseConfig {
        url: format!("sqlite://{}", path.display()),
        max_connections: 2,
        acquire_timeout_secs: 30,
    })
    .await
    .unwrap();
    // Applying the schema again leaves existing rows alone
    reopened.migrate().await.unwrap();

    let workflow = OrderWorkflow::new(
        Arc::new(reopened.users()),
        Arc::new(reopened.products()),
        Arc::new(reopened.orders()),
    );
    assert_eq!(workflow.get_order(order.id).await.unwrap(), order);

    reopened.close().await;
    remove_database_files(&path);
}
