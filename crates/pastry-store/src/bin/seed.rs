//! # Seed Data Initialiser
//!
//! Prepares a file-backed data directory with the example suppliers and
//! products, and prints what it holds.
//!
//! ## Usage
//! ```bash
//! # Seed the configured (or platform default) data directory
//! cargo run -p pastry-store --bin seed
//!
//! # Specify the data directory
//! cargo run -p pastry-store --bin seed -- --data-dir ./data
//!
//! # Wipe sessions, accounts and inventory first
//! cargo run -p pastry-store --bin seed -- --data-dir ./data --reset
//! ```
//!
//! An existing inventory is left untouched unless `--reset` is given.

use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pastry_core::RECENT_RESTOCK_LIMIT;
use pastry_store::storage::keys;
use pastry_store::{AppConfig, AppContext, FileStorage, Storage, StorageBackend};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pastry=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut data_dir: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Pastry Inventory Seed Data Initialiser");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <PATH>  Data directory (default: from config)");
                println!("  -c, --config <PATH>    Config file (default: platform config dir)");
                println!("      --reset            Remove existing data before seeding");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    let mut config = AppConfig::load_or_default(config_path);
    config.storage.backend = StorageBackend::File;
    if let Some(dir) = data_dir {
        config.storage.data_dir = Some(dir);
    }
    let dir = config.data_dir();

    println!("🥐 Pastry Inventory Seed");
    println!("========================");
    println!("Data dir: {}", dir.display());
    println!();

    if reset {
        let storage = FileStorage::open(&dir)?;
        for key in [keys::USER, keys::USERS, keys::SUPPLIERS, keys::PRODUCTS] {
            storage.remove(key)?;
        }
        info!(dir = %dir.display(), "Data directory reset");
        println!("✓ Existing data removed");
    }

    let ctx = AppContext::open(&config)?;
    println!("✓ Inventory ready");

    let inventory = ctx.inventory();
    inventory.with_inventory(|inv| {
        let summary = inv.summary();
        println!();
        println!("Suppliers:       {}", summary.total_suppliers);
        println!("Products:        {}", summary.total_products);
        println!("Low stock:       {}", summary.low_stock_count);
        println!("Inventory value: {}", summary.inventory_value());

        println!();
        println!("Latest stock updates:");
        for product in inv.recently_restocked(RECENT_RESTOCK_LIMIT) {
            println!(
                "  {} {} {} ({:?}) {}",
                product.last_restocked.format("%Y-%m-%d"),
                product.name,
                product.stock_quantity,
                product.stock_level(),
                product.unit
            );
        }
    });

    let accounts = ctx.accounts().list()?;
    println!();
    println!("Registered accounts: {}", accounts.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
