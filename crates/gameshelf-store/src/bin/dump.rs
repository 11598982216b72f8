//! # Storefront State Dump
//!
//! Prints what the storage medium currently holds: the persisted cart
//! snapshot, the admin-added products, and the dashboard numbers the admin
//! page would show over the mock orders and users.
//!
//! ## Usage
//! ```bash
//! # Dump the platform data file
//! cargo run -p gameshelf-store --bin dump
//!
//! # Dump a specific storage file
//! cargo run -p gameshelf-store --bin dump -- --data ./gameshelf.json
//! ```

use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gameshelf_store::{mock, FileMedium, Storefront};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut data_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("GameShelf Storefront State Dump");
                println!();
                println!("Usage: dump [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data <PATH>  Storage file path (default: platform data dir)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    let medium = match data_path {
        Some(path) => FileMedium::new(path),
        None => FileMedium::open_default()?,
    };

    println!("🎲 GameShelf Storefront State Dump");
    println!("==================================");
    println!("Storage: {}", medium.path().display());
    println!();

    let shop = Storefront::with_mock_data(Arc::new(medium));

    println!("Store:   {}", shop.config().store_name);
    println!("Catalog: {} products", shop.catalog().len());
    println!();

    println!("Cart snapshot:");
    println!("{}", serde_json::to_string_pretty(shop.cart().cart())?);
    println!();

    println!("Admin extras:");
    println!("{}", serde_json::to_string_pretty(shop.admin().extras())?);
    println!();

    let stats = shop
        .admin()
        .dashboard_stats(shop.catalog(), &mock::mock_orders(), &mock::mock_users());

    println!("Dashboard stats (over mock orders/users):");
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// Initializes logging for the dump run.
///
/// ## Environment
/// - `RUST_LOG=debug` - Show everything
/// - Default: INFO, with DEBUG for the gameshelf crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gameshelf_store=debug,gameshelf_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
