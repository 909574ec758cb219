//! # Order Domain Demo
//!
//! Walks the crate's construction paths under structured logging:
//! 1. Setting up tracing.
//! 2. Building a [`Product`] and placing a prime and an urgent [`Order`].
//! 3. Reading the shared [`Settings`] and an environment-derived instance.

use order_domain::model::{Order, Product};
use order_domain::runtime::setup_tracing;
use order_domain::settings::Settings;
use std::sync::Arc;
use tracing::info;

fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order domain demo");

    let product = Arc::new(Product::new("Test Product", 100.0));
    info!(product = %product.name, price = product.price, "Product ready");

    let prime = Order::prime_order(Arc::clone(&product));
    info!(
        prime = prime.prime,
        urgent = prime.urgent,
        status = %prime.status,
        "Prime order created"
    );

    let urgent = Order::urgent_order(Arc::clone(&product));
    info!(
        prime = urgent.prime,
        urgent = urgent.urgent,
        status = %urgent.status,
        "Urgent order created"
    );

    let shared = Settings::shared();
    info!(
        user_auto_setting = shared.user_auto_setting,
        user_abs = shared.user_abs,
        "Shared settings loaded"
    );

    let env_settings = Settings::from_env();
    info!(
        user_auto_setting = env_settings.user_auto_setting,
        user_abs = env_settings.user_abs,
        "Environment settings loaded"
    );

    info!("Demo complete");
}
