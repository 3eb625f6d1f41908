/// Configures tracing once for the whole process.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies.
///
/// ```bash
/// RUST_LOG=debug cargo run -- --name Milk
/// RUST_LOG=pantry_inventory::inventory_service=debug,info cargo run -- --upc 012345
/// ```
pub fn setup_tracing(default_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
