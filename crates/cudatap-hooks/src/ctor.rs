//! One-time tracing initialisation.
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

#[ctor::ctor]
fn init_tracing() {
    // Default to one line per intercepted call; CUDATAP_LOG=off silences it.
    let level = std::env::var("CUDATAP_LOG").unwrap_or_else(|_| "debug".to_string());
    let level = LevelFilter::from_str(&level).unwrap_or(LevelFilter::DEBUG);
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_thread_ids(true)
        .with_target(false)
        .with_level(true)
        .try_init();
}
