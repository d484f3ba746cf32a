//! Process-wide logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; the fallback keeps this crate at debug (the raw
/// listing body and backend answers are logged there) and everything else at
/// info.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,timeslot_scout=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
