// src/utilities/output.rs
//
// Console output. Sketches use the tracing macros (or plain println!) for
// formatted output; run() installs a subscriber so messages actually land
// somewhere. RUST_LOG overrides the default level.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Safe to call more than once; a
/// subscriber installed by the host application wins.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
