use std::sync::Once;

use sha1::{Digest, Sha1};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILTER_VARIABLE: &str = "ENZYME_DAMAGE_LOG";
const DEFAULT_LOG_FILTER: &str = "enzyme_damage=info";
const FINGERPRINT_LENGTH: usize = 12;

static INIT: Once = Once::new();

/// Installs the global subscriber. Levels come from `ENZYME_DAMAGE_LOG`,
/// e.g. `ENZYME_DAMAGE_LOG=enzyme_damage=debug`. Repeated calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_FILTER_VARIABLE)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
            )
            .with(filter)
            .init();
    });
}

/// Short SHA-1 of a sequence, so logs can correlate requests without carrying sequence data.
pub fn fingerprint(aa_sequence: &str) -> String {
    let digest = Sha1::digest(aa_sequence.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(FINGERPRINT_LENGTH);
    return hex;
}
