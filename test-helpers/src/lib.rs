//! Shared fixtures for workspace tests: an in-memory backend implementing
//! every repository trait, sample data, and stand-ins for the credential
//! store and PDF exporter collaborators.

use std::sync::Once;

use jiff::Timestamp;

pub mod mock;
pub mod sample;

pub use mock::{MemoryCredentialStore, MockDataStore, NoopPdfExporter};

static TELEMETRY: Once = Once::new();

/// Install the tracing subscriber once per test binary. Quiet unless
/// `RUST_LOG` says otherwise.
pub fn init_telemetry() {
    TELEMETRY.call_once(|| {
        api::telemetry::init_subscriber(api::telemetry::get_subscriber(
            "warn",
        ));
    });
}

/// Fixed instant tests start from; advance the source to move time.
pub fn test_time_source() -> api::time::TimeSource {
    init_telemetry();
    api::time::TimeSource::new(
        "2026-08-05T09:00:00Z".parse::<Timestamp>().unwrap(),
    )
}
