#![allow(dead_code)]
//! Shared integration test utilities.
//!
//! Import with:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use cont_flow::{promise, Handle, Sink};
use proptest::prelude::ProptestConfig;
use proptest::test_runner::RngSeed;
use tracing_subscriber::fmt::format::FmtSpan;

static INIT_LOGGING: Once = Once::new();

/// Default seed for property tests when running under CI.
pub const DEFAULT_PROPTEST_SEED: u64 = 0x5EED5EED;

const PROPTEST_SEED_ENV: &str = "CONT_FLOW_PROPTEST_SEED";

/// Initialize test logging with trace-level output.
pub fn init_test_logging() {
    init_test_logging_with_level(tracing::Level::TRACE);
}

/// Initialize test logging with a custom level.
///
/// The first call wins; later calls are no-ops.
pub fn init_test_logging_with_level(level: tracing::Level) {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(false)
            .try_init();
    });
}

/// Build a ProptestConfig with a fixed seed under CI.
#[must_use]
pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    let mut config = ProptestConfig::with_cases(cases);
    if matches!(config.rng_seed, RngSeed::Random) {
        if let Some(seed) = read_proptest_seed() {
            config.rng_seed = RngSeed::Fixed(seed);
        }
    }
    config
}

fn read_proptest_seed() -> Option<u64> {
    if let Ok(value) = std::env::var(PROPTEST_SEED_ENV) {
        return value.parse::<u64>().ok();
    }
    if std::env::var("CI").is_ok() {
        return Some(DEFAULT_PROPTEST_SEED);
    }
    None
}

/// A place for an action to leave the sink of the handle it returned, so the
/// test can resolve it later.
#[derive(Clone, Default)]
pub struct Parked(Rc<RefCell<Option<Sink<()>>>>);

impl Parked {
    /// Create a pending handle and park its sink.
    pub fn park(&self) -> Handle<()> {
        let (sink, handle) = promise();
        let previous = self.0.borrow_mut().replace(sink);
        assert!(previous.is_none(), "two actions in flight at once");
        handle
    }

    pub fn take(&self) -> Option<Sink<()>> {
        self.0.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_none()
    }
}
