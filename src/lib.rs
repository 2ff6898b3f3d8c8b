#![doc(test(attr(deny(warnings))))]

//! Subtrack Core normalizes heterogeneous subscription expenses into
//! canonical monthly/yearly JPY amounts and offers the aggregation,
//! persistence, and advisory primitives a tracker UI builds on.

pub mod advisor;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Subtrack Core tracing initialized.");
    });
}
