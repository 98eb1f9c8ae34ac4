#![doc(test(attr(deny(warnings))))]

//! trackme keeps a personal monthly budget: fixed income and expense
//! categories entered per period, persisted as flat documents, and summarized
//! as a Sankey-style flow of money through a "Total Income" node.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod session;
pub mod store;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        core::utils::init_tracing();
        tracing::info!("trackme tracing initialized.");
    });
}
