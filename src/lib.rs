#![deny(warnings)]

#[macro_use]
extern crate actix_web;

pub mod assert;
pub mod cases;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod requests;
pub mod responses;
pub mod runner;

// Stub server (always available for integration tests)
pub mod testing;

pub use cases::{Case, Outcome};
pub use client::{AuthClient, Reply};
pub use config::SuiteConfig;
pub use error::SuiteError;
pub use runner::{CaseReport, Runner, Summary, Verdict};
