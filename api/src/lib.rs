//! Client core for the BirthPrep backend: auth/session handling,
//! repositories over the remote data store and object storage, and the
//! small derived-value calculators the repositories rely on.
//!
//! Everything network-facing is asynchronous and surfaces failures as
//! [`store::StoreError`]; nothing here retries automatically.

pub mod auth;
pub mod config;
pub mod credential;
pub mod http;
pub mod pdf;
pub mod pregnancy;
pub mod storage;
pub mod store;
pub mod telemetry;
pub mod time;
pub mod token;
