//! # namaste-service
//!
//! HTTP service for NAMASTE terminology queries.
//!
//! This crate exposes the terminology store loaded by the namaste-loader
//! crate: catalog and concept lookup, search, code translation and
//! double-coding annotation of clinical record bundles.

#![warn(missing_docs)]

mod auth;
mod config;
mod error;
mod server;

pub use auth::bearer_credential;
pub use config::ServiceConfig;
pub use error::{ApiError, ApiResult};
pub use server::{NamasteServer, SERVICE_NAME};
