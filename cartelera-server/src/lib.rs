//! # Cartelera Server
//!
//! HTTP surface for the Cartelera recommendation service.
//!
//! ## Overview
//!
//! Thin axum glue over `cartelera-core`:
//!
//! - **Chat**: free text in, extracted intent plus a discovery page out
//! - **Recommend**: structured mood/energy shortcut around extraction
//! - **Trailer**: best localized YouTube trailer for one movie
//! - **Ping**: liveness probe proxying the catalog's trending feed
//!
//! All decision logic lives in `cartelera-core`; handlers only translate
//! between the wire contract and core calls.

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::{AppError, AppResult};
pub use state::AppState;
