//! # Recruitment Crew Cache Server
//!
//! HTTP surface over the cache-or-compute text analysis service.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rcc_server::run_server;
//!
//! #[rocket::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Default config search + environment
//!     run_server(None).await
//! }
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/redis-check` | Store connectivity |
//! | `POST` | `/api/process-text` | Analyze text, serving cached results when allowed |

pub mod constants;
pub mod handlers;
pub mod init;
pub mod transport;

pub use init::run_server;
pub use transport::http::{Cors, rocket};
