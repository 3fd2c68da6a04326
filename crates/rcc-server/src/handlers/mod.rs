//! Route handlers

pub mod health;
pub mod process_text;

pub use health::{StoreStatusResponse, redis_check};
pub use process_text::{ErrorResponse, ProcessTextRequest};
