//! Server constants

/// Mount point for every API route
pub const API_BASE_PATH: &str = "/api";

/// Status reported when the store answers
pub const STORE_STATUS_CONNECTED: &str = "connected";

/// Status reported when the store is unreachable
pub const STORE_STATUS_ERROR: &str = "error";

/// Message returned when the store is unreachable
pub const STORE_UNREACHABLE_MESSAGE: &str = "Failed to connect to Redis";
