//! Domain layer constants
//!
//! Constants that are part of the caching contract and are used by the
//! application layer. Infrastructure-specific constants remain in
//! `rcc_infrastructure::constants`.

// ============================================================================
// CACHE DOMAIN CONSTANTS
// ============================================================================

/// Namespace for cached text-processing results
pub const TEXT_PROCESSING_NAMESPACE: &str = "text-processing";

/// Separator between namespace and digest in a cache key
pub const CACHE_NAMESPACE_SEPARATOR: &str = ":";

/// Time-to-live for cached text-processing results (1 hour)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

// ============================================================================
// ANALYSIS DOMAIN CONSTANTS
// ============================================================================

/// Artificial latency injected by the simulated analysis, in milliseconds
pub const ANALYSIS_DEFAULT_LATENCY_MS: u64 = 2000;

/// Profiles longer than this many characters earn the strong recommendation
pub const ANALYSIS_STRONG_CANDIDATE_MIN_LENGTH: usize = 100;
