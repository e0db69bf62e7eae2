//! Fixed error texts carried inside store results

pub const CACHE_ERROR_UNKNOWN: &str = "Unknown cache error";
pub const CACHE_ERROR_TIMEOUT: &str = "Cache timeout";
pub const CACHE_DATA_NULL: &str = "Cache data is null";

pub const NETWORK_ERROR_UNKNOWN: &str = "Unknown network error";
pub const NETWORK_ERROR_TIMEOUT: &str = "Network timeout";
pub const NETWORK_DATA_NULL: &str = "Network data is null";
