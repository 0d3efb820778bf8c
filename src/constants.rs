// Constants module - centralized default values for configuration
//
// Defaults for storage-backend routing and the application base path.

// =============================================================================
// Path defaults
// =============================================================================

/// Application base path used when none is configured
pub const DEFAULT_APP_VIRTUAL_PATH: &str = "/";

/// Marker for application-relative paths (`~/images/a.jpg`)
pub const APP_RELATIVE_MARKER: &str = "~/";

// =============================================================================
// Storage backend defaults
// =============================================================================

/// Virtual folder the remote reader serves absolute URLs under
pub const DEFAULT_REMOTE_PREFIX: &str = "remote";

/// Virtual folder all S3 buckets are served under
pub const DEFAULT_S3_PREFIX: &str = "s3";

/// Virtual folder all Azure blob containers are served under
pub const DEFAULT_AZURE_PREFIX: &str = "azure";
