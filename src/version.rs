// Version information for the Byte Search node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-corpus-index-2026-08-07";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-07";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "bounded-parallel-fetch",
    "json-corpus",
    "substring-scoring",
    "title-preview",
];
