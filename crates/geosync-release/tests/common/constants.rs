//! Shared constants for test infrastructure

// Repository fixtures
pub const REPO_OWNER: &str = "P3TERX";
pub const REPO_NAME: &str = "GeoLite.mmdb";
pub const TEST_REPO: &str = "P3TERX/GeoLite.mmdb";

// Asset names
pub const ASSET_COUNTRY: &str = "GeoLite2-Country.mmdb";
pub const ASSET_CITY: &str = "GeoLite2-City.mmdb";
pub const ASSET_MISSING: &str = "Missing.mmdb";

// Release tags
pub const TAG_DATED: &str = "2026.02.25";
pub const TAG_V1: &str = "v1.0.0";
pub const TAG_V2: &str = "v2.0.0";

// Asset bodies
pub const FAKE_MMDB_CONTENT: &[u8] = b"fake mmdb content";
pub const FAKE_MMDB_CONTENT_V2: &[u8] = b"fake mmdb content, second edition";

// Tokens
pub const TEST_TOKEN: &str = "ghp_testtoken123";
