// BayLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "BayLog";

/// Application identifier used for config directories.
pub const APP_ID: &str = "BayLog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Business name shown in the window title and top bar.
pub const BUSINESS_NAME: &str = "Shisha Shine";

// =============================================================================
// Bays
// =============================================================================

/// Number of physical wash bays. Bays are numbered 1..=BAY_COUNT.
pub const BAY_COUNT: usize = 9;

/// Lowest valid bay number.
pub const FIRST_BAY: u8 = 1;

/// Highest valid bay number.
pub const LAST_BAY: u8 = BAY_COUNT as u8;

// =============================================================================
// Records
// =============================================================================

/// Sentinel category value that enables the free-text override.
pub const OTHER: &str = "Other";

/// First id handed out by a fresh store.
pub const FIRST_RECORD_ID: u64 = 1;

/// ISO calendar date format used for display, search, and export.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Clear protection
// =============================================================================

/// Shared password gating Clear All / Clear Bay. Compared by exact equality.
pub const CLEAR_PASSWORD: &str = "1990";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Export
// =============================================================================

/// Header row of every CSV export, in column order.
pub const CSV_HEADER: [&str; 7] = ["Bay", "Plate", "Brand", "Color", "Type", "Date", "Operators"];

/// File stem used when exporting every bay at once.
pub const ALL_BAYS_FILE_STEM: &str = "bays-all";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
