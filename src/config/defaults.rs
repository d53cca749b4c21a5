// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Endpoint**: Remote photo list
//! - **Filter**: Artificial delay applied when the album selector changes
//! - **Groups**: Number of album buttons
//! - **Thumbnails**: Download batch size and cache capacity

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Photo list fetched when the album browser opens.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/photos";

// ==========================================================================
// Filter Defaults
// ==========================================================================

/// Delay before a new album selection is applied (in milliseconds).
pub const DEFAULT_FILTER_DELAY_MS: u64 = 500;

/// Minimum filter delay (no artificial latency).
pub const MIN_FILTER_DELAY_MS: u64 = 0;

/// Maximum filter delay.
pub const MAX_FILTER_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Group Defaults
// ==========================================================================

/// Number of albums offered by the selector.
pub const DEFAULT_GROUP_COUNT: u32 = crate::domain::album_group::DEFAULT_GROUP_COUNT;

/// Minimum number of album buttons.
pub const MIN_GROUP_COUNT: u32 = 1;

/// Maximum number of album buttons.
pub const MAX_GROUP_COUNT: u32 = 1_000;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Thumbnails requested after each view change.
pub const DEFAULT_THUMBNAIL_PREFETCH: usize = 30;

/// Maximum thumbnails requested after a view change.
pub const MAX_THUMBNAIL_PREFETCH: usize = 200;

/// Decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_SIZE: usize = 256;

/// Smallest allowed thumbnail cache.
pub const MIN_THUMBNAIL_CACHE_SIZE: usize = 16;

/// Largest allowed thumbnail cache.
pub const MAX_THUMBNAIL_CACHE_SIZE: usize = 4_096;
