// SPDX-License-Identifier: MPL-2.0
//! Album group selector.
//!
//! An album is nothing more than the set of photo records sharing an
//! `album_id`. The selector picks one album, or all records.

use super::photo::PhotoRecord;

/// Number of album buttons offered by the selector by default.
pub const DEFAULT_GROUP_COUNT: u32 = 100;

/// The currently active album filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlbumGroup {
    /// No filter, every record is shown.
    #[default]
    All,
    /// Only records whose `album_id` equals the value.
    Album(u32),
}

impl AlbumGroup {
    /// Returns `true` if `record` belongs to this group.
    #[must_use]
    pub fn matches(self, record: &PhotoRecord) -> bool {
        match self {
            Self::All => true,
            Self::Album(id) => record.album_id == id,
        }
    }

    /// Returns the selector as a nullable album id (`None` means all).
    #[must_use]
    pub fn as_option(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Album(id) => Some(id),
        }
    }

    /// Selector buttons in display order: "All" then albums `1..=count`.
    pub fn choices(count: u32) -> impl Iterator<Item = AlbumGroup> {
        std::iter::once(Self::All).chain((1..=count).map(Self::Album))
    }
}
