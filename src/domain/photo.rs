// SPDX-License-Identifier: MPL-2.0
//! Photo records as returned by the remote photo list.

use serde::Deserialize;

/// Identifier of a photo record. Stable across filter changes.
pub type PhotoId = u64;

/// One entry of the remote photo list.
///
/// Records are immutable once fetched; the album browser never writes
/// them back or edits them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub album_id: u32,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}
