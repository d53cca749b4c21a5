// SPDX-License-Identifier: MPL-2.0
//! Derivation of the visible photo list from the full list and the selector.

use crate::domain::{AlbumGroup, PhotoRecord};
use std::sync::Arc;
use std::time::Duration;

/// Records matching `group`, in their original order.
///
/// Selecting an album with no records (or one outside the offered range)
/// yields an empty view.
#[must_use]
pub fn derive_view(records: &[PhotoRecord], group: AlbumGroup) -> Vec<PhotoRecord> {
    records
        .iter()
        .filter(|record| group.matches(record))
        .cloned()
        .collect()
}

/// Waits `delay` and then derives the view.
///
/// The wait only exists so the user sees the loading indicator; callers
/// must tag the result with a generation and drop it if a newer selection
/// was made in the meantime.
pub async fn delayed_view(
    records: Arc<[PhotoRecord]>,
    group: AlbumGroup,
    delay: Duration,
) -> Vec<PhotoRecord> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    derive_view(&records, group)
}
