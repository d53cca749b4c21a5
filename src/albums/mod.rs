// SPDX-License-Identifier: MPL-2.0
//! Album browser core: fetching, filtering and favorite tracking.
//!
//! This module is independent of the widget tree. The UI layer drives it
//! through [`BrowserState`] and turns its [`FilterRequest`]s and
//! [`ThumbnailRequest`]s into asynchronous tasks.

pub mod browser;
pub mod fetch;
pub mod filter;
pub mod thumbnails;

pub use browser::{BrowserState, FilterRequest, LoadingPhase};
pub use filter::{delayed_view, derive_view};
pub use thumbnails::{ThumbnailCache, ThumbnailRequest};
