// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain data types and the rules that act on them.
//!
//! Nothing in here performs I/O or touches the UI toolkit. The only
//! external dependency is `serde`, used to read photo records off the wire.
//!
//! # Modules
//!
//! - [`photo`]: Remote photo records ([`PhotoRecord`](photo::PhotoRecord))
//! - [`album_group`]: The album selector ([`AlbumGroup`](album_group::AlbumGroup))
//! - [`selection`]: Star/heart toggle sets ([`SelectionSet`](selection::SelectionSet))

pub mod album_group;
pub mod photo;
pub mod selection;

pub use album_group::AlbumGroup;
pub use photo::{PhotoId, PhotoRecord};
pub use selection::SelectionSet;
