// SPDX-License-Identifier: MPL-2.0
//! `iced_albums` is a sign-up form and photo album browser built with the
//! Iced GUI framework.
//!
//! The form validates its fields inline before opening the album browser,
//! which fetches a remote photo list, filters it by album and keeps star and
//! heart favorites for the session. Strings are localized with Fluent and
//! user preferences are read from a TOML settings file.

#![doc(html_root_url = "https://docs.rs/iced_albums/0.1.0")]

pub mod albums;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod signup;
pub mod ui;
