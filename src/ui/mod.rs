// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`signup_form`] - Sign-up form with validation and social sign-in
//! - [`albums_screen`] - Album selector and photo list with favorites
//! - [`signup_screen`] - Account creation placeholder
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`icons`] - Embedded branding and provider images
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod albums_screen;
pub mod design_tokens;
pub mod icons;
pub mod signup_form;
pub mod signup_screen;
pub mod styles;
pub mod theming;
pub mod widgets;
