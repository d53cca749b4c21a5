// SPDX-License-Identifier: MPL-2.0
//! Embedded PNG images: the form header logo and the sign-in provider marks.
//!
//! Files live in `assets/images/` and are embedded at compile time via
//! `include_bytes!`. Handles are cached using `OnceLock`.

use iced::widget::image::{Handle, Image};
use std::sync::OnceLock;

/// Defines a function returning the image with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/images/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_bytes(DATA));
            Image::new(handle.clone())
        }
    };
}

define_icon!(logo, "logo.png", "Branding mark shown above the sign-up form.");
define_icon!(apple, "apple.png", "Apple mark for the social sign-in button.");
define_icon!(google, "google.png", "Google mark for the social sign-in button.");
