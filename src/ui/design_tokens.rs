// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors, including the favorite toggle colors
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_albums::ui::design_tokens::{palette, spacing};

let accent = palette::ACCENT;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb8(0x12, 0x14, 0x3D); // Link ink
    pub const GRAY_600: Color = Color::from_rgb8(0x73, 0x73, 0x73); // Captions
    pub const GRAY_400: Color = Color::from_rgb8(0xA6, 0xA6, 0xA6); // Muted labels
    pub const GRAY_300: Color = Color::from_rgb8(0xD9, 0xD9, 0xD9); // Input borders
    pub const GRAY_200: Color = Color::from_rgb8(0xDD, 0xDD, 0xDD); // Chip borders
    pub const GRAY_150: Color = Color::from_rgb8(0xE5, 0xE5, 0xE5); // Social buttons
    pub const GRAY_100: Color = Color::from_rgb8(0xF2, 0xF2, 0xF2); // Pills

    // Brand
    pub const ACCENT: Color = Color::from_rgb8(0xD3, 0xF3, 0x6B); // Lime
    pub const SPINNER: Color = Color::from_rgb8(0x00, 0x7B, 0xFF);

    // Favorites
    pub const STAR_ON: Color = Color::BLACK;
    pub const STAR_OFF: Color = GRAY_400;
    pub const HEART_ON: Color = Color::from_rgb8(0xFF, 0x00, 0x00);
    pub const HEART_OFF: Color = Color::from_rgb8(0xF9, 0x9D, 0xA3);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb8(0xFF, 0x00, 0x00);
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Square thumbnail in an album row.
    pub const THUMBNAIL: f32 = 90.0;

    /// Album selector chip height.
    pub const CHIP_HEIGHT: f32 = 40.0;

    /// Maximum width of the sign-up form column.
    pub const FORM_WIDTH: f32 = 420.0;

    // Favorite toggles
    pub const STAR_ICON: f32 = 18.0;
    pub const HEART_ICON: f32 = 20.0;

    /// Large activity indicator.
    pub const SPINNER: f32 = 36.0;

    /// Branding mark above the sign-up form.
    pub const LOGO: f32 = 64.0;

    /// Provider mark inside a social sign-in button.
    pub const SOCIAL_ICON: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: screen headings and prominent labels
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Screen headings ("Albums List").
    pub const TITLE_MD: f32 = 20.0;

    /// Section captions ("API RESULTS").
    pub const TITLE_SM: f32 = 19.0;

    /// Album id line in a row.
    pub const LABEL_LG: f32 = 18.0;

    /// Form field labels, chip text.
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text.
    pub const BODY: f32 = 14.0;

    /// Prompt line under the form.
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 15.0;
    pub const XL: f32 = 20.0;
}
