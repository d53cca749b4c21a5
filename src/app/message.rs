// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::albums_screen;
use crate::ui::signup_form;
use crate::ui::signup_screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SignUpForm(signup_form::Message),
    Albums(albums_screen::Message),
    SignUpScreen(signup_screen::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo list endpoint, overriding `[albums] endpoint`.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_ALBUMS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional artificial filter delay, overriding `[albums] filter_delay_ms`.
    pub filter_delay_ms: Option<u64>,
}
