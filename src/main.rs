// SPDX-License-Identifier: MPL-2.0
use iced_albums::app::{self, paths, Flags};

const HELP: &str = "\
IcedAlbums - sign-up form and photo album browser

USAGE:
  iced_albums [OPTIONS]

OPTIONS:
  --lang <ID>              Interface language (e.g. en-US, fr)
  --endpoint <URL>         Photo list endpoint
  --config-dir <DIR>       Directory holding settings.toml
  --filter-delay-ms <MS>   Delay before a new album selection is shown
  -h, --help               Print this help
";

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        filter_delay_ms: args.opt_value_from_str("--filter-delay-ms")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    configure_logging();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
