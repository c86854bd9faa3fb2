// SPDX-License-Identifier: MPL-2.0
use iced_portrait::app::{self, paths, Flags};

const HELP: &str = "\
IcedPortrait - portrait expression editor

USAGE:
  iced_portrait [OPTIONS] [IMAGE]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          UI language (e.g. en-US, ja)
  --api-base-url <URL>     Editing service base URL
  --config-dir <DIR>       Directory containing settings.toml
  --debounce-ms <MS>       Delay before a parameter change is sent

ENVIRONMENT:
  ICED_PORTRAIT_API_BASE_URL   Editing service base URL
  ICED_PORTRAIT_CONFIG_DIR     Directory containing settings.toml
  RUST_LOG                     Log filter (default: info)
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_base_url: args.opt_value_from_str("--api-base-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        debounce_ms: args.opt_value_from_str("--debounce-ms")?,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    log::info!("IcedPortrait {} starting up", env!("CARGO_PKG_VERSION"));
    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
