// SPDX-License-Identifier: MPL-2.0
use iced_snacks::app::{self, Flags};
use iced_snacks::config::paths;

const USAGE: &str = "\
Usage: iced_snacks [OPTIONS]

Options:
  --max <N>               Banners allowed on screen at once
  --config-dir <DIR>      Directory holding settings.toml
  -v, --verbose           Log lifecycle details
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let level = if args.contains(["-v", "--verbose"]) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let max_concurrent = match args.opt_value_from_str::<_, usize>("--max") {
        Ok(max) => max,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring --max");
            None
        }
    };
    let config_dir = match args.opt_value_from_str::<_, String>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring --config-dir");
            None
        }
    };
    for unknown in args.finish() {
        tracing::warn!(argument = ?unknown, "unrecognized argument");
    }

    paths::init_cli_override(config_dir);
    app::run(Flags { max_concurrent })
}
