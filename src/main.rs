// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use iced_folio::app::paths::{self, CliOverrides};
use iced_folio::app::{self, Flags};
use log::LevelFilter;

const HELP: &str = "\
iced_folio - animated personal portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --mount <NAME>        Mount point to attach to [default: root]
  --data-dir <DIR>      Directory holding the saved theme
  --config-dir <DIR>    Directory holding settings.toml
  --base-path <DIR>     Base directory for portfolio images
  -h, --help            Print this help
";

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("iced_folio", LevelFilter::Debug)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let flags = Flags {
        mount: args.opt_value_from_str("--mount")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        base_path: args.opt_value_from_str("--base-path")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logger();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(CliOverrides {
        data_dir: flags.data_dir.clone(),
        config_dir: flags.config_dir.clone(),
        base_path: flags.base_path.clone(),
    });

    app::run(flags)
}
