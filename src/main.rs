// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use weightlog::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("weightlog starting up");

    let mut args = pico_args::Arguments::from_env();

    let config_path = match args.opt_value_from_str::<_, PathBuf>("--config") {
        Ok(path) => path,
        Err(err) => {
            log::warn!("Ignoring --config: {err}");
            None
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Unused arguments: {rest:?}");
    }

    app::run(Flags { config_path })
}
