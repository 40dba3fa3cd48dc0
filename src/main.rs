// SPDX-License-Identifier: MPL-2.0
use iced_primer::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        lesson_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
