// SPDX-License-Identifier: MPL-2.0
use snacky::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme: args.opt_value_from_str("--theme").unwrap(),
    };

    app::run(flags)
}
