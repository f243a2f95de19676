use anyhow::Result;
use clap::{App as Cli, Arg};
use dashnav::app::{App, Options};
use dashnav::config::Config;

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("touch")
                .short("t")
                .long("touch")
                .help("Treats mouse input as touch: drag to swipe, hold to reorder"),
        )
        .arg(
            Arg::with_name("ephemeral")
                .long("ephemeral")
                .help("Keeps the bottom bar order in memory only"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(
        config,
        Options {
            touch: matches.is_present("touch"),
            ephemeral: matches.is_present("ephemeral"),
        },
    )
}
