use anyhow::Result;
use clap::Parser;
use emoji_mixer::cli::{self, Cli};
use emoji_mixer::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is read before logging starts so its level can apply; a bad
    // config still gets logged at the CLI / RUST_LOG level.
    let config = cli::load_config(cli.config.as_deref(), cli.public_dir.as_deref());
    let config_level = config
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or_default();
    logging::init_logging(cli.log_level, config_level);

    let result = config.and_then(|config| {
        log::debug!("emoji-mixer {} running {:?}", emoji_mixer::VERSION, cli.command);
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        cli::run_command(&cli.command, &config, &mut out)
    });

    if let Err(ref e) = result {
        eprintln!("emoji-mixer: error: {e:#}");
    }
    result
}
