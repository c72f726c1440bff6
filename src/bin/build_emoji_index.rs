//! Standalone builder: `emoji.json` → `public/emojiIndex.json`.

use emoji_mixer::logging;
use emoji_mixer_builder::{BuildPaths, run_emoji_index};

fn main() {
    logging::init_default();

    match run_emoji_index(&BuildPaths::default()) {
        Ok(report) => println!(
            "Wrote {} emoji to {}",
            report.count,
            report.output.display()
        ),
        Err(e) => {
            log::error!("Emoji index build failed: {e}");
            std::process::exit(1);
        }
    }
}
