//! Standalone builder: `emoji.json` → `public/pairMixes.json`.

use emoji_mixer::logging;
use emoji_mixer_builder::{BuildPaths, run_pair_mixes};

fn main() {
    logging::init_default();

    match run_pair_mixes(&BuildPaths::default()) {
        Ok(report) => println!(
            "Wrote {} pairs to {}",
            report.count,
            report.output.display()
        ),
        Err(e) => {
            log::error!("Pair mix build failed: {e}");
            std::process::exit(1);
        }
    }
}
