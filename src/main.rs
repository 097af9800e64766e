/*
 * Boid Playground
 *
 * Click to place boids or walls (pick which in the "Palette" section of the
 * panel) and toggle the flocking behaviors live in the "Features" section.
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use flockbox::app::{self, Settings};
use flockbox::{Features, PlacementMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive boid flocking on a wrap-around plane", long_about = None)]
struct Args {
    /// JSON file with initial feature settings (camelCase keys, missing keys use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What a click places when the app starts
    #[arg(short, long, value_enum, default_value_t = PlacementMode::Boid)]
    placement: PlacementMode,

    /// Seed for every random draw, for repeatable runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print the effective feature settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

// `--debug` picks the base level; directives in the environment are applied
// after it, so `RUST_LOG` still wins
fn logger(debug: bool, env: env_logger::Env<'_>) -> env_logger::Builder {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_env(env);
    builder
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger(args.debug, env_logger::Env::default()).init();

    let features = match &args.config {
        Some(path) => Features::from_json_file(path)
            .with_context(|| format!("Failed to load features from {}", path.display()))?,
        None => Features::default(),
    };

    if args.print_config {
        println!("{}", features.to_json_pretty()?);
        return Ok(());
    }

    log::info!("Boid playground starting...");
    log::info!("Features: {:?}", features);
    if let Some(seed) = args.seed {
        log::info!("Seed: {}", seed);
    }

    app::configure(Settings {
        features,
        placement: args.placement,
        seed: args.seed,
    })
    .map_err(|_| anyhow::anyhow!("Settings were already configured"))?;

    nannou::app(app::model).update(app::update).run();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_sets_the_base_level() {
        let unset = || env_logger::Env::new().filter("FLOCKBOX_TEST_LOG_UNSET");
        assert_eq!(logger(false, unset()).build().filter(), log::LevelFilter::Info);
        assert_eq!(logger(true, unset()).build().filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn environment_overrides_the_flag() {
        std::env::set_var("FLOCKBOX_TEST_LOG_TRACE", "trace");
        let env = env_logger::Env::new().filter("FLOCKBOX_TEST_LOG_TRACE");
        assert_eq!(logger(false, env).build().filter(), log::LevelFilter::Trace);

        std::env::set_var("FLOCKBOX_TEST_LOG_WARN", "warn");
        let env = env_logger::Env::new().filter("FLOCKBOX_TEST_LOG_WARN");
        assert_eq!(logger(true, env).build().filter(), log::LevelFilter::Warn);
    }
}
