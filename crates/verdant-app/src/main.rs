//! The `verdant` binary: procedurally enrich a scene.
//!
//! Settings are loaded from `verdant.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p verdant-app -- scene.json -o out/out.json --terrain ground`.

use clap::Parser;
use tracing::error;
use verdant_app::platform::PlatformDirs;
use verdant_config::CliArgs;

fn main() {
    let args = CliArgs::parse();

    let dirs = match PlatformDirs::from_override(args.config.as_deref()) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to resolve config directory: {e}");
            std::process::exit(1);
        }
    };

    // Load config and apply CLI overrides; report the source once logging is up
    let loaded = verdant_app::load_config(&dirs.config_dir, &args);
    verdant_log::init_logging(
        Some(&dirs.log_dir),
        cfg!(debug_assertions),
        Some(&loaded.config),
    );
    loaded.report();
    let config = loaded.config;

    if let Err(e) = verdant_app::run(&args, &config) {
        error!(error = %e, "Scene generation failed");
        std::process::exit(1);
    }
}
