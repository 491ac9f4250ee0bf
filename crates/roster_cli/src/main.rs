//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage and
//!   schema provisioning without the HTTP adapter.

use roster_core::db::{migrations::latest_version, open_db};
use roster_core::Config;

fn main() {
    let config = Config::from_env();
    if let Some(log_dir) = config.log_dir.as_deref().and_then(|dir| dir.to_str()) {
        if let Err(err) = roster_core::init_logging(&config.log_level, log_dir) {
            eprintln!("roster_core logging init failed: {err}");
        }
    }

    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    match open_db(&config.db_path) {
        Ok(_) => println!(
            "roster_core db={} schema_version={}",
            config.db_path.display(),
            latest_version()
        ),
        Err(err) => {
            eprintln!(
                "roster_core schema provisioning failed for {}: {err}",
                config.db_path.display()
            );
            std::process::exit(1);
        }
    }
}
