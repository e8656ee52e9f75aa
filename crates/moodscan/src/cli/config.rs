//! Configuration paths for Moodscan
//!
//! Simple path resolution with sensible defaults.
//! All paths are under ~/.moodscan/ unless MOODSCAN_HOME overrides it.

use std::path::PathBuf;

/// Resolve the Moodscan home directory.
///
/// Priority:
/// 1. `MOODSCAN_HOME` environment variable
/// 2. `~/.moodscan`
/// 3. `.moodscan` relative to the working directory (no home dir)
pub fn moodscan_home() -> PathBuf {
    if let Ok(home) = std::env::var("MOODSCAN_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .map(|h| h.join(".moodscan"))
        .unwrap_or_else(|| PathBuf::from(".moodscan"))
}

/// Get logs directory: ~/.moodscan/logs
pub fn logs_dir() -> PathBuf {
    moodscan_home().join("logs")
}

/// Ensure the logs directory exists
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Arguments for the config command
#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved paths in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the config command - shows current paths
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let home = moodscan_home();
    let logs = logs_dir();

    if args.json {
        let config = serde_json::json!({
            "home": home.to_string_lossy(),
            "logs": {
                "path": logs.to_string_lossy(),
                "exists": logs.exists(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("MOODSCAN CONFIGURATION");
        println!("======================");
        println!();
        println!("Home:  {}", home.display());
        println!();
        println!("Logs:  {}", logs.display());
        println!(
            "       exists: {}",
            if logs.exists() { "yes" } else { "no" }
        );
    }

    Ok(())
}
