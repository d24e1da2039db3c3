use colored::Colorize;

use crate::cli::ConfigAction;
use crate::config::{AppConfig, ConfigStore};
use crate::error::Result;
use crate::logging::Logger;

/// Run a `dirsweep config` subcommand against the persisted store.
pub(crate) fn run(action: &ConfigAction, store: &ConfigStore, log: Logger) -> Result<()> {
    match action {
        ConfigAction::List => {
            let config = store.load();
            log.info(format!("Config: {}", store.path().display()));
            println!("Target folders:");
            for target in &config.targets {
                println!("  {target}");
            }
            Ok(())
        }
        ConfigAction::Add { names } => {
            let mut config = store.load();
            let mut added = Vec::new();
            for name in names {
                let exists = config
                    .targets
                    .iter()
                    .any(|target| target.eq_ignore_ascii_case(name));
                if !exists {
                    config.targets.push(name.clone());
                    added.push(name.as_str());
                }
            }
            store.save(&config)?;
            if added.is_empty() {
                log.info("Already present, nothing added.");
            } else {
                log.info(format!("{} Added: {}", "✓".green(), added.join(", ")));
            }
            Ok(())
        }
        ConfigAction::Remove { names } => {
            let mut config = store.load();
            let before = config.targets.len();
            config
                .targets
                .retain(|target| !names.iter().any(|name| name.eq_ignore_ascii_case(target)));
            let removed = before - config.targets.len();
            store.save(&config)?;
            log.info(format!("{} Removed {removed} target(s)", "✓".green()));
            Ok(())
        }
        ConfigAction::Reset => {
            store.save(&AppConfig::default())?;
            log.info(format!("{} Reset to default (node_modules)", "✓".green()));
            Ok(())
        }
    }
}
