use std::path::Path;

use anyhow::Result;
use sentinel_config::{Config, PROJECT_FILE, PatternDefinition, ProjectConfig};

use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands, override_path: Option<&Path>, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Path => {
            let path = override_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_path);
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Show => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
        ConfigCommands::Init { force } => init(force),
    }
}

fn init(force: bool) -> Result<()> {
    let current_dir = std::env::current_dir()?;

    if current_dir.join(PROJECT_FILE).exists() && !force {
        anyhow::bail!("{} already exists in current directory", PROJECT_FILE);
    }

    let project_config = ProjectConfig {
        patterns: vec![PatternDefinition::new("EMPLOYEE_ID", r"\bEMP-\d{5}\b")],
    };
    project_config.save(&current_dir)?;

    println!("✓ Created {}", PROJECT_FILE);
    println!("  Edit [[patterns]] to add project classifiers");

    Ok(())
}
