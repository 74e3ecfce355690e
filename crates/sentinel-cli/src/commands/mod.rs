pub mod config;
pub mod patterns;
pub mod scan;

use anyhow::Result;
use sentinel_config::{Config, PatternDefinition, ProjectConfig, layered_patterns};
use sentinel_security::{PatternRegistry, effective_patterns};

/// Merge built-ins with global, project and command-line patterns
pub fn build_registry(
    config: &Config,
    cli_patterns: &[PatternDefinition],
    use_project: bool,
) -> Result<PatternRegistry> {
    let project = if use_project {
        ProjectConfig::find_and_load()?
    } else {
        None
    };

    if let Some((root, _)) = &project {
        tracing::debug!(root = %root.display(), "Using project config");
    }

    let custom = layered_patterns(config, project.as_ref().map(|(_, p)| p), cli_patterns);
    Ok(effective_patterns(custom))
}
