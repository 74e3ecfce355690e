use anyhow::Result;
use sentinel_config::{Config, PatternDefinition};
use sentinel_security::{BUILTIN_PATTERNS, compile_rule};

use crate::commands::build_registry;

#[derive(Debug, PartialEq, Eq)]
enum Origin {
    BuiltIn,
    Override,
    Custom,
}

fn origin(name: &str, pattern: &str) -> Origin {
    match BUILTIN_PATTERNS.iter().find(|(builtin, _)| *builtin == name) {
        Some((_, builtin)) if *builtin == pattern => Origin::BuiltIn,
        Some(_) => Origin::Override,
        None => Origin::Custom,
    }
}

pub fn handle(cli_patterns: &[PatternDefinition], config: &Config) -> Result<()> {
    let registry = build_registry(config, cli_patterns, true)?;

    println!("Classifiers ({}):", registry.len());
    for (name, pattern) in registry.iter() {
        let label = match origin(name, pattern) {
            Origin::BuiltIn => "built-in",
            Origin::Override => "override",
            Origin::Custom => "custom",
        };
        println!("  {:<12} [{}] {}", name, label, pattern);

        if let Err(skip) = compile_rule(name, pattern) {
            println!("    ⚠ invalid, will be skipped: {}", skip.reason);
        }
    }

    Ok(())
}
