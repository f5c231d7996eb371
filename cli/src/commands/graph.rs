//! Graph and check commands - inspect the container bindings.

use std::sync::Arc;

use anyhow::{Context, Result};
use hexwire_core::adapters::StdoutConsole;
use hexwire_core::composition::declarative;
use hexwire_core::{Config, Container};

fn container(config: &Config) -> Result<Container> {
    declarative::build_container(&config.settings(), Arc::new(StdoutConsole::new()))
        .context("Failed to register service graph")
}

pub fn show(config: &Config, json: bool) -> Result<()> {
    let bindings = container(config)?.bindings();

    if json {
        println!("{}", serde_json::to_string_pretty(&bindings)?);
        return Ok(());
    }

    println!("{:<24} DEPENDS ON", "CAPABILITY");
    println!("{}", "-".repeat(72));
    for binding in &bindings {
        let deps = if binding.dependencies.is_empty() {
            "-".to_string()
        } else {
            binding.dependencies.join(", ")
        };
        println!("{:<24} {}", binding.capability, deps);
    }

    println!("\nTotal: {} bindings", bindings.len());
    Ok(())
}

pub fn check(config: &Config) -> Result<()> {
    let container = container(config)?;
    container
        .validate()
        .context("Service graph is not resolvable")?;

    println!("OK: {} bindings, no missing or cyclic dependencies", container.bindings().len());
    Ok(())
}
