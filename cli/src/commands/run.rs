//! Run command - compose the graph and invoke the cascades.

use std::sync::Arc;

use anyhow::{Context, Result};
use hexwire_core::adapters::StdoutConsole;
use hexwire_core::ports::Console;
use hexwire_core::{compose, Config};
use tracing::info;

use crate::RunArgs;

pub async fn run(mut config: Config, args: &RunArgs) -> Result<()> {
    args.apply(&mut config);
    let settings = config.settings();
    let console: Arc<dyn Console> = Arc::new(StdoutConsole::new());

    // Nothing runs unless the whole graph wired.
    let app = compose(config.strategy, &settings, console)
        .with_context(|| format!("Failed to compose service graph ({})", config.strategy))?;

    app.run(config.scenario)
        .await
        .with_context(|| format!("Scenario '{}' failed", config.scenario))?;

    info!(scenario = %config.scenario, "Run complete");
    Ok(())
}
