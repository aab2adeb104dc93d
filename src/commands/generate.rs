use anyhow::{Context, Result};

use sqa_scaffold::log;
use sqa_scaffold::scaffold::ProjectScaffolder;

use super::TargetArgs;

/// Scaffold the project and print where it landed
pub fn execute(target: &TargetArgs, json: bool) -> Result<()> {
    let config = target.load_config()?;
    log::debug("generate", format_args!("{:?}", config));

    let scaffolder = ProjectScaffolder::new(config);
    let report = scaffolder
        .run()
        .with_context(|| format!("Failed to scaffold {}", scaffolder.root().display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Project generated at: {}", report.root.display());
    }

    Ok(())
}
