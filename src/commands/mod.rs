pub mod generate;
pub mod plan;
pub mod verify;

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use sqa_scaffold::config::{self, Overrides, ScaffoldConfig};

/// Where and when to scaffold; shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Destination directory (default: sqa_manual_testing_project)
    #[arg(long)]
    pub root: Option<String>,

    /// Date stamped into the execution log, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// TOML settings file providing `root` and/or `date`
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl TargetArgs {
    pub fn load_config(&self) -> Result<ScaffoldConfig> {
        let overrides = Overrides {
            root: self.root.clone(),
            date: self.date.clone(),
        };
        config::load(self.config.as_deref(), &overrides)
    }
}
