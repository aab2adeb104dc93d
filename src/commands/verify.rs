use anyhow::{Context, Result};
use colored::*;

use sqa_scaffold::clock;
use sqa_scaffold::verify::{self, DirStatus, FileStatus, VerifyReport};

use super::TargetArgs;

/// Check an existing tree. Returns the process exit code: 0 when clean.
pub fn execute(target: &TargetArgs, json: bool) -> Result<i32> {
    let config = target.load_config()?;
    let date = clock::render_date(config.clock.as_ref());

    let report = verify::verify(&config.root_path, &date)
        .with_context(|| format!("Failed to verify {}", config.root_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_human(&report);
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

fn print_human(report: &VerifyReport) {
    println!("🔍 Verifying {} (date {})", report.root.display(), report.date);

    for dir in &report.directories {
        match dir.status {
            DirStatus::Present => {}
            DirStatus::Missing => println!("  {} {}/ missing", "✗".red().bold(), dir.path),
            DirStatus::NotADirectory => {
                println!("  {} {}/ is not a directory", "✗".red().bold(), dir.path)
            }
        }
    }

    for file in &report.files {
        match file.status {
            FileStatus::Match => {}
            FileStatus::Missing => println!("  {} {} missing", "✗".red().bold(), file.path),
            FileStatus::Drifted => {
                println!("  {} {} differs from template", "~".yellow().bold(), file.path)
            }
        }
    }

    for extra in &report.extras {
        println!("  {} {} (not generated)", "+".dimmed(), extra.display());
    }

    if report.is_clean() {
        println!("{}", "✓ Project matches the template".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "{} problem(s). Run `sqa-scaffold generate` to restore.",
                report.problems()
            )
            .red()
            .bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn target(root: &Path) -> TargetArgs {
        TargetArgs {
            root: Some(root.to_string_lossy().into_owned()),
            date: Some("2025-03-25".to_string()),
            config: None,
        }
    }

    #[test]
    fn test_exit_code_follows_tree_state() -> Result<()> {
        let temp = TempDir::new()?;
        let root = temp.path().join("qa");
        let args = target(&root);

        assert_eq!(execute(&args, false)?, 1);

        generate::execute(&args, false)?;
        assert_eq!(execute(&args, false)?, 0);
        assert_eq!(execute(&args, true)?, 0);

        fs::write(root.join("docs/requirements/srs.docx"), "edited")?;
        assert_eq!(execute(&args, false)?, 1);
        Ok(())
    }

    #[test]
    fn test_generate_fails_under_plain_file() -> Result<()> {
        let temp = TempDir::new()?;
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "plain file")?;

        let err = generate::execute(&target(&blocker.join("qa")), false).unwrap_err();

        assert!(err.to_string().starts_with("Failed to scaffold"));
        assert!(err
            .chain()
            .any(|cause| cause.is::<sqa_scaffold::FilesystemError>()));
        assert_eq!(fs::read_to_string(&blocker)?, "plain file");
        Ok(())
    }

    #[test]
    fn test_bad_date_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let mut args = target(&temp.path().join("qa"));
        args.date = Some("25/03/2025".to_string());

        assert!(execute(&args, false).is_err());
        assert!(generate::execute(&args, false).is_err());
        assert!(!temp.path().join("qa").exists());
    }
}
