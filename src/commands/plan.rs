use anyhow::Result;
use colored::*;
use serde::Serialize;

use sqa_scaffold::clock;
use sqa_scaffold::manifest::FILES;
use sqa_scaffold::paths::{self, DIRECTORIES};

use super::TargetArgs;

#[derive(Serialize)]
struct Plan {
    root: String,
    date: String,
    directories: Vec<&'static str>,
    files: Vec<PlannedFile>,
}

#[derive(Serialize)]
struct PlannedFile {
    path: &'static str,
    bytes: usize,
    dated: bool,
}

/// Directories strictly below the top-level segment `top`
fn nested_under<'a>(
    dirs: &'a [&'static str],
    top: &'a str,
) -> impl Iterator<Item = &'static str> + 'a {
    dirs.iter()
        .copied()
        .filter(move |d| d.split('/').next() == Some(top) && *d != top)
}

/// Show what `generate` would create, without touching the filesystem
pub fn execute(target: &TargetArgs, json: bool) -> Result<()> {
    let config = target.load_config()?;
    let date = clock::render_date(config.clock.as_ref());

    let plan = Plan {
        root: config.root_path.display().to_string(),
        directories: DIRECTORIES.to_vec(),
        files: FILES
            .iter()
            .map(|entry| PlannedFile {
                path: entry.path,
                bytes: entry.render(&date).len(),
                dated: entry.is_dated(),
            })
            .collect(),
        date,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{} {}/", "Root:".bold(), plan.root);
    for top in paths::top_level_dirs() {
        println!("  {}/", top.bold());
        for dir in nested_under(&plan.directories, top) {
            println!("    {}/", dir);
        }
    }

    println!("\n{} ({} files)", "Files:".bold(), plan.files.len());
    for file in &plan.files {
        let size = format!("{} bytes", file.bytes).dimmed();
        if file.dated {
            println!("  {} {} {}", file.path, size, format!("[dated {}]", plan.date).yellow());
        } else {
            println!("  {} {}", file.path, size);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_under_matches_whole_segment() {
        let dirs = ["doc", "docs/test_plan", "docs/requirements", "doc/extra", "reports"];
        assert_eq!(
            nested_under(&dirs, "docs").collect::<Vec<_>>(),
            vec!["docs/test_plan", "docs/requirements"]
        );
        assert_eq!(nested_under(&dirs, "doc").collect::<Vec<_>>(), vec!["doc/extra"]);
        assert_eq!(nested_under(&dirs, "reports").count(), 0);
    }

    #[test]
    fn test_nested_under_covers_every_layout_directory() {
        let nested: usize = paths::top_level_dirs()
            .into_iter()
            .map(|top| nested_under(DIRECTORIES, top).count())
            .sum();
        let flat = DIRECTORIES.iter().filter(|d| !d.contains('/')).count();
        assert_eq!(nested + flat, DIRECTORIES.len());
    }
}
