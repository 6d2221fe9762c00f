//! `clean:debug` command implementation.

use crate::cleaner::{
    CleanOptions, CleanOrchestrator, CleanResult, CleanSummary, DiscoveryOptions, FileDiscovery,
    Language, PatternCatalog,
};
use crate::cli::CleanDebugArgs;
use crate::config::Config;
use crate::error::SweeperError;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

/// Exit status when the target path does not exist.
pub const EXIT_PATH_NOT_FOUND: u8 = 1;
/// Exit status for invalid command line values.
pub const EXIT_USAGE: u8 = 2;
/// Exit status when at least one file could not be cleaned.
pub const EXIT_PARTIAL_FAILURE: u8 = 5;

#[derive(Serialize)]
struct RunReport<'a> {
    path: &'a Path,
    dry_run: bool,
    files: Vec<&'a CleanResult>,
    summary: &'a CleanSummary,
}

/// Run the clean:debug command.
///
/// With `quiet`, the text report is reduced to the summary line.
pub fn run(args: CleanDebugArgs, config: &Config, quiet: bool) -> Result<ExitCode> {
    let languages = match &args.languages {
        Some(ids) => match ids
            .iter()
            .map(|id| Language::from_id(id))
            .collect::<crate::error::Result<Vec<_>>>()
        {
            Ok(languages) => languages,
            Err(e) => {
                eprintln!("Error: {}", e);
                let valid: Vec<&str> = Language::ALL.iter().map(|l| l.id()).collect();
                eprintln!("Valid languages: {}", valid.join(", "));
                return Ok(ExitCode::from(EXIT_USAGE));
            }
        },
        None => Language::ALL.to_vec(),
    };

    let catalog = PatternCatalog::with_languages(&languages)?;
    tracing::debug!(patterns = catalog.len(), "Compiled pattern catalog");

    let path = args
        .path
        .clone()
        .unwrap_or_else(|| config.cleaner.default_path.clone());

    let mut discovery_options = DiscoveryOptions::from(&config.cleaner);
    discovery_options.include_hidden |= args.hidden;

    let files = match FileDiscovery::new(discovery_options).discover(&path) {
        Ok(files) => files,
        Err(e @ SweeperError::PathNotFound(_)) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_PATH_NOT_FOUND));
        }
        Err(e) => return Err(e.into()),
    };

    let options = CleanOptions {
        dry_run: args.dry,
        backup: args.backup || config.cleaner.backup,
    };
    let jobs = args.jobs.unwrap_or(config.cleaner.jobs);
    let orchestrator = CleanOrchestrator::new(&catalog, options, jobs);

    tracing::info!(files = files.len(), dry_run = options.dry_run, "Cleaning");
    let results = orchestrator.clean_all(&files);
    let summary = CleanOrchestrator::summarize(&results);

    if args.json {
        let report = RunReport {
            path: &path,
            dry_run: options.dry_run,
            files: results
                .iter()
                .filter(|r| match r {
                    CleanResult::Success(file) => file.removed > 0,
                    CleanResult::Failed { .. } => true,
                })
                .collect(),
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text(&results, &summary, options.dry_run, quiet));
    }

    for result in &results {
        if let CleanResult::Failed { path, error, .. } = result {
            eprintln!("Error cleaning {}: {}", path.display(), error);
        }
    }

    if summary.failed_count > 0 {
        return Ok(ExitCode::from(EXIT_PARTIAL_FAILURE));
    }

    Ok(ExitCode::SUCCESS)
}

/// Render the human-readable report.
///
/// The per-file line always says "Cleaned"; only the summary switches to
/// "Found" in dry-run mode. Backups are listed even when the overwrite that
/// followed them failed. `quiet` keeps only the summary line.
pub fn render_text(
    results: &[CleanResult],
    summary: &CleanSummary,
    dry_run: bool,
    quiet: bool,
) -> String {
    let mut lines = Vec::new();

    for result in results.iter().filter(|_| !quiet) {
        match result {
            CleanResult::Success(file) if file.removed > 0 => {
                if let Some(backup) = &file.backup_path {
                    lines.push(format!("Backup created: {}", backup.display()));
                }
                lines.push(format!(
                    "Cleaned {} statements from: {}",
                    file.removed,
                    file.path.display()
                ));
            }
            CleanResult::Failed {
                backup_path: Some(backup),
                ..
            } => {
                lines.push(format!("Backup created: {}", backup.display()));
            }
            _ => {}
        }
    }

    if summary.total_removed > 0 {
        let action = if dry_run { "Found" } else { "Cleaned" };
        lines.push(format!(
            "{} total {} debug statements in {} files!",
            action,
            summary.total_removed,
            summary.modified_count()
        ));
    } else {
        lines.push("No debug statements found!".to_string());
    }

    lines.join("\n")
}
