mod cleaner;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use humansize::{format_size, DECIMAL};

use cleaner::{
    default_screenshot_dir, find_expired, BatchSummary, CleanerError, Config, Deleter, Event,
    EventSink, FileCandidate, NullSink,
};

#[derive(Parser)]
#[command(
    name = "screensweep",
    version,
    about = "Finds and deletes stale screenshot files on the desktop"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory to scan instead of the desktop
    #[arg(long, global = true, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Minimum age in whole days for a screenshot to qualify
    #[arg(long, global = true, default_value_t = cleaner::config::DEFAULT_MIN_AGE_DAYS)]
    days: i64,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Also report matching files that are not stale yet
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List stale screenshots without touching anything
    Preview,
    /// Delete stale screenshots after confirmation
    Clean {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Report what would be deleted without removing anything
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => match err.downcast_ref::<CleanerError>() {
            Some(cleaner_err) => {
                eprintln!("{} {}", "Error:".red().bold(), cleaner_err);
                ExitCode::from(cleaner_err.exit_code())
            }
            None => {
                eprintln!("{} {:#}", "Error:".red().bold(), err);
                ExitCode::from(1)
            }
        },
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if !platform_supported() {
        return Err(CleanerError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        }
        .into());
    }

    let directory = cli.dir.clone().unwrap_or_else(default_screenshot_dir);
    let dry_run = matches!(cli.command, Command::Clean { dry_run: true, .. });

    let config = Config::new(directory)
        .with_min_age_days(cli.days)
        .with_dry_run(dry_run);
    config.validate()?;

    // In JSON mode all human-oriented progress is suppressed; the single
    // JSON document at the end is the whole output.
    let sink: Box<dyn EventSink> = if cli.json {
        Box::new(NullSink)
    } else {
        Box::new(ConsoleSink {
            verbose: cli.verbose,
        })
    };

    let candidates = find_expired(&config.directory, config.min_age(), sink.as_ref());

    match cli.command {
        Command::Preview => {
            preview(&candidates, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Clean { yes, .. } => clean(&config, candidates, yes, cli.json, sink.as_ref()),
    }
}

/// Single boolean platform gate. The filename patterns cover the stock
/// screenshot tools of these three systems; anywhere else the tool refuses
/// to guess.
fn platform_supported() -> bool {
    matches!(std::env::consts::OS, "macos" | "windows" | "linux")
}

fn preview(candidates: &[FileCandidate], json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(candidates).context("serializing candidate list")?
        );
        return Ok(());
    }

    if candidates.is_empty() {
        println!("No stale screenshots found.");
        return Ok(());
    }

    for candidate in candidates {
        println!(
            "  {:>4}d  {:>10}  {}",
            candidate.age_days,
            format_size(candidate.size_bytes, DECIMAL),
            candidate.path.display()
        );
    }

    let total: u64 = candidates.iter().map(|c| c.size_bytes).sum();
    println!(
        "\nFound {} stale {} ({})",
        candidates.len().to_string().yellow().bold(),
        plural(candidates.len(), "screenshot"),
        format_size(total, DECIMAL)
    );

    Ok(())
}

fn clean(
    config: &Config,
    candidates: Vec<FileCandidate>,
    yes: bool,
    json: bool,
    sink: &dyn EventSink,
) -> Result<ExitCode> {
    if candidates.is_empty() {
        if json {
            let empty = BatchSummary {
                deleted: 0,
                failed: 0,
                outcomes: Vec::new(),
            };
            println!("{}", serde_json::to_string_pretty(&empty)?);
        } else {
            println!("Nothing to clean.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let total: u64 = candidates.iter().map(|c| c.size_bytes).sum();

    if !config.dry_run && !yes {
        let prompt = format!(
            "Delete {} {} ({})? [y/N] ",
            candidates.len(),
            plural(candidates.len(), "file"),
            format_size(total, DECIMAL)
        );
        if !confirm(&prompt)? {
            if !json {
                println!("Aborted, nothing deleted.");
            }
            return Ok(ExitCode::SUCCESS);
        }
    }

    let deleter = Deleter::new(&config.directory).with_dry_run(config.dry_run);
    let summary = deleter.delete_many(candidates, sink);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if config.dry_run {
        println!(
            "\nDry run: {} {} would be deleted ({})",
            summary.deleted.to_string().cyan().bold(),
            plural(summary.deleted, "file"),
            format_size(summary.bytes_reclaimed(), DECIMAL)
        );
    } else {
        let failures = if summary.failed > 0 {
            format!(", {} failed", summary.failed).red().bold().to_string()
        } else {
            String::new()
        };
        println!(
            "\nDeleted {} {} ({}){}",
            summary.deleted.to_string().green().bold(),
            plural(summary.deleted, "file"),
            format_size(summary.bytes_reclaimed(), DECIMAL),
            failures
        );
    }

    if summary.failed > 0 && !config.dry_run {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush().context("flushing prompt")?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("reading confirmation")?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

/// Console rendering of core events. Deletion outcomes always print one line
/// per file; scan events only show up with --verbose.
struct ConsoleSink {
    verbose: bool,
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: Event) {
        match event {
            Event::Scanned {
                path,
                age_days,
                expired,
            } => {
                if self.verbose {
                    let marker = if expired {
                        "stale".yellow()
                    } else {
                        "fresh".green()
                    };
                    println!("  {:<5} {} ({}d)", marker, path.display(), age_days);
                }
            }
            Event::Deleted { path, dry_run } => {
                let verb = if dry_run {
                    "would delete".cyan()
                } else {
                    "deleted".green()
                };
                println!("  {} {}", verb, path.display());
            }
            Event::DeleteFailed { path, reason } => {
                println!("  {} {}: {}", "failed".red().bold(), path.display(), reason);
            }
        }
    }
}
