use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bump_check::boundary::BoundaryWarning;
use bump_check::cli::{run_check_workflow, CheckWorkflowArgs};
use bump_check::config::{self, Config};
use bump_check::git::Git2Repository;
use bump_check::ui::{self, Output, OutputFormat};
use bump_check::validator::Verdict;

#[derive(clap::Parser)]
#[command(
    name = "bump-check",
    version,
    about = "Check a declared version against the bump implied by conventional commits since the last tag"
)]
struct Args {
    #[arg(
        long,
        env = "INPUT_CURRENT-VERSION",
        help = "Version declared for the next release"
    )]
    current_version: String,

    #[arg(
        short,
        long,
        env = "INPUT_VERBOSE",
        help = "Log the latest tag, each commit and the required increment"
    )]
    verbose: bool,

    #[arg(short, long, help = "Repository location (defaults to the current directory)")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let output = Output::new(args.format, args.verbose || config.behavior.verbose);

    match run(&args, &config, &output) {
        Ok(verdict) if verdict.is_success() => Ok(()),
        Ok(_) => std::process::exit(1),
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, config: &Config, output: &Output) -> Result<Verdict> {
    let repo_path = args
        .repo
        .clone()
        .or_else(|| config.behavior.repository.clone());
    let repo = Git2Repository::open(repo_path.as_deref())?;

    let workflow_args = CheckWorkflowArgs {
        candidate_version: args.current_version.clone(),
    };
    let report = run_check_workflow(&repo, config, &workflow_args)
        .with_context(|| format!("Cannot check version {}", args.current_version))?;

    output.info(&format!("Found latest tag: {}", report.latest_tag));
    if !report.discarded_tags.is_empty() {
        output.warning(&BoundaryWarning::DiscardedTags {
            tags: report.discarded_tags.clone(),
        });
    }

    if report.records.is_empty() {
        let head = repo.head_hash().unwrap_or_else(|_| "unknown".to_string());
        output.warning(&BoundaryWarning::NoNewCommits {
            latest_tag: report.latest_tag.name.clone(),
            current_commit_hash: head,
        });
    } else {
        output.commits(&report.records, &report.latest_tag.name);

        let non_conventional = report
            .records
            .iter()
            .filter(|r| !r.is_conventional())
            .count();
        if non_conventional > 0 {
            output.warning(&BoundaryWarning::NonConventionalCommits {
                count: non_conventional,
                total: report.records.len(),
            });
        }
    }

    if let Some(increment) = report.increment {
        output.info(&format!(
            "Version increment should be applied to [{}]",
            increment
        ));
    }

    output.verdict(&report.verdict);
    Ok(report.verdict)
}
