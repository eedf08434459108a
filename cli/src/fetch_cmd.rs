use crate::Workspace;
use crate::parse_manual_key;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use luadoc_compiler::DocLayout;
use luadoc_fetch::FetchReport;
use luadoc_fetch::FetchStatus;
use luadoc_fetch::FetchTarget;
use luadoc_fetch::Fetcher;
use owo_colors::OwoColorize;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct FetchArgs {
    /// Only fetch these manuals (`<language>/<version>`, repeatable)
    #[arg(long, value_name = "LANG/VER")]
    pub only: Vec<String>,

    /// Per-request timeout in seconds (overrides the configuration)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

pub async fn run(workspace: &Workspace, args: FetchArgs) -> Result<()> {
    let targets = select_targets(workspace, &args.only)?;
    let mut options = workspace.config.fetch_options();
    if let Some(secs) = args.timeout {
        options.timeout = Some(Duration::from_secs(secs));
    }

    let fetcher = Fetcher::new(workspace.config.assets.clone(), options)
        .context("failed to build HTTP client")?;
    let report = fetcher
        .fetch_all(&targets)
        .await
        .context("failed to prepare download directories")?;
    print_report(&report);
    Ok(())
}

fn select_targets(workspace: &Workspace, only: &[String]) -> Result<Vec<FetchTarget>> {
    let layout = DocLayout::new(&workspace.root);
    if only.is_empty() {
        return Ok(workspace.config.fetch_targets(&layout));
    }
    only.iter()
        .map(|key| {
            let (language, version) = parse_manual_key(key)?;
            workspace
                .config
                .source(&language, &version)
                .map(|source| source.fetch_target(&layout))
                .with_context(|| format!("no source configured for {key}"))
        })
        .collect()
}

fn print_report(report: &FetchReport) {
    for outcome in &report.outcomes {
        match &outcome.status {
            FetchStatus::Downloaded { bytes } => println!(
                "{} {} {}",
                "✓".bright_green(),
                outcome.url,
                format!("({bytes} bytes)").bright_black()
            ),
            FetchStatus::Failed { error } => {
                println!("{} {} {}", "✗".bright_red(), outcome.url, error.bright_black())
            }
        }
    }
    println!(
        "\nFetched {} of {} files ({} bytes), {} failed",
        report.succeeded().count(),
        report.outcomes.len(),
        report.total_bytes(),
        report.failed().count()
    );
}
