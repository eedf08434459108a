use crate::Workspace;
use crate::file_uri;
use crate::parse_manual_key;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use luadoc_compiler::CompileOutcome;
use luadoc_compiler::CompileReport;
use luadoc_compiler::DocLayout;
use luadoc_compiler::Sentinel;
use luadoc_compiler::compile;
use luadoc_compiler::ensure_compiled;
use owo_colors::OwoColorize;
use std::path::Path;

#[derive(Debug, Parser)]
pub struct CompileArgs {
    /// Manual to compile, as `<language>/<version>`
    #[arg(value_name = "LANG/VER")]
    pub manual: String,

    /// Recompile even when the output is up to date
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(workspace: &Workspace, args: CompileArgs) -> Result<()> {
    let (language, version) = parse_manual_key(&args.manual)?;
    let manual = DocLayout::new(&workspace.root).manual(&language, &version);

    let outcome = if args.force {
        if !manual.source.is_dir() {
            anyhow::bail!("no documentation sources at {}", manual.source.display());
        }
        let report = compile(&manual.source, &manual.output, &file_uri)
            .with_context(|| format!("failed to compile {}", args.manual))?;
        Sentinel::in_output(&manual.output)
            .record(&manual.source)
            .context("failed to write sentinel")?;
        CompileOutcome::Compiled(report)
    } else {
        ensure_compiled(&manual.source, &manual.output, &file_uri)
            .with_context(|| format!("failed to compile {}", args.manual))?
    };

    match outcome {
        CompileOutcome::UpToDate => println!(
            "{} {} is up to date",
            "✓".bright_green(),
            manual.output.display()
        ),
        CompileOutcome::Compiled(report) => print_report(&manual.output, &report),
        CompileOutcome::SourceMissing => anyhow::bail!(
            "no documentation sources at {}; run `luadoc fetch --only {}` first",
            manual.source.display(),
            args.manual
        ),
    }
    Ok(())
}

fn print_report(output: &Path, report: &CompileReport) {
    println!(
        "{} Compiled {} files into {}",
        "✓".bright_green(),
        report.total(),
        output.display().bright_cyan()
    );
    println!("  HTML pages: {}", report.html_files);
    println!("  Stylesheets: {}", report.css_files);
    println!("  Copied: {}", report.copied_files);
}
