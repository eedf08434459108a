use luadoc_compiler::CompileOutcome;
use luadoc_compiler::CompileReport;
use luadoc_compiler::DocLayout;
use luadoc_compiler::Sentinel;
use luadoc_compiler::ensure_compiled;
use luadoc_compiler::source_identity;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn resolver(path: &Path) -> String {
    format!("asset:{}", path.display())
}

fn write_page(dir: &Path, body: &str) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(
        dir.join("readme.html"),
        format!("<html><head><title>t</title></head><body>{body}</body></html>"),
    )?;
    Ok(())
}

const ONE_PAGE: CompileReport = CompileReport {
    html_files: 1,
    css_files: 0,
    copied_files: 0,
};

#[test]
fn same_source_path_skips_second_compile() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let manual = DocLayout::new(tmp.path()).manual("en-us", "54");
    write_page(&manual.source, "first")?;

    let first = ensure_compiled(&manual.source, &manual.output, &resolver)?;
    assert_eq!(first, CompileOutcome::Compiled(ONE_PAGE));
    assert_eq!(
        fs::read_to_string(manual.sentinel())?,
        source_identity(&manual.source)
    );

    // Content changes under the same path go unnoticed.
    write_page(&manual.source, "second")?;
    let second = ensure_compiled(&manual.source, &manual.output, &resolver)?;
    assert_eq!(second, CompileOutcome::UpToDate);
    let compiled = fs::read_to_string(manual.compiled_file("readme.html"))?;
    assert!(compiled.contains("first"));
    Ok(())
}

#[test]
fn different_source_path_recompiles() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let source_a = tmp.path().join("a");
    let source_b = tmp.path().join("b");
    let output = tmp.path().join("out");
    write_page(&source_a, "from a")?;
    write_page(&source_b, "from b")?;

    assert_eq!(
        ensure_compiled(&source_a, &output, &resolver)?,
        CompileOutcome::Compiled(ONE_PAGE)
    );
    let sentinel = Sentinel::in_output(&output);
    assert!(!sentinel.is_current(&source_b)?);

    assert_eq!(
        ensure_compiled(&source_b, &output, &resolver)?,
        CompileOutcome::Compiled(ONE_PAGE)
    );
    assert!(fs::read_to_string(output.join("readme.html"))?.contains("from b"));
    assert!(sentinel.is_current(&source_b)?);
    Ok(())
}

#[test]
fn valid_output_survives_source_removal() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let manual = DocLayout::new(tmp.path()).manual("en-us", "53");
    write_page(&manual.source, "kept")?;
    ensure_compiled(&manual.source, &manual.output, &resolver)?;
    let recorded = fs::read_to_string(manual.sentinel())?;

    fs::remove_dir_all(&manual.source)?;

    // The sentinel holds the canonical path, which the removed directory can
    // no longer resolve to on every platform; either outcome keeps the output.
    let outcome = ensure_compiled(&manual.source, &manual.output, &resolver)?;
    assert!(matches!(
        outcome,
        CompileOutcome::UpToDate | CompileOutcome::SourceMissing
    ));
    assert_eq!(fs::read_to_string(manual.sentinel())?, recorded);
    assert!(manual.compiled_file("readme.html").exists());
    Ok(())
}

#[test]
fn missing_source_leaves_no_output() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let manual = DocLayout::new(tmp.path()).manual("en-us", "99");

    let outcome = ensure_compiled(&manual.source, &manual.output, &resolver)?;

    assert_eq!(outcome, CompileOutcome::SourceMissing);
    assert!(!manual.output.exists());
    Ok(())
}
