use crate::css::strip_color_lines;
use crate::error::CompilerError;
use crate::error::Result;
use crate::error::io_at;
use crate::html::inject_navigation_script;
use crate::html::rewrite_asset_references;
use crate::sentinel::Sentinel;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::info;
use tracing::warn;
use walkdir::WalkDir;

/// Maps a compiled asset on disk to the URI the viewer loads it from.
pub trait AssetUriResolver {
    fn asset_uri(&self, path: &Path) -> String;
}

impl<F> AssetUriResolver for F
where
    F: Fn(&Path) -> String,
{
    fn asset_uri(&self, path: &Path) -> String {
        self(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Html,
    Css,
    Other,
}

impl FileKind {
    fn of(name: &str) -> Self {
        match Path::new(name).extension().and_then(|ext| ext.to_str()) {
            Some("html") => FileKind::Html,
            Some("css") => FileKind::Css,
            _ => FileKind::Other,
        }
    }
}

#[derive(Debug, Clone)]
struct SourceFile {
    name: String,
    path: PathBuf,
    kind: FileKind,
}

/// Counts of files written by one compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileReport {
    pub html_files: usize,
    pub css_files: usize,
    pub copied_files: usize,
}

impl CompileReport {
    pub fn total(&self) -> usize {
        self.html_files + self.css_files + self.copied_files
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The sentinel already names this source directory.
    UpToDate,
    Compiled(CompileReport),
    /// Stale output and no source directory to rebuild it from.
    SourceMissing,
}

/// Compiles `source_dir` into `output_dir` unless the sentinel says the
/// output already came from this source directory.
pub fn ensure_compiled(
    source_dir: &Path,
    output_dir: &Path,
    resolver: &dyn AssetUriResolver,
) -> Result<CompileOutcome> {
    let sentinel = Sentinel::in_output(output_dir);
    if sentinel.is_current(source_dir)? {
        debug!("{} is up to date", output_dir.display());
        return Ok(CompileOutcome::UpToDate);
    }
    if !source_dir.is_dir() {
        warn!("no documentation sources at {}", source_dir.display());
        return Ok(CompileOutcome::SourceMissing);
    }
    let report = compile(source_dir, output_dir, resolver)?;
    sentinel.record(source_dir)?;
    Ok(CompileOutcome::Compiled(report))
}

/// Produces the display-ready mirror of the top-level files in `source_dir`.
///
/// HTML pages get the navigation script and asset URIs, stylesheets lose
/// their color lines, everything else is copied verbatim. The sentinel is
/// left alone.
pub fn compile(
    source_dir: &Path,
    output_dir: &Path,
    resolver: &dyn AssetUriResolver,
) -> Result<CompileReport> {
    fs::create_dir_all(output_dir).map_err(io_at(output_dir))?;
    let files = list_source_files(source_dir)?;
    let assets: Vec<(String, String)> = files
        .iter()
        .filter(|file| file.kind != FileKind::Html)
        .map(|file| {
            let uri = resolver.asset_uri(&output_dir.join(&file.name));
            (file.name.clone(), uri)
        })
        .collect();

    let mut report = CompileReport::default();
    for file in &files {
        let target = output_dir.join(&file.name);
        match file.kind {
            FileKind::Html => {
                let html = read_text(&file.path)?;
                let html = rewrite_asset_references(inject_navigation_script(&html), &assets);
                fs::write(&target, html).map_err(io_at(&target))?;
                report.html_files += 1;
            }
            FileKind::Css => {
                let css = read_text(&file.path)?;
                fs::write(&target, strip_color_lines(&css)).map_err(io_at(&target))?;
                report.css_files += 1;
            }
            FileKind::Other => {
                fs::copy(&file.path, &target).map_err(io_at(&target))?;
                report.copied_files += 1;
            }
        }
    }

    info!(
        "compiled {} into {} ({} html, {} css, {} copied)",
        source_dir.display(),
        output_dir.display(),
        report.html_files,
        report.css_files,
        report.copied_files
    );
    Ok(report)
}

/// Pages and stylesheets are decoded lossily; older manuals carry Latin-1
/// bytes.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(io_at(path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn list_source_files(source_dir: &Path) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|source| CompilerError::Walk {
            path: source_dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            warn!(
                "skipping {}: file name is not valid UTF-8",
                entry.path().display()
            );
            continue;
        };
        files.push(SourceFile {
            name: name.to_string(),
            path: entry.path().to_path_buf(),
            kind: FileKind::of(name),
        });
    }
    Ok(files)
}
