use luadoc_compiler::CompileOutcome;
use luadoc_compiler::CompileReport;
use luadoc_compiler::NAVIGATION_SCRIPT;
use luadoc_compiler::SENTINEL_FILE_NAME;
use luadoc_compiler::compile;
use luadoc_compiler::ensure_compiled;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

const README: &str = r#"<HTML>
<HEAD>
<TITLE>Lua 5.4 readme</TITLE>
<LINK REL="stylesheet" TYPE="text/css" HREF="lua.css">
</HEAD>
<BODY>
<H1><IMG SRC="logo.gif" ALT="Lua"> Welcome to Lua 5.4</H1>
<P>See the <A HREF="manual.html#6.4">manual</A>. The logo.gif file is the logo.
</BODY>
</HTML>
"#;

const LUA_CSS: &str = "body {\n\tcolor: #000000 ;\n\tbackground-color: #FFFFFF ;\n\tmargin: 0 ;\n}\n";

fn resolver(path: &Path) -> String {
    format!("https://viewer.invalid/{}", path.display())
}

fn seed_source(root: &Path) -> anyhow::Result<PathBuf> {
    let src = root.join("doc/en-us/54");
    fs::create_dir_all(&src)?;
    fs::write(src.join("readme.html"), README)?;
    fs::write(src.join("lua.css"), LUA_CSS)?;
    fs::write(src.join("logo.gif"), b"GIF89a\x01\x00")?;
    Ok(src)
}

fn snapshot(dir: &Path) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == SENTINEL_FILE_NAME {
            continue;
        }
        files.push((name, fs::read(entry.path())?));
    }
    files.sort();
    Ok(files)
}

#[test]
fn compiles_every_file_kind() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let src = seed_source(tmp.path())?;
    let dst = tmp.path().join("out/en-us/54");

    let report = compile(&src, &dst, &resolver)?;

    assert_eq!(
        report,
        CompileReport {
            html_files: 1,
            css_files: 1,
            copied_files: 1,
        }
    );
    assert_eq!(report.total(), 3);
    assert_eq!(fs::read(dst.join("logo.gif"))?, b"GIF89a\x01\x00".to_vec());
    assert_eq!(
        fs::read_to_string(dst.join("lua.css"))?,
        "body {\n\tmargin: 0 ;\n}\n"
    );
    assert!(!dst.join(SENTINEL_FILE_NAME).exists());
    Ok(())
}

#[test]
fn html_references_point_at_compiled_assets() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let src = seed_source(tmp.path())?;
    let dst = tmp.path().join("out/en-us/54");

    compile(&src, &dst, &resolver)?;
    let html = fs::read_to_string(dst.join("readme.html"))?;

    let logo_uri = resolver(&dst.join("logo.gif"));
    let css_uri = resolver(&dst.join("lua.css"));
    assert!(html.contains(&format!(r#"SRC="{logo_uri}""#)));
    assert!(html.contains(&format!(r#"HREF="{css_uri}""#)));
    assert!(!html.contains(r#""logo.gif""#));
    assert!(!html.contains(r#""lua.css""#));
    // Substitution is blind, so prose mentions change as well.
    assert!(html.contains(&format!("The {logo_uri} file")));
    // Links to other documents stay relative for the navigation script.
    assert!(html.contains(r#"HREF="manual.html#6.4""#));
    assert!(html.contains(&format!("{NAVIGATION_SCRIPT}</BODY>")));
    Ok(())
}

#[test]
fn recompiling_unchanged_input_is_byte_identical() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let src = seed_source(tmp.path())?;
    let dst = tmp.path().join("out/en-us/54");

    compile(&src, &dst, &resolver)?;
    let first = snapshot(&dst)?;
    compile(&src, &dst, &resolver)?;
    let second = snapshot(&dst)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn latin1_pages_compile_lossily() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let src = seed_source(tmp.path())?;
    let dst = tmp.path().join("out/en-us/54");
    fs::write(
        src.join("manual.html"),
        b"<html><head><title>Lua 5.1</title></head><body>Copyright \xA9 PUC-Rio <img src=\"logo.gif\"></body></html>",
    )?;
    fs::write(src.join("manual.css"), b"h1 { font-family: \xE9; }\ncolor: red;\n")?;

    let outcome = ensure_compiled(&src, &dst, &resolver)?;

    assert!(matches!(outcome, CompileOutcome::Compiled(report) if report.html_files == 2));
    let html = fs::read_to_string(dst.join("manual.html"))?;
    assert!(html.contains("Copyright \u{FFFD} PUC-Rio"));
    assert!(html.contains(&resolver(&dst.join("logo.gif"))));
    assert!(html.contains(NAVIGATION_SCRIPT));
    assert_eq!(
        fs::read_to_string(dst.join("manual.css"))?,
        "h1 { font-family: \u{FFFD}; }\n"
    );
    assert!(dst.join(SENTINEL_FILE_NAME).is_file());
    Ok(())
}
