use assert_cmd::Command;
use luadoc_cli::PanelEvent;
use luadoc_protocol::HostMessage;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn seed_manual(root: &Path) -> anyhow::Result<()> {
    let source = root.join("doc/en-us/54");
    fs::create_dir_all(&source)?;
    fs::write(
        source.join("readme.html"),
        "<html><head><title>Lua 5.4 readme</title></head><body></body></html>",
    )?;
    fs::write(
        source.join("manual.html"),
        "<html><head><title>Lua 5.4 Reference Manual</title></head><body></body></html>",
    )?;
    Ok(())
}

fn run_session(root: &Path, args: &[&str], stdin: &str) -> anyhow::Result<Vec<PanelEvent>> {
    let mut cmd = Command::cargo_bin("luadoc")?;
    let assert = cmd
        .arg("--root")
        .arg(root)
        .arg("open")
        .args(args)
        .env("RUST_LOG", "warn")
        .write_stdin(stdin)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    stdout
        .lines()
        .map(|line| Ok(serde_json::from_str(line)?))
        .collect()
}

/// Drops the page bodies so assertions stay readable.
fn without_html(events: Vec<PanelEvent>) -> Vec<PanelEvent> {
    events
        .into_iter()
        .map(|event| match event {
            PanelEvent::Html { .. } => PanelEvent::Html {
                html: String::new(),
            },
            other => other,
        })
        .collect()
}

#[test]
fn default_location_then_link_then_close() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    seed_manual(tmp.path())?;

    let events = run_session(
        tmp.path(),
        &[],
        concat!(
            r#"{"command":"goto","uri":"manual.html#pdf-print"}"#,
            "\n",
            r#"{"command":"close"}"#,
            "\n",
        ),
    )?;

    assert_eq!(
        without_html(events),
        vec![
            PanelEvent::Created {
                view_type: "lua-doc".to_string()
            },
            PanelEvent::Title {
                title: "Lua 5.4 readme".to_string()
            },
            PanelEvent::Html {
                html: String::new()
            },
            PanelEvent::Title {
                title: "Lua 5.4 Reference Manual".to_string()
            },
            PanelEvent::Html {
                html: String::new()
            },
            PanelEvent::PostMessage {
                message: HostMessage::Goto {
                    anchor: "pdf-print".to_string()
                }
            },
            PanelEvent::Disposed,
        ]
    );
    Ok(())
}

#[test]
fn reopening_same_page_only_reveals_and_scrolls() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    seed_manual(tmp.path())?;

    let events = run_session(
        tmp.path(),
        &["en-us/54/manual.html"],
        concat!(
            r#"{"command":"open","location":"en-us/54/manual.html#6.4"}"#,
            "\n",
        ),
    )?;

    assert_eq!(
        without_html(events)[3..].to_vec(),
        vec![
            PanelEvent::Revealed,
            PanelEvent::PostMessage {
                message: HostMessage::Goto {
                    anchor: "6.4".to_string()
                }
            },
        ]
    );
    Ok(())
}

#[test]
fn missing_manual_shows_error_page() -> anyhow::Result<()> {
    let tmp = tempdir()?;

    let events = run_session(tmp.path(), &["en-us/52/readme.html"], "")?;

    assert_eq!(events.len(), 3);
    assert_eq!(
        events[1],
        PanelEvent::Title {
            title: "Error".to_string()
        }
    );
    match &events[2] {
        PanelEvent::Html { html } => assert!(html.contains("Not Found doc/en-us/52/")),
        other => panic!("expected html event, got {other:?}"),
    }
    Ok(())
}

#[test]
fn unreadable_input_is_skipped() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    seed_manual(tmp.path())?;

    let events = run_session(tmp.path(), &[], "not json\n\n{\"command\":\"close\"}\n")?;

    assert_eq!(events.last(), Some(&PanelEvent::Disposed));
    Ok(())
}
