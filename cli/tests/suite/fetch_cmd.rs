use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn partial_failure_still_exits_zero() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/5.4/readme.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>readme</title>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/5.4/lua.css"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let tmp = tempdir()?;
    fs::write(
        tmp.path().join("luadoc.toml"),
        format!(
            r#"
assets = ["readme.html", "lua.css"]

[[sources]]
language = "en-us"
version = "54"
origin = "{}/5.4"
"#,
            server.uri()
        ),
    )?;

    let root = tmp.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || -> anyhow::Result<_> {
        Ok(Command::cargo_bin("luadoc")?
            .arg("--root")
            .arg(&root)
            .args(["fetch", "--only", "en-us/54", "--timeout", "10"])
            .env("RUST_LOG", "warn")
            .output()?)
    })
    .await??;

    output
        .assert()
        .success()
        .stdout(contains("Fetched 1 of 2 files"))
        .stdout(contains("1 failed"));
    let source = tmp.path().join("doc/en-us/54");
    assert_eq!(
        fs::read_to_string(source.join("readme.html"))?,
        "<title>readme</title>"
    );
    assert!(!source.join("lua.css").exists());
    Ok(())
}

#[test]
fn unknown_manual_is_a_setup_error() -> anyhow::Result<()> {
    let tmp = tempdir()?;

    Command::cargo_bin("luadoc")?
        .arg("--root")
        .arg(tmp.path())
        .args(["fetch", "--only", "fr-fr/54"])
        .assert()
        .failure()
        .stderr(contains("no source configured for fr-fr/54"));
    Ok(())
}
