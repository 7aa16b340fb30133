use assert_cmd::Command;
use predicates::prelude::*;

const CATALOG: &str = r#"{
    "blueprints": [
        {"id": "walker.person", "attributes": [
            {"id": "speed", "type": "float", "is_modifiable": true}
        ]},
        {"id": "vehicle.car", "attributes": [
            {"id": "color", "type": "string", "is_modifiable": false}
        ]}
    ]
}"#;

/// A local port with nothing listening on it.
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// The binary with HOME pointed at `home` so no user config leaks in.
fn bpdocs(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bpdocs").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn unreachable_simulator_exits_zero_with_banner() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out = temp_dir.path().join("bp_library.md");

    bpdocs(temp_dir.path())
        .arg("--port")
        .arg(closed_port().to_string())
        .arg("--timeout-ms")
        .arg("500")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[ERROR] Can't establish connection with the simulator",
        ))
        .stdout(predicate::str::contains("Make sure the simulator is connected!"))
        .stdout(predicate::str::contains("Done!").not());

    assert!(!out.exists());
}

#[test]
fn snapshot_source_writes_document() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog, CATALOG).unwrap();
    let out = temp_dir.path().join("Docs").join("bp_library.md");

    bpdocs(temp_dir.path())
        .arg("--source")
        .arg(&catalog)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating API blueprint documentation..."))
        .stdout(predicate::str::contains("Done!"));

    let written = std::fs::read_to_string(&out).unwrap();
    let vehicle = written.find("\n### vehicle\n").unwrap();
    let walker = written.find("\n### walker\n").unwrap();
    assert!(vehicle < walker);
    assert!(written.contains("        - `color` (_string_)\n"));
    assert!(written.contains("        - `speed` (_float_) <sub>_- Modifiable_</sub>\n"));
}

#[test]
fn check_mode_fails_on_stale_and_passes_when_current() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog, CATALOG).unwrap();
    let out = temp_dir.path().join("bp_library.md");
    std::fs::write(&out, "stale").unwrap();

    bpdocs(temp_dir.path())
        .args(["--check", "--source"])
        .arg(&catalog)
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));

    bpdocs(temp_dir.path())
        .arg("--source")
        .arg(&catalog)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    bpdocs(temp_dir.path())
        .args(["--check", "--source"])
        .arg(&catalog)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date"));
}

#[test]
fn config_file_supplies_output_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog, CATALOG).unwrap();
    let out = temp_dir.path().join("configured.md");
    let config = temp_dir.path().join("bpdocs.toml");
    std::fs::write(
        &config,
        format!("[output]\npath = {:?}\n", out.to_string_lossy()),
    )
    .unwrap();

    bpdocs(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("--source")
        .arg(&catalog)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn missing_explicit_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    bpdocs(temp_dir.path())
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .assert()
        .failure();
}

#[test]
fn malformed_snapshot_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog, "not json").unwrap();

    bpdocs(temp_dir.path())
        .arg("--source")
        .arg(&catalog)
        .arg("--out")
        .arg(temp_dir.path().join("out.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid catalog snapshot"));
}
