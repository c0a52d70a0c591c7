use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_svdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn read(path: impl AsRef<std::path::Path>) -> String {
    fs::read_to_string(path).unwrap()
}

// -- stdout mode --

#[test]
fn stdout_mode_renders_page() {
    let expected = read(fixture_path("fifo.expected.md"));

    let assert = cmd()
        .arg("--stdout")
        .arg(fixture_path("rtl/fifo.sv"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn stdout_mode_undocumented_unit() {
    cmd()
        .arg("--stdout")
        .arg(fixture_path("rtl/periph/gpio.sv"))
        .assert()
        .success()
        .stdout("# Module `gpio`\n\n_No module documentation._\n");
}

#[test]
fn stdout_mode_slovak_headings() {
    cmd()
        .args(["--stdout", "--lang", "sk"])
        .arg(fixture_path("rtl/fifo.sv"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Modul `fifo`\n\n## Popis\n"))
        .stdout(predicate::str::contains("**Poznámka:** Single clock domain only."))
        .stdout(predicate::str::contains("## Vstupy (input)"))
        .stdout(predicate::str::contains("## Príklady použitia"));
}

// -- tree mode --

#[test]
fn tree_mode_writes_pages_and_index() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(fixture_path("rtl"))
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--source-url", "https://example.com/src"])
        .assert()
        .success();

    let fifo = read(dir.path().join("modules/fifo.md"));
    assert_eq!(fifo, read(fixture_path("fifo.expected.md")));

    let gpio = read(dir.path().join("modules/gpio.md"));
    assert_eq!(gpio, "# Module `gpio`\n\n_No module documentation._\n");

    let index = read(dir.path().join("index.md"));
    let expected = "\
# Module documentation

## Modules

| Module | Description | Source file |
|--------------|--------|----------------|
| [fifo](modules/fifo.md) | Synchronous FIFO with configurable depth. | [fifo.sv](https://example.com/src/fifo.sv) |
| [gpio](modules/gpio.md) | - | [gpio.sv](https://example.com/src/periph/gpio.sv) |
";
    assert_eq!(index, expected);
}

#[test]
fn index_links_relative_to_output() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let out = dir.path().join("docs_md");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("top.sv"), "/** @brief Top level */\nmodule top;\nendmodule\n").unwrap();

    cmd()
        .arg(src.to_str().unwrap())
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let index = read(out.join("index.md"));
    assert!(
        index.contains("| [top](modules/top.md) | Top level | [top.sv](../src/top.sv) |"),
        "unexpected index: {}",
        index
    );
}

#[test]
fn index_truncates_long_description() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    let brief = "a".repeat(130);
    fs::write(
        src.join("wide.sv"),
        format!("/**\n * @brief {}\n */\nmodule wide;\nendmodule\n", brief),
    )
    .unwrap();

    cmd()
        .arg(src.to_str().unwrap())
        .args(["-o", dir.path().join("out").to_str().unwrap()])
        .assert()
        .success();

    let index = read(dir.path().join("out/index.md"));
    let shortened = format!("| {}... |", "a".repeat(117));
    assert!(index.contains(&shortened), "unexpected index: {}", index);
    assert!(!index.contains(&"a".repeat(118)));
}

#[test]
fn no_index_flag() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(fixture_path("rtl"))
        .args(["-o", dir.path().to_str().unwrap()])
        .arg("--no-index")
        .assert()
        .success();

    assert!(dir.path().join("modules/fifo.md").exists());
    assert!(!dir.path().join("index.md").exists());
}

#[test]
fn custom_declaration_keyword() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("bus.sv"),
        "/** @brief AXI-lite bus */\ninterface axi_lite_if;\nendinterface\n",
    )
    .unwrap();

    cmd()
        .arg("--stdout")
        .arg(src.join("bus.sv").to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Module `unknown`"));

    cmd()
        .arg("--stdout")
        .args(["-k", "module", "-k", "interface"])
        .arg(src.join("bus.sv").to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Module `axi_lite_if`"));
}

// -- formats and errors --

#[test]
fn json_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(fixture_path("rtl"))
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .assert()
        .success();

    let output = read(dir.path().join("modules/fifo.json"));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["entity_name"], "fifo");
    assert_eq!(value["parameters"][1]["name"], "DEPTH");
    assert_eq!(value["inputs"][2]["description"], "");

    let index = read(dir.path().join("index.md"));
    assert!(index.contains("[fifo](modules/fifo.json)"));
}

#[test]
fn invalid_format_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(fixture_path("rtl"))
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn missing_root_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().join("nope").to_str().unwrap())
        .args(["-o", dir.path().join("out").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source root not found"));
}

// -- unreadable and colliding sources --

#[test]
fn non_utf8_source_is_skipped() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let out = dir.path().join("docs_md");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("bad.sv"), b"\xff\xfe/** @brief \xc3 */").unwrap();
    fs::write(src.join("good.sv"), "/** @brief Good unit */\nmodule good;\nendmodule\n").unwrap();

    cmd()
        .arg(src.to_str().unwrap())
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));

    assert!(out.join("modules/good.md").exists());
    assert!(!out.join("modules/bad.md").exists());
    let index = read(out.join("index.md"));
    assert!(index.contains("[good](modules/good.md) | Good unit |"));
    assert!(!index.contains("[bad]"));
}

#[test]
fn same_stem_later_source_wins() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let out = dir.path().join("docs_md");
    fs::create_dir_all(src.join("a")).unwrap();
    fs::create_dir_all(src.join("b")).unwrap();
    fs::write(src.join("a/x.sv"), "/** @brief From a */\nmodule x_a;\nendmodule\n").unwrap();
    fs::write(src.join("b/x.sv"), "/** @brief From b */\nmodule x_b;\nendmodule\n").unwrap();

    cmd()
        .arg(src.to_str().unwrap())
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("overwrites"));

    let page = read(out.join("modules/x.md"));
    assert!(page.starts_with("# Module `x_b`"), "unexpected page: {}", page);

    let index = read(out.join("index.md"));
    assert_eq!(index.matches("[x](modules/x.md)").count(), 1);
    assert!(
        index.contains("| [x](modules/x.md) | From b | [x.sv](../src/b/x.sv) |"),
        "unexpected index: {}",
        index
    );
}
