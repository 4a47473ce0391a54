use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;

fn write_sources(dir: &Path) {
    fs::write(dir.join("10a.cin"), "A 人\n").unwrap();
    fs::write(dir.join("20b.cin"), "A 人\nB 手\nC 七七\n").unwrap();
    fs::write(dir.join("word_freq.txt"), "人 1 - 1 500\n").unwrap();
}

#[test]
fn defaults_resolve_in_working_directory() {
    let exe = env!("CARGO_BIN_EXE_dayi");
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let output = Command::new(exe)
        .current_dir(dir.path())
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Codes ignored:"));
    assert!(stdout.contains("C = \"七七\" (len 2)"));
    assert!(stdout.contains("GCIN file output.cin"));

    assert!(dir.path().join("scratch.db").exists());
    let text = fs::read_to_string(dir.path().join("output.cin")).unwrap();
    assert!(text.starts_with("%gen_inp\n"));
    assert!(text.contains("\nA     人\nB     手\n"));
}

#[test]
fn osx_flag_writes_utf16() {
    let exe = env!("CARGO_BIN_EXE_dayi");
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let out = dir.path().join("dayi.cin");

    let status = Command::new(exe)
        .current_dir(dir.path())
        .args(["--osx", "-o", out.to_str().unwrap()])
        .status()
        .expect("run failed");
    assert!(status.success());

    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..4], &[0x00, b'M', 0x00, b'E']);
}

#[test]
fn json_summary_on_stdout() {
    let exe = env!("CARGO_BIN_EXE_dayi");
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let output = Command::new(exe)
        .current_dir(dir.path())
        .args(["--json", "--fresh", "--codes", "dayi4"])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["codes"], "dayi4");
    assert_eq!(json["format"], "gcin");
    assert_eq!(json["load"]["files"].as_array().unwrap().len(), 2);
    assert_eq!(json["load"]["rejected"][0]["field"], "七七");
    assert!(json["pairs"].as_u64().unwrap() > 2);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Wrote"));
}

#[test]
fn explicit_source_dir() {
    let exe = env!("CARGO_BIN_EXE_dayi");
    let dir = tempfile::tempdir().unwrap();
    let tables = dir.path().join("tables");
    fs::create_dir(&tables).unwrap();
    write_sources(&tables);

    let status = Command::new(exe)
        .current_dir(dir.path())
        .args(["-s", "tables", "-f", "tables/word_freq.txt"])
        .status()
        .expect("run failed");
    assert!(status.success());
    assert!(dir.path().join("output.cin").exists());
}

#[test]
fn short_codes_csv() {
    let exe = env!("CARGO_BIN_EXE_short_codes");
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1.cin"), "ABCD 人\nA 人\n").unwrap();

    let output = Command::new(exe)
        .current_dir(dir.path())
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("character,dayi4,dayi3,dayi2\n"));
    assert!(stdout.contains("人,ABCD,ABD,AD\n"));
}
