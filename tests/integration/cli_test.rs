//! CLI tests
//!
//! Runs the actual buckeye binary against a fixture corpus. `HOME` points at a
//! temporary directory so the user's real configuration is never read.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{sample_at, setup_corpus, setup_home, SAMPLE_RATE};

fn buckeye(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("buckeye").expect("binary should build");
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("BUCKEYE_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute buckeye");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn speakers_lists_directory() {
    let corpus = setup_corpus();
    let home = TempDir::new().unwrap();

    let out = stdout_of(buckeye(&home).arg("speakers").arg(corpus.path()));
    insta::assert_snapshot!(out, @r"
    s01  f  y  f  2 tracks
    s02  m  y  m  1 track
    ");
}

#[test]
fn speakers_defaults_to_configured_directory() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());

    buckeye(&home)
        .arg("speakers")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("s01"));
}

#[test]
fn words_shows_aligned_phones() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());

    let out = stdout_of(buckeye(&home).args(["words", "s01", "s0101a"]));
    insta::assert_snapshot!(out, @r"
    0.000-0.150: <SIL>  [SIL]
    0.150-0.440: okay  [k ey]
    0.440-0.900: um  [ah m] !
    0.900-1.000: <SIL>  [SIL]
    1.000-1.300: yes  [y eh s]
    ");
}

#[test]
fn words_json_output() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());
    let speaker = corpus.path().join("s01.zip");

    let out = stdout_of(
        buckeye(&home)
            .arg("words")
            .arg(&speaker)
            .arg("s0101a")
            .arg("--json"),
    );
    let words: serde_json::Value = serde_json::from_str(&out).unwrap();
    let words = words.as_array().unwrap();
    assert_eq!(words.len(), 5);
    assert_eq!(words[1]["label"], "okay");
    assert_eq!(words[1]["kind"], "lexical");
    assert_eq!(words[1]["phones"], serde_json::json!(["k", "ey"]));
    assert_eq!(words[2]["misaligned"], true);
    assert_eq!(words[4]["pos"], "<missing>");
}

#[test]
fn logs_in_range() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());

    let out = stdout_of(buckeye(&home).args(["logs", "s01", "s0101a", "0.5", "1.0"]));
    insta::assert_snapshot!(out, @r"
    0.440-0.900: <VOICE=creaky>
    0.900-1.300: <VOICE=modal>
    ");
}

#[test]
fn logs_rejects_reversed_range() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());

    buckeye(&home)
        .args(["logs", "s01", "s0101a", "1.0", "0.5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid time range"));
}

#[test]
fn utterances_from_unpacked_speaker() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());

    let out = stdout_of(buckeye(&home).args(["utterances", "s02", "s0201a"]));
    insta::assert_snapshot!(out, @r"
    0.200-0.500: so
    1.400-1.700: right
    ");

    let kept = stdout_of(buckeye(&home).args([
        "utterances",
        "s02",
        "s0201a",
        "--sep",
        "1.0",
        "--keep-pauses",
    ]));
    insta::assert_snapshot!(kept, @"0.000-1.900: {B_TRANS} so <SIL> right {E_TRANS}");
}

#[test]
fn clip_writes_wav() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("clip.wav");

    buckeye(&home)
        .args(["clip", "s01", "s0101a", "0.5", "1.0"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4000 frames (8000 Hz, 1 ch)"));

    let reader = hound::WavReader::open(&out_path).unwrap();
    assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
    let samples: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples.len(), 4000);
    assert_eq!(i32::from(samples[0]), sample_at(4000));
}

#[test]
fn unknown_speaker_fails() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());

    buckeye(&home)
        .args(["words", "s09", "s0901a"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Speaker 's09' not found"));
}

#[test]
fn unknown_track_fails() {
    let corpus = setup_corpus();
    let home = setup_home(corpus.path());

    buckeye(&home)
        .args(["words", "s01", "s0102a"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Track 's0102a' not found"));
}

#[test]
fn usage_error_exits_with_two() {
    let home = TempDir::new().unwrap();
    buckeye(&home).args(["logs", "s01"]).assert().code(2);
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    buckeye(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[corpus]"))
        .stdout(predicate::str::contains("directory = \"~/buckeye\""))
        .stdout(predicate::str::contains("separation = 0.5"));
}

#[test]
fn completions_are_generated() {
    let home = TempDir::new().unwrap();
    buckeye(&home)
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buckeye"));
}
