//! Test helper utilities
//!
//! Fixture corpora are built on the fly inside a `TempDir`: track archives are
//! zipped from the tier files under `tests/fixtures`, wrapped into speaker
//! archives, and paired with a synthetic WAV.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Sample rate of the synthetic fixture audio.
pub const SAMPLE_RATE: u32 = 8_000;

/// Length of the synthetic fixture audio, in seconds.
pub const AUDIO_SECONDS: u32 = 2;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Sample value at frame `i` of the synthetic audio.
pub fn sample_at(i: usize) -> i32 {
    (i % 7919) as i32 - 3000
}

/// A mono 16-bit WAV of `AUDIO_SECONDS` seconds.
pub fn wav_bytes() -> Vec<u8> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut buffer, spec).expect("Failed to create WAV writer");
        for i in 0..(SAMPLE_RATE * AUDIO_SECONDS) as usize {
            writer
                .write_sample(sample_at(i) as i16)
                .expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
    }
    buffer.into_inner()
}

/// Zip `(name, bytes)` pairs in the given order.
pub fn zip_bytes(files: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in files {
        writer
            .start_file(name.as_str(), SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer.write_all(data).expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip").into_inner()
}

/// Member files of a fixture track: its four tier files plus audio.
pub fn track_files(track: &str) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<(String, Vec<u8>)> = ["words", "phones", "log", "txt"]
        .iter()
        .map(|ext| {
            let name = format!("{}.{}", track, ext);
            let contents = load_fixture(&name).into_bytes();
            (name, contents)
        })
        .collect();
    files.push((format!("{}.wav", track), wav_bytes()));
    files
}

/// A track archive (`s0101a.zip`) built from the fixtures.
pub fn track_archive(track: &str) -> Vec<u8> {
    zip_bytes(&track_files(track))
}

/// A speaker archive holding `<id>/<track>.zip` for each track, in order.
pub fn speaker_archive(id: &str, tracks: &[&str], meta: Option<&str>) -> Vec<u8> {
    let mut files: Vec<(String, Vec<u8>)> = tracks
        .iter()
        .map(|track| (format!("{}/{}.zip", id, track), track_archive(track)))
        .collect();
    if let Some(meta) = meta {
        files.push((format!("{}/{}.meta", id, id), meta.as_bytes().to_vec()));
    }
    zip_bytes(&files)
}

/// Write an unpacked speaker directory with one subdirectory per track.
pub fn write_speaker_dir(root: &Path, id: &str, tracks: &[(&str, &str)], meta: Option<&str>) {
    let speaker = root.join(id);
    for (name, fixture) in tracks {
        let dir = speaker.join(name);
        fs::create_dir_all(&dir).expect("Failed to create track dir");
        for (file, contents) in track_files(fixture) {
            let file = file.replacen(fixture, name, 1);
            fs::write(dir.join(file), contents).expect("Failed to write track file");
        }
    }
    fs::create_dir_all(&speaker).expect("Failed to create speaker dir");
    if let Some(meta) = meta {
        fs::write(speaker.join(format!("{}.meta", id)), meta).expect("Failed to write meta");
    }
}

/// A corpus directory with:
/// - `s01.zip`: tracks `s0101a` and `s0101b`, metadata from the roster
/// - `s02/`: unpacked, one track `s0201a` (a copy of `s0101b`), metadata from `s02.meta`
/// - unrelated files that must be ignored
pub fn setup_corpus() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();

    fs::write(
        root.join("s01.zip"),
        speaker_archive("s01", &["s0101a", "s0101b"], None),
    )
    .expect("Failed to write s01.zip");

    write_speaker_dir(root, "s02", &[("s0201a", "s0101b")], Some("s02 m y m\n"));

    fs::write(root.join("README.txt"), "not a speaker").expect("Failed to write README");
    fs::write(root.join("s50.zip"), b"").expect("Failed to write s50.zip");

    temp
}

/// Create a home directory whose config points at `corpus`.
pub fn setup_home(corpus: &Path) -> TempDir {
    let home = TempDir::new().expect("Failed to create home dir");
    let config_dir = home.path().join(".config").join("buckeye");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    fs::write(
        config_dir.join("config.toml"),
        format!("[corpus]\ndirectory = {:?}\n", corpus.to_string_lossy()),
    )
    .expect("Failed to write config");
    home
}
