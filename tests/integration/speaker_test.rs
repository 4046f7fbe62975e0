//! Speaker loading from archives and unpacked directories

use std::fs;

use buckeye::{AgeGroup, CorpusError, LoadOptions, Sex, Speaker, ZipContainer};

use crate::helpers::{setup_corpus, speaker_archive, track_archive, zip_bytes};

#[test]
fn archive_speaker_uses_roster_metadata() {
    let corpus = setup_corpus();
    let speaker = Speaker::open(corpus.path().join("s01.zip"), &LoadOptions::default()).unwrap();

    assert_eq!(speaker.id(), "s01");
    assert_eq!(speaker.sex(), Sex::Female);
    assert_eq!(speaker.age(), AgeGroup::Younger);
    assert_eq!(speaker.interviewer(), Sex::Female);
    assert_eq!(speaker.to_string(), "s01 (f, y)");
}

#[test]
fn tracks_follow_archive_order() {
    let bytes = speaker_archive("s01", &["s0101b", "s0101a"], None);
    let mut container = ZipContainer::from_bytes("s01", bytes).unwrap();
    let speaker = Speaker::from_container(&mut container, &LoadOptions::default()).unwrap();

    let names: Vec<&str> = speaker.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["s0101b", "s0101a"]);
    assert!(speaker.track("s0101a").is_some());
    assert!(speaker.track("s0102a").is_none());
}

#[test]
fn meta_member_overrides_roster() {
    let bytes = speaker_archive("s01", &["s0101a"], Some("s01 m o m\n"));
    let mut container = ZipContainer::from_bytes("s01", bytes).unwrap();
    let speaker = Speaker::from_container(&mut container, &LoadOptions::default()).unwrap();

    assert_eq!(speaker.sex(), Sex::Male);
    assert_eq!(speaker.age(), AgeGroup::Older);
    assert_eq!(speaker.tracks().len(), 1);
}

#[test]
fn malformed_meta_is_rejected() {
    let bytes = speaker_archive("s01", &["s0101a"], Some("s01 x\n"));
    let mut container = ZipContainer::from_bytes("s01", bytes).unwrap();
    let err = Speaker::from_container(&mut container, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, CorpusError::MalformedMetadata { .. }));
}

#[test]
fn unknown_speaker_without_meta_is_layout_error() {
    let bytes = zip_bytes(&[("s45/s4501a.zip".to_string(), track_archive("s0101a"))]);
    let mut container = ZipContainer::from_bytes("s45", bytes).unwrap();
    let err = Speaker::from_container(&mut container, &LoadOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::ContainerLayout { ref member, .. } if member == "s45.meta"
    ));
}

#[test]
fn unpacked_speaker_directory() {
    let corpus = setup_corpus();
    let speaker = Speaker::open(corpus.path().join("s02"), &LoadOptions::default()).unwrap();

    assert_eq!(speaker.id(), "s02");
    assert_eq!(speaker.sex(), Sex::Male);
    assert_eq!(speaker.age(), AgeGroup::Younger);
    let names: Vec<&str> = speaker.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["s0201a"]);
    assert_eq!(speaker.tracks()[0].words().len(), 5);
}

#[test]
fn broken_track_aborts_speaker() {
    let corpus = setup_corpus();
    let words = corpus.path().join("s02").join("s0201a").join("s0201a.words");
    fs::write(&words, "no header here\n").unwrap();

    let err = Speaker::open(corpus.path().join("s02"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, CorpusError::MissingHeader { .. }));
}

#[test]
fn audio_is_loaded_when_requested() {
    let corpus = setup_corpus();
    let options = LoadOptions::default().with_audio(true);
    let speaker = Speaker::open(corpus.path().join("s01.zip"), &options).unwrap();
    assert!(speaker.iter().all(|t| t.has_audio()));
}
