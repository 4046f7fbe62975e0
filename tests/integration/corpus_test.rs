//! Corpus iteration over a directory of speakers

use std::fs;

use buckeye::{Corpus, LoadOptions};

use crate::helpers::{setup_corpus, speaker_archive};

#[test]
fn speakers_are_sorted_and_filtered() {
    let corpus_dir = setup_corpus();
    let corpus = Corpus::new(corpus_dir.path(), LoadOptions::default());

    assert_eq!(corpus.speaker_ids().unwrap(), ["s01", "s02"]);

    let speakers: Vec<_> = corpus
        .speakers()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let ids: Vec<&str> = speakers.iter().map(|s| s.id()).collect();
    assert_eq!(ids, ["s01", "s02"]);
    assert_eq!(speakers[0].tracks().len(), 2);
    assert_eq!(speakers[1].tracks().len(), 1);
}

#[test]
fn iteration_is_restartable_and_rescans() {
    let corpus_dir = setup_corpus();
    let corpus = Corpus::new(corpus_dir.path(), LoadOptions::default());

    assert_eq!(corpus.speakers().unwrap().len(), 2);
    assert_eq!(corpus.speakers().unwrap().len(), 2);

    fs::write(
        corpus_dir.path().join("s03.zip"),
        speaker_archive("s03", &[], None),
    )
    .unwrap();
    assert_eq!(corpus.speaker_ids().unwrap(), ["s01", "s02", "s03"]);
}

#[test]
fn speakers_load_lazily() {
    let corpus_dir = setup_corpus();
    // A broken archive sorted after s01 only fails when reached.
    fs::write(corpus_dir.path().join("s05.zip"), b"not a zip").unwrap();
    let corpus = Corpus::new(corpus_dir.path(), LoadOptions::default());

    let mut speakers = corpus.speakers().unwrap();
    assert_eq!(speakers.next().unwrap().unwrap().id(), "s01");
    assert_eq!(speakers.next().unwrap().unwrap().id(), "s02");
    assert!(speakers.next().unwrap().is_err());
    assert!(speakers.next().is_none());
}

#[test]
fn archive_wins_over_unpacked_copy() {
    let corpus_dir = setup_corpus();
    fs::create_dir(corpus_dir.path().join("s01")).unwrap();
    let corpus = Corpus::new(corpus_dir.path(), LoadOptions::default());

    assert_eq!(corpus.speaker_ids().unwrap(), ["s01", "s02"]);
    let paths = corpus.speaker_paths().unwrap();
    assert_eq!(paths[0], corpus_dir.path().join("s01.zip"));

    let speakers: Vec<_> = corpus
        .speakers()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(speakers.len(), 2);
    assert_eq!(speakers[0].tracks().len(), 2);
}

#[test]
fn speaker_lookup_by_id() {
    let corpus_dir = setup_corpus();
    let corpus = Corpus::new(corpus_dir.path(), LoadOptions::default());

    let speaker = corpus.speaker("s02").unwrap().unwrap();
    assert_eq!(speaker.tracks()[0].name(), "s0201a");
    assert!(corpus.speaker("s07").unwrap().is_none());
}

#[test]
fn missing_directory_is_an_error() {
    let corpus = Corpus::new("/nonexistent/buckeye", LoadOptions::default());
    assert!(corpus.speakers().is_err());
}
