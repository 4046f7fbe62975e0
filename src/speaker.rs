//! Corpus participants and their tracks.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::container::{self, is_track_member, Container};
use crate::error::{CorpusError, Result};
use crate::tier::decode_latin1;
use crate::track::{LoadOptions, Track};

/// Published speaker roster: `id sex age interviewer`.
///
/// Age is `y` (under 40) or `o` (40 or older).
const ROSTER: &str = "\
s01 f y f
s02 f o m
s03 m o m
s04 f y f
s05 f o f
s06 m y f
s07 f o f
s08 f y f
s09 f y f
s10 m o f
s11 m y m
s12 f y m
s13 m y f
s14 f o f
s15 m y m
s16 f o m
s17 f o m
s18 f o f
s19 m o f
s20 f o f
s21 f y m
s22 m o f
s23 m o m
s24 m o m
s25 f o m
s26 f y f
s27 f o m
s28 m y m
s29 m o f
s30 m y m
s31 f y m
s32 m y f
s33 m y f
s34 m y m
s35 m o m
s36 m o f
s37 f y m
s38 m o m
s39 f y m
s40 m y f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "f" => Some(Sex::Female),
            "m" => Some(Sex::Male),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Sex::Female => "f",
            Sex::Male => "m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Under 40.
    Younger,
    /// 40 or older.
    Older,
}

impl AgeGroup {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "y" => Some(AgeGroup::Younger),
            "o" => Some(AgeGroup::Older),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AgeGroup::Younger => "y",
            AgeGroup::Older => "o",
        }
    }
}

/// Metadata for one speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerInfo {
    pub id: String,
    pub sex: Sex,
    pub age: AgeGroup,
    pub interviewer: Sex,
}

impl SpeakerInfo {
    /// Parse a record of the form `s01 f y f`.
    pub fn parse(record: &str) -> Result<Self> {
        let bad = |reason: &str| CorpusError::MalformedMetadata {
            record: record.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = record.split_whitespace().collect();
        let [id, sex, age, interviewer] = fields.as_slice() else {
            return Err(bad("expected 4 fields: id sex age interviewer"));
        };

        Ok(Self {
            id: id.to_string(),
            sex: Sex::from_code(sex).ok_or_else(|| bad("sex must be 'f' or 'm'"))?,
            age: AgeGroup::from_code(age).ok_or_else(|| bad("age must be 'y' or 'o'"))?,
            interviewer: Sex::from_code(interviewer)
                .ok_or_else(|| bad("interviewer must be 'f' or 'm'"))?,
        })
    }

    /// Look up a speaker in the published roster.
    pub fn from_roster(id: &str) -> Option<Self> {
        ROSTER
            .lines()
            .find(|line| line.split_whitespace().next() == Some(id))
            .and_then(|line| Self::parse(line).ok())
    }
}

impl std::fmt::Display for SpeakerInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id,
            self.sex.code(),
            self.age.code(),
            self.interviewer.code()
        )
    }
}

/// One participant: metadata plus tracks in container order.
#[derive(Debug)]
pub struct Speaker {
    info: SpeakerInfo,
    tracks: Vec<Track>,
}

impl Speaker {
    pub fn new(info: SpeakerInfo, tracks: Vec<Track>) -> Self {
        Self { info, tracks }
    }

    /// Load a speaker from a `sNN.zip` archive or an unpacked `sNN` directory.
    pub fn open<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self> {
        let mut container = container::open(path)?;
        Self::from_container(container.as_mut(), options)
    }

    /// Load a speaker from an open container.
    ///
    /// Tracks are read in the container's enumeration order. Any track that
    /// fails to load aborts the whole speaker.
    pub fn from_container(container: &mut dyn Container, options: &LoadOptions) -> Result<Self> {
        let id = container.name().to_string();
        let members = container.members()?;
        let info = resolve_info(container, &id, &members)?;

        let mut tracks = Vec::new();
        for member in members.iter().filter(|m| is_track_member(m)) {
            let mut child = container.open_child(member)?;
            tracks.push(Track::from_container(child.as_mut(), options)?);
        }

        info!(speaker = %id, tracks = tracks.len(), "loaded speaker");
        Ok(Self { info, tracks })
    }

    pub fn info(&self) -> &SpeakerInfo {
        &self.info
    }

    pub fn id(&self) -> &str {
        &self.info.id
    }

    pub fn sex(&self) -> Sex {
        self.info.sex
    }

    pub fn age(&self) -> AgeGroup {
        self.info.age
    }

    pub fn interviewer(&self) -> Sex {
        self.info.interviewer
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Find a track by its code (e.g. `s0101a`).
    pub fn track(&self, name: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}

impl<'a> IntoIterator for &'a Speaker {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.info.id,
            self.info.sex.code(),
            self.info.age.code()
        )
    }
}

/// Metadata from an `<id>.meta` member, falling back to the roster.
fn resolve_info(container: &mut dyn Container, id: &str, members: &[String]) -> Result<SpeakerInfo> {
    let meta_name = format!("{}.meta", id);
    if let Some(member) = members
        .iter()
        .find(|m| container::member_stem(m) == id && m.ends_with(&meta_name))
    {
        let text = decode_latin1(&container.read(member)?);
        let record = text
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or_default();
        return SpeakerInfo::parse(record);
    }

    SpeakerInfo::from_roster(id).ok_or_else(|| CorpusError::ContainerLayout {
        container: id.to_string(),
        member: meta_name,
    })
}
