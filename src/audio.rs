//! Linear-PCM audio held in memory, and clips cut from it.
//!
//! Only integer PCM WAV is supported; that is what the corpus ships.
//! Samples are kept interleaved exactly as decoded, so a clip written back
//! out has the source's channel count, sample rate and bit depth.

use std::io::{Cursor, Read};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::debug;

use crate::alignment::DEFAULT_TOLERANCE;
use crate::error::{CorpusError, Result};

/// A fully decoded waveform.
#[derive(Debug, Clone)]
pub struct Audio {
    spec: WavSpec,
    samples: Vec<i32>,
}

impl Audio {
    /// Decode a WAV file held in memory.
    pub fn from_wav_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Decode a WAV stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = WavReader::new(reader)?;
        let spec = reader.spec();
        if spec.sample_format != SampleFormat::Int {
            return Err(CorpusError::Audio(hound::Error::Unsupported));
        }

        let samples = reader.into_samples::<i32>().collect::<Result<Vec<_>, _>>()?;
        debug!(
            sample_rate = spec.sample_rate,
            channels = spec.channels,
            samples = samples.len(),
            "decoded audio"
        );
        Ok(Self { spec, samples })
    }

    /// Build audio from interleaved samples.
    pub fn from_samples(spec: WavSpec, samples: Vec<i32>) -> Self {
        Self { spec, samples }
    }

    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    pub fn sample_rate(&self) -> u32 {
        self.spec.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.spec.channels
    }

    /// Number of frames (one sample per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.spec.channels.max(1))
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.frames() as f64 / f64::from(self.spec.sample_rate)
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Cut `[begin, end)` seconds, rounding both offsets to the nearest frame.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `end <= begin` or the range leaves `[0, duration]`.
    pub fn clip(&self, begin: f64, end: f64) -> Result<AudioClip> {
        if !begin.is_finite() || !end.is_finite() {
            return Err(CorpusError::invalid_range(begin, end, "bounds must be finite"));
        }
        if end <= begin {
            return Err(CorpusError::invalid_range(begin, end, "end must be after begin"));
        }
        let duration = self.duration();
        if begin < 0.0 || end > duration + DEFAULT_TOLERANCE {
            return Err(CorpusError::invalid_range(
                begin,
                end,
                format!("outside audio span [0, {:.6}]", duration),
            ));
        }

        let rate = f64::from(self.spec.sample_rate);
        let total = self.frames();
        let first = ((begin * rate).round() as usize).min(total);
        let count = ((end - begin) * rate).round() as usize;
        let last = first.saturating_add(count).min(total);

        let channels = usize::from(self.spec.channels.max(1));
        let samples = self.samples[first * channels..last * channels].to_vec();

        Ok(AudioClip {
            spec: self.spec,
            first_frame: first,
            samples,
        })
    }
}

/// A self-contained excerpt of a track's audio.
#[derive(Debug, Clone)]
pub struct AudioClip {
    spec: WavSpec,
    first_frame: usize,
    samples: Vec<i32>,
}

impl AudioClip {
    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    /// Frame offset of the clip within the source audio.
    pub fn first_frame(&self) -> usize {
        self.first_frame
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.spec.channels.max(1))
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Write the clip as a WAV file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = WavWriter::create(path, self.spec)?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }

    /// Encode the clip as WAV bytes.
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut buffer, self.spec)?;
            for &sample in &self.samples {
                writer.write_sample(sample)?;
            }
            writer.finalize()?;
        }
        Ok(buffer.into_inner())
    }

    /// Convert into standalone audio.
    pub fn into_audio(self) -> Audio {
        Audio::from_samples(self.spec, self.samples)
    }
}
