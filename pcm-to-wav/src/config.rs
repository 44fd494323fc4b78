//! Compiled format defaults
//!
//! The tool takes no configuration file and no flags. Everything that would
//! otherwise be configurable lives here as typed defaults, so the fixed
//! container layout is stated once and shared by enumeration, writing and
//! logging.

use std::ffi::OsStr;

/// Fragment sample rate (Hz)
pub const DEFAULT_SAMPLE_RATE: u32 = 24000;

/// Fragment channel count (mono)
pub const DEFAULT_CHANNELS: u16 = 1;

/// Fragment sample depth
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Filename extension (without the dot) that marks a fragment
pub const FRAGMENT_EXTENSION: &str = "pcm";

/// Audio layout declared in the container header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Bytes per single-channel sample
    pub fn sample_width(&self) -> usize {
        (self.bits_per_sample / 8) as usize
    }

    /// Bytes per frame (one sample for every channel)
    pub fn frame_width(&self) -> usize {
        self.sample_width() * self.channels as usize
    }

    pub fn bytes_per_second(&self) -> u64 {
        self.sample_rate as u64 * self.frame_width() as u64
    }

    /// Header spec handed to the WAV encoder
    pub fn to_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: hound::SampleFormat::Int,
        }
    }
}

impl Default for WavFormat {
    fn default() -> Self {
        Self {
            channels: DEFAULT_CHANNELS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }
}

/// Converter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Layout written to the container header
    pub format: WavFormat,

    /// Extension a directory entry must carry to count as a fragment
    pub fragment_extension: String,
}

impl ConverterConfig {
    /// True when `name` ends in `.<fragment_extension>`
    ///
    /// Suffix match on the full name, case-sensitive: `a.PCM` and `pcm` are not
    /// fragments, `.pcm` is. Compared on the raw name bytes, so names that are
    /// not valid UTF-8 still match.
    pub fn is_fragment_name(&self, name: impl AsRef<OsStr>) -> bool {
        name.as_ref()
            .as_encoded_bytes()
            .strip_suffix(self.fragment_extension.as_bytes())
            .is_some_and(|stem| stem.ends_with(b"."))
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            format: WavFormat::default(),
            fragment_extension: FRAGMENT_EXTENSION.to_string(),
        }
    }
}
