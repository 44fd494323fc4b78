//! Test helpers for pcm-to-wav integration tests
//!
//! `FragmentDir` builds a scratch fragment directory plus an output location
//! next to it, and reads containers back for inspection.

#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Size of the canonical RIFF/WAVE PCM header hound writes for 16-bit mono
pub const WAV_HEADER_LEN: usize = 44;

pub struct FragmentDir {
    temp_dir: TempDir,
}

impl FragmentDir {
    /// Empty scratch area with an `input/` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("input")).expect("Failed to create input dir");
        Self { temp_dir }
    }

    pub fn input(&self) -> PathBuf {
        self.temp_dir.path().join("input")
    }

    /// Output path outside the input directory
    pub fn output(&self) -> PathBuf {
        self.temp_dir.path().join("out.wav")
    }

    /// Path inside the scratch area that does not exist
    pub fn nonexistent(&self) -> PathBuf {
        self.temp_dir.path().join("no_such_dir")
    }

    /// Write a file into the input directory
    pub fn file(&self, name: &str, data: &[u8]) -> &Self {
        fs::write(self.input().join(name), data).expect("Failed to write fragment");
        self
    }

    /// Write a file whose name need not be valid UTF-8; a filesystem that
    /// refuses the name leaves it absent
    pub fn file_os(&self, name: &OsStr, data: &[u8]) -> &Self {
        if let Err(e) = fs::write(self.input().join(name), data) {
            eprintln!("Skipping file {:?}: {}", name, e);
        }
        self
    }

    pub fn subdir(&self, name: &str) -> &Self {
        fs::create_dir(self.input().join(name)).expect("Failed to create subdir");
        self
    }
}

/// Raw bytes after the fixed header
pub fn payload_of(path: &Path) -> Vec<u8> {
    let bytes = fs::read(path).expect("Failed to read output");
    assert!(bytes.len() >= WAV_HEADER_LEN, "Output shorter than a WAV header");
    bytes[WAV_HEADER_LEN..].to_vec()
}

/// Samples as decoded by hound, re-serialized little-endian
pub fn decoded_payload_of(path: &Path) -> (hound::WavSpec, u32, Vec<u8>) {
    let mut reader = hound::WavReader::open(path).expect("Output is not a readable WAV");
    let spec = reader.spec();
    let frames = reader.duration();
    let bytes = reader
        .samples::<i16>()
        .map(|s| s.expect("Bad sample"))
        .flat_map(i16::to_le_bytes)
        .collect();
    (spec, frames, bytes)
}

/// Little-endian u32 at `offset` of a file
pub fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}
