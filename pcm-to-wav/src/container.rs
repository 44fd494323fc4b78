//! WAV container writing
//!
//! The header is produced by `hound`; this module feeds it the fragment bytes
//! as 16-bit samples in set order. A fragment with an odd byte count is not
//! special: its last byte pairs with the first byte of the next fragment, so
//! the payload is the plain concatenation of every fragment.
//!
//! hound only writes whole samples. When the concatenation has an odd length,
//! the final byte is appended after `finalize` and the RIFF and data chunk
//! sizes are patched to count it.

use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use hound::WavWriter;
use tracing::{info, warn};

use crate::config::WavFormat;
use crate::error::{Error, Result};
use crate::fragment::FragmentSet;
use crate::samples::{decode_pcm16, duration_ms};

/// Description of a finalized container
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSummary {
    pub path: PathBuf,
    pub format: WavFormat,
    pub fragment_count: usize,

    /// Whole frames in the data chunk
    pub frames: u64,

    /// Bytes in the data chunk
    pub payload_bytes: u64,
}

impl ContainerSummary {
    pub fn duration_ms(&self) -> f64 {
        duration_ms(self.payload_bytes as usize, &self.format)
    }
}

/// Write `fragments` to a new (or truncated) container at `path`
///
/// The writer finalizes itself on drop, so the header sizes are patched even
/// when a write fails part way through.
pub fn write_container(
    fragments: &FragmentSet,
    path: &Path,
    format: &WavFormat,
) -> Result<ContainerSummary> {
    let write_err = |source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let mut writer =
        WavWriter::create(path, format.to_spec()).map_err(|source| Error::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;

    let mut samples_written: u64 = 0;
    let mut carry: Option<u8> = None;

    for fragment in fragments {
        let mut bytes = fragment.data.as_slice();

        if let Some(low) = carry.take() {
            match bytes.split_first() {
                Some((&high, rest)) => {
                    writer
                        .write_sample(i16::from_le_bytes([low, high]))
                        .map_err(write_err)?;
                    samples_written += 1;
                    bytes = rest;
                }
                None => {
                    carry = Some(low);
                    continue;
                }
            }
        }

        let (samples, trailing) = decode_pcm16(bytes);
        for sample in &samples {
            writer.write_sample(*sample).map_err(write_err)?;
        }
        samples_written += samples.len() as u64;
        carry = trailing;
    }

    writer.finalize().map_err(write_err)?;

    let sample_width = format.sample_width() as u64;
    let mut payload_bytes = samples_written * sample_width;

    if let Some(byte) = carry {
        warn!(
            "Payload has an odd byte count; last frame of {} is incomplete",
            path.display()
        );
        append_trailing_byte(path, byte, payload_bytes)
            .map_err(|e| write_err(hound::Error::IoError(e)))?;
        payload_bytes += 1;
    }

    let summary = ContainerSummary {
        path: path.to_path_buf(),
        format: *format,
        fragment_count: fragments.len(),
        frames: samples_written / format.channels.max(1) as u64,
        payload_bytes,
    };

    info!(
        "Wrote {} frames ({} bytes, {:.1} ms) from {} fragments",
        summary.frames,
        summary.payload_bytes,
        summary.duration_ms(),
        summary.fragment_count
    );

    Ok(summary)
}

/// Append `byte` to a finalized container whose data chunk holds `data_len`
/// bytes, then rewrite the RIFF and data chunk sizes
///
/// The data chunk is the last chunk hound writes, so its size field sits in
/// the 4 bytes just before the payload.
fn append_trailing_byte(path: &Path, byte: u8, data_len: u64) -> std::io::Result<()> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;

    let file_len = file.seek(SeekFrom::End(0))?;
    let data_size_offset = file_len - data_len - 4;
    file.write_all(&[byte])?;

    let riff_size = (file_len + 1 - 8) as u32;
    let data_size = (data_len + 1) as u32;

    file.seek(SeekFrom::Start(4))?;
    file.write_all(&riff_size.to_le_bytes())?;
    file.seek(SeekFrom::Start(data_size_offset))?;
    file.write_all(&data_size.to_le_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Fragment;

    fn set(parts: &[(&str, &[u8])]) -> FragmentSet {
        FragmentSet::new(
            parts
                .iter()
                .map(|(name, data)| Fragment {
                    name: (*name).into(),
                    path: PathBuf::from(name),
                    data: data.to_vec(),
                })
                .collect(),
        )
    }

    fn read_samples(path: &Path) -> (hound::WavSpec, Vec<i16>) {
        let mut reader = hound::WavReader::open(path).unwrap();
        let spec = reader.spec();
        let samples = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        (spec, samples)
    }

    #[test]
    fn test_odd_fragments_pair_across_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.wav");
        let fragments = set(&[("a.pcm", &[0x01]), ("b.pcm", &[0x02, 0x03, 0x04])]);

        let summary = write_container(&fragments, &out, &WavFormat::default()).unwrap();
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.payload_bytes, 4);

        let (_, samples) = read_samples(&out);
        assert_eq!(samples, vec![0x0201, 0x0403]);
    }

    #[test]
    fn test_empty_fragment_keeps_carry() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.wav");
        let fragments = set(&[("a.pcm", &[0x01]), ("b.pcm", &[]), ("c.pcm", &[0x02])]);

        let summary = write_container(&fragments, &out, &WavFormat::default()).unwrap();
        assert_eq!(summary.frames, 1);

        let (_, samples) = read_samples(&out);
        assert_eq!(samples, vec![0x0201]);
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_odd_total_keeps_last_byte() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.wav");
        let fragments = set(&[("a.pcm", &[0x01, 0x02, 0x03])]);

        let summary = write_container(&fragments, &out, &WavFormat::default()).unwrap();
        assert_eq!(summary.payload_bytes, 3);
        assert_eq!(summary.frames, 1);

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(bytes.len(), 47);
        assert_eq!(u32_at(&bytes, 4), 39, "RIFF chunk size");
        assert_eq!(u32_at(&bytes, 40), 3, "data chunk size");
        assert_eq!(&bytes[44..], &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_odd_fragments_odd_total() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.wav");
        let fragments = set(&[
            ("a.pcm", &[0x01]),
            ("b.pcm", &[0x02, 0x03]),
            ("c.pcm", &[0x04, 0x05]),
        ]);

        let summary = write_container(&fragments, &out, &WavFormat::default()).unwrap();
        assert_eq!(summary.payload_bytes, 5);

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(u32_at(&bytes, 40), 5, "data chunk size");
        assert_eq!(&bytes[44..], &[0x01, 0x02, 0x03, 0x04, 0x05]);
    }

    #[test]
    fn test_missing_parent_is_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("out.wav");

        match write_container(&FragmentSet::default(), &out, &WavFormat::default()) {
            Err(Error::CreateOutput { path, .. }) => assert_eq!(path, out),
            other => panic!("Expected CreateOutput, got {:?}", other),
        }
        assert!(!out.exists());
    }
}
