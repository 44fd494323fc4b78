//! 16-bit little-endian sample helpers
//!
//! Fragments carry no header, so these functions are the only interpretation
//! of their bytes: consecutive little-endian `i16` pairs, mono.

use crate::config::WavFormat;

/// Decode every whole sample and hand back the trailing byte, if any
pub fn decode_pcm16(bytes: &[u8]) -> (Vec<i16>, Option<u8>) {
    let chunks = bytes.chunks_exact(2);
    let remainder = chunks.remainder().first().copied();
    let samples = chunks
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    (samples, remainder)
}

/// Playback duration of `byte_len` payload bytes in milliseconds
pub fn duration_ms(byte_len: usize, format: &WavFormat) -> f64 {
    let bytes_per_second = format.bytes_per_second();
    if bytes_per_second == 0 {
        return 0.0;
    }
    byte_len as f64 * 1000.0 / bytes_per_second as f64
}
