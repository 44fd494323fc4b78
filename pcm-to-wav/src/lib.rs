//! # pcm-to-wav
//!
//! Concatenates a directory of headerless PCM fragments (mono, 16-bit
//! little-endian, 24 kHz) into one WAV file:
//! - Fragments are the `.pcm` files of the directory, in ascending filename order
//! - The payload is their byte concatenation, unmodified
//! - The header declares 1 channel, 16-bit samples, 24000 Hz
//!
//! ```no_run
//! use std::path::Path;
//! use pcm_to_wav::Converter;
//!
//! let summary = Converter::default().convert(Path::new("chunks"), Path::new("out.wav"))?;
//! println!("{} frames", summary.frames);
//! # Ok::<(), pcm_to_wav::Error>(())
//! ```

pub mod config;
pub mod container;
pub mod converter;
pub mod error;
pub mod fragment;
pub mod samples;

pub use config::{ConverterConfig, WavFormat};
pub use container::ContainerSummary;
pub use converter::Converter;
pub use error::{Error, Result};
pub use fragment::{Fragment, FragmentSet};
