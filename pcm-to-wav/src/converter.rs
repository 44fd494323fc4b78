//! Converter: fragment directory in, one WAV container out
//!
//! Linear pipeline with no retries: enumerate the directory completely, then
//! write the container. The output file is never touched before enumeration
//! succeeds, so a missing or unreadable directory leaves no output behind.

use std::path::Path;

use tracing::info;

use crate::config::ConverterConfig;
use crate::container::{write_container, ContainerSummary};
use crate::error::Result;
use crate::fragment::{enumerate, FragmentSet};

/// Batch PCM-fragment to WAV converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Load every fragment in `directory`, ordered by filename
    pub fn enumerate(&self, directory: &Path) -> Result<FragmentSet> {
        let fragments = enumerate(directory, &self.config)?;
        info!(
            "Found {} .{} fragments ({} bytes) in {}",
            fragments.len(),
            self.config.fragment_extension,
            fragments.total_bytes(),
            directory.display()
        );
        Ok(fragments)
    }

    /// Write `fragments` as a single container at `output`
    pub fn write_container(
        &self,
        fragments: &FragmentSet,
        output: &Path,
    ) -> Result<ContainerSummary> {
        write_container(fragments, output, &self.config.format)
    }

    /// Enumerate `directory` and write the result to `output`
    pub fn convert(&self, directory: &Path, output: &Path) -> Result<ContainerSummary> {
        let fragments = self.enumerate(directory)?;
        self.write_container(&fragments, output)
    }
}
