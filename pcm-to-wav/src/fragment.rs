//! Fragment enumeration
//!
//! A fragment is one headerless PCM file. Enumeration lists a directory,
//! keeps the entries carrying the fragment extension, orders them by filename
//! and reads each one fully into memory.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::ConverterConfig;
use crate::error::{Error, Result};
use crate::samples::duration_ms;

/// One loaded input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Filename (sort key); not necessarily UTF-8
    pub name: OsString,

    /// Full path the bytes were read from
    pub path: PathBuf,

    /// Raw sample bytes, unmodified
    pub data: Vec<u8>,
}

impl Fragment {
    /// Filename for display, with invalid UTF-8 replaced
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Fragments ordered ascending by filename
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    fragments: Vec<Fragment>,
}

impl FragmentSet {
    /// Build a set, sorting by filename
    pub fn new(mut fragments: Vec<Fragment>) -> Self {
        fragments.sort_by(|a, b| compare_names(&a.name, &b.name));
        Self { fragments }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    /// Sum of all fragment sizes (payload size before framing)
    pub fn total_bytes(&self) -> usize {
        self.fragments.iter().map(Fragment::len).sum()
    }

    pub fn names(&self) -> Vec<String> {
        self.fragments.iter().map(Fragment::display_name).collect()
    }

    /// Concatenated payload in set order
    pub fn payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.total_bytes());
        for fragment in &self.fragments {
            payload.extend_from_slice(&fragment.data);
        }
        payload
    }
}

impl<'a> IntoIterator for &'a FragmentSet {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// Ascending byte-order comparison of filenames
pub fn compare_names(a: &OsStr, b: &OsStr) -> Ordering {
    a.as_encoded_bytes().cmp(b.as_encoded_bytes())
}

/// List, filter, sort and load the fragments in `directory`
pub fn enumerate(directory: &Path, config: &ConverterConfig) -> Result<FragmentSet> {
    let read_dir_err = |source| Error::ReadDirectory {
        path: directory.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;

        let name = entry.file_name();

        if !config.is_fragment_name(&name) {
            debug!(
                "Skipping {:?} (not a .{} file)",
                name, config.fragment_extension
            );
            continue;
        }

        // Follows symlinks, so a link to a fragment file still counts
        if entry.path().is_dir() {
            debug!("Skipping directory {:?}", name);
            continue;
        }

        names.push(name);
    }

    names.sort_by(|a, b| compare_names(a, b));

    let sample_width = config.format.sample_width();
    let mut fragments = Vec::with_capacity(names.len());
    for name in names {
        let path = directory.join(&name);
        let data = fs::read(&path).map_err(|source| Error::ReadFragment {
            path: path.clone(),
            source,
        })?;

        debug!(
            "Loaded {:?} ({} bytes, {:.1} ms)",
            name,
            data.len(),
            duration_ms(data.len(), &config.format)
        );
        if data.len() % sample_width != 0 {
            warn!(
                "Fragment {:?} is {} bytes, not a multiple of the {}-byte sample width",
                name,
                data.len(),
                sample_width
            );
        }

        fragments.push(Fragment { name, path, data });
    }

    Ok(FragmentSet { fragments })
}
