//! Finding frame files and putting them in display order

use crate::error::*;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::slice;

/// File name ending of frames picked up from a directory
pub const DEFAULT_SUFFIX: &str = ".png";

/// How frames found in a directory are ordered
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameOrder {
    /// By the integer before the first `.` of the file name, so `2.png` comes before `10.png`.
    /// A name without such an integer fails the whole scan.
    Numeric,
    /// Natural sort of whole file names. Never fails.
    Natural,
}

impl Default for FrameOrder {
    fn default() -> Self {
        FrameOrder::Numeric
    }
}

/// A frame file and its position in the animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFile {
    pub index: i64,
    pub path: PathBuf,
}

/// Frame files sorted in the order they'll be displayed
#[derive(Debug, Clone, Default)]
pub struct FrameList {
    frames: Vec<FrameFile>,
}

/// Frame number is the part of the file name before the first `.`
///
/// It must fit in an `i64` and be written as plain digits with an optional sign.
/// Surrounding whitespace and `_` digit separators are rejected.
pub fn frame_number(file_name: &str) -> CatResult<i64> {
    let prefix = file_name.split('.').next().unwrap_or("");
    prefix.parse().map_err(|_| Error::Parse(file_name.to_owned()))
}

impl FrameList {
    /// Lists `dir` and keeps entries whose name ends with `suffix` (case-sensitive).
    ///
    /// With `FrameOrder::Numeric` all names are parsed before returning,
    /// so a bad name fails the scan before any image is decoded.
    pub fn scan(dir: &Path, suffix: &str, order: FrameOrder) -> CatResult<Self> {
        let entries = fs::read_dir(dir).map_err(|err| Error::DirectoryNotFound(dir.to_owned(), err))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| Error::DirectoryNotFound(dir.to_owned(), err))?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(suffix) {
                names.push((name.into_owned(), entry.path()));
            }
        }

        let frames = match order {
            FrameOrder::Numeric => {
                let mut numbered = names.into_iter()
                    .map(|(name, path)| Ok((frame_number(&name)?, name, path)))
                    .collect::<CatResult<Vec<_>>>()?;
                // equal numbers (1.2.png, 1.10.png) fall back to the name
                numbered.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| natural_name_order(&a.1, &b.1)));
                numbered.into_iter().map(|(index, _, path)| FrameFile { index, path }).collect()
            },
            FrameOrder::Natural => {
                names.sort_by(|a, b| natural_name_order(&a.0, &b.0));
                names.into_iter().enumerate()
                    .map(|(i, (_, path))| FrameFile { index: i as i64, path })
                    .collect()
            },
        };

        Ok(Self { frames })
    }

    /// Explicit list of `(index, path)` pairs, for callers that don't name files by frame number.
    ///
    /// Entries with the same index keep their relative order.
    pub fn from_manifest<I: IntoIterator<Item = (i64, PathBuf)>>(entries: I) -> Self {
        let mut frames: Vec<_> = entries.into_iter().map(|(index, path)| FrameFile { index, path }).collect();
        frames.sort_by_key(|f| f.index);
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, FrameFile> {
        self.frames.iter()
    }
}

/// Natural order, with plain byte order for names `natord` considers equal
fn natural_name_order(a: &str, b: &str) -> Ordering {
    match natord::compare(a, b) {
        Ordering::Equal => a.cmp(b),
        ord => ord,
    }
}

impl<'a> IntoIterator for &'a FrameList {
    type Item = &'a FrameFile;
    type IntoIter = slice::Iter<'a, FrameFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
