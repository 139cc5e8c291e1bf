//! Clip availability oracle.
//!
//! The pipeline only ever asks whether a pre-rendered clip file exists; it
//! never creates or reads clip bytes. Clips are keyed by word with an
//! `.mp4` extension.
//!
//! # Examples
//!
//! ```
//! use signwave::clip::{ClipStore, MemoryClipStore, clip_file_name};
//!
//! let clips = MemoryClipStore::from_words(["hello"]);
//! assert!(clips.file_exists(&clip_file_name("hello")));
//! assert!(!clips.file_exists(&clip_file_name("goodbye")));
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

/// File extension of pre-rendered animation clips.
pub const CLIP_EXTENSION: &str = "mp4";

/// The clip file name for a word or letter.
pub fn clip_file_name(word: &str) -> String {
    format!("{word}.{CLIP_EXTENSION}")
}

/// Trait for asset stores that can report clip availability.
pub trait ClipStore: Send + Sync + std::fmt::Debug {
    /// Check if a file with the given name exists in the store.
    fn file_exists(&self, name: &str) -> bool;

    /// Get the name of this store (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A clip store backed by a directory of pre-rendered files.
#[derive(Clone, Debug)]
pub struct DirectoryClipStore {
    root: PathBuf,
}

impl DirectoryClipStore {
    /// Create a store over the given assets directory.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DirectoryClipStore { root: root.into() }
    }

    /// The assets directory.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ClipStore for DirectoryClipStore {
    fn file_exists(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

/// An in-memory clip store, for tests and embedded fixtures.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipStore {
    files: HashSet<String>,
}

impl MemoryClipStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryClipStore::default()
    }

    /// Create a store holding a clip file for each word.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files = words
            .into_iter()
            .map(|w| clip_file_name(w.as_ref()))
            .collect();
        MemoryClipStore { files }
    }

    /// Add a clip file for a word.
    pub fn add_word(&mut self, word: &str) {
        self.files.insert(clip_file_name(word));
    }
}

impl ClipStore for MemoryClipStore {
    fn file_exists(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
