use crate::hardware::CpuModel;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Top-level settings for the composer shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComposerConfigInner {
    pub form: FormDefaults,
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ComposerConfig {
    #[serde(flatten, default)]
    inner: Arc<ComposerConfigInner>,
}

impl Deref for ComposerConfig {
    type Target = ComposerConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ComposerConfig {
    fn deref_mut(&mut self) -> &mut ComposerConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Initial values of a fresh form.
#[derive(Default, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub cpu: CpuModel,
    pub gpu: bool,
}

/// How rendered form views are written.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
}

/// Logging knobs, applied before any `-v` flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

impl LogConfig {
    /// Directory for rolling log files. An unset or empty `directory` means console only.
    #[must_use]
    pub fn file_directory(&self) -> Option<&Path> {
        self.directory.as_deref().filter(|dir| !dir.as_os_str().is_empty())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), directory: None, json: false }
    }
}
