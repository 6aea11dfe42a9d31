//! Artifact export: download filenames and leak-free downloads.
//!
//! The browser specifics (Blob, object URL, anchor click) live behind
//! [`DownloadSink`]. [`download`] owns the sequencing and guarantees the
//! temporary resource is released on every path, including a panicking sink.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, ExportError};
use crate::model::GeneratedArtifact;

/// Extension used by the download button.
pub const DEFAULT_EXTENSION: &str = "txt";

/// How long the copy confirmation stays visible, in milliseconds.
pub const COPY_CONFIRMATION_MS: u32 = 2_000;

/// How long the "form cleared" confirmation stays visible, in milliseconds.
pub const RESET_CONFIRMATION_MS: u32 = 2_500;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Builds `<template name>_<document id>.<extension>`.
///
/// Each whitespace run of the template name becomes one `_` and the name is
/// lower-cased.
pub fn download_filename(template_name: &str, document_id: &str, extension: &str) -> String {
    let base = WHITESPACE.replace_all(template_name, "_").to_lowercase();
    format!("{}_{}.{}", base, document_id, extension)
}

/// Host facility able to offer text as a file download.
pub trait DownloadSink {
    /// Temporary resource backing one download, such as an object URL.
    type Handle;

    fn create(&self, contents: &str, mime_type: &str) -> Result<Self::Handle, ExportError>;
    fn save(&self, handle: &Self::Handle, filename: &str) -> Result<(), ExportError>;
    fn release(&self, handle: Self::Handle);
}

/// Releases the handle when dropped.
struct Release<'a, S: DownloadSink> {
    sink: &'a S,
    handle: Option<S::Handle>,
}

impl<S: DownloadSink> Drop for Release<'_, S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.sink.release(handle);
        }
    }
}

/// Offers the artifact text for download and returns the filename used.
pub fn download<S: DownloadSink>(
    sink: &S,
    artifact: &GeneratedArtifact,
    extension: &str,
) -> Result<String, AppError> {
    let filename = download_filename(&artifact.template_name, &artifact.document_id, extension);
    let guard = Release {
        sink,
        handle: Some(sink.create(&artifact.generated_text, "text/plain")?),
    };
    if let Some(handle) = guard.handle.as_ref() {
        sink.save(handle, &filename)?;
    }
    tracing::info!("offered {} for download", filename);
    Ok(filename)
}
