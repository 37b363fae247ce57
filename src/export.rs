//! Export negotiation.
//!
//! `POST /api/export` answers either with a JSON summary or, when a ZIP was
//! requested, with the archive bytes. [`negotiate`] decides which one a
//! response is; [`run_export`] drives the whole round trip including saving
//! the archive.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::api::{ExporterClient, EXPORT_PATH};
use crate::error::{ApiError, ExportError};
use crate::models::{ExportRequest, ExportSummary};
use crate::traits::Response;

/// File name used when the response does not carry a usable one.
pub const DEFAULT_ARCHIVE_NAME: &str = "grafana-export.zip";

/// Content types treated as an opaque archive body.
pub const ARCHIVE_CONTENT_TYPES: [&str; 3] = [
    "application/zip",
    "application/x-zip-compressed",
    "application/octet-stream",
];

static FILENAME_EXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|;)\s*filename\*\s*=\s*"?([^;"]*)"?"#)
        .expect("Invalid filename* regex")
});

static FILENAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|;)\s*filename\s*=\s*(?:"([^"]*)"|([^;]*))"#)
        .expect("Invalid filename regex")
});

/// How an export response was interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Archive { filename: String, bytes: Bytes },
    Summary(ExportSummary),
}

/// What the operator is shown once an export finished.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportReport {
    Summary(ExportSummary),
    Saved { path: PathBuf, size: usize },
}

pub fn is_archive_content_type(content_type: &str) -> bool {
    ARCHIVE_CONTENT_TYPES
        .iter()
        .any(|archive| content_type.eq_ignore_ascii_case(archive))
}

/// Interpret a successful export response.
///
/// The body is an archive only when a ZIP was requested *and* the content
/// type is one of [`ARCHIVE_CONTENT_TYPES`]. Anything else is parsed as the
/// JSON summary.
pub fn negotiate(response: &Response, export_as_zip: bool) -> Result<ExportOutcome, ApiError> {
    let content_type = response.content_type().unwrap_or_default();

    if export_as_zip && is_archive_content_type(&content_type) {
        let filename = response
            .header_value("content-disposition")
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| DEFAULT_ARCHIVE_NAME.to_string());
        debug!(%filename, size = response.body.len(), "Export returned archive");
        return Ok(ExportOutcome::Archive {
            filename,
            bytes: response.body.clone(),
        });
    }

    if export_as_zip {
        debug!(%content_type, "ZIP requested but backend returned a summary");
    }

    response
        .json::<ExportSummary>()
        .map(ExportOutcome::Summary)
        .map_err(|e| ApiError::Decode {
            endpoint: EXPORT_PATH.to_string(),
            message: e.to_string(),
        })
}

/// Extract the file name from a `Content-Disposition` header value.
///
/// `filename*=` (RFC 5987) wins over `filename=`. The result is reduced to
/// a bare file name; `None` means the header had nothing usable.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let extended = FILENAME_EXT_REGEX
        .captures(header)
        .and_then(|caps| caps.get(1))
        .and_then(|value| decode_ext_value(value.as_str()))
        .and_then(|name| sanitize_filename(&name));
    if extended.is_some() {
        return extended;
    }

    FILENAME_REGEX
        .captures(header)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .and_then(|value| sanitize_filename(value.as_str()))
}

/// Decode `charset'lang'percent-encoded` into a plain string.
fn decode_ext_value(value: &str) -> Option<String> {
    let encoded = match value.splitn(3, '\'').collect::<Vec<_>>().as_slice() {
        [_charset, _lang, encoded] => *encoded,
        _ => value,
    };
    urlencoding::decode(encoded.trim())
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Strip directory components and reject names that are empty or special.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw
        .trim()
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();
    match name {
        "" | "." | ".." => None,
        _ if name.chars().any(char::is_control) => None,
        _ => Some(name.to_string()),
    }
}

/// Paths to try for `filename` in `dir`, in order: `name.zip`,
/// `name (1).zip`, `name (2).zip`, ...
pub fn candidate_paths<'a>(
    dir: &'a Path,
    filename: &'a str,
) -> impl Iterator<Item = PathBuf> + 'a {
    let (stem, ext) = match filename.rfind('.') {
        Some(idx) if idx > 0 => (&filename[..idx], &filename[idx..]),
        _ => (filename, ""),
    };
    std::iter::once(dir.join(filename))
        .chain((1u64..).map(move |n| dir.join(format!("{} ({}){}", stem, n, ext))))
}

/// Write the archive into `dir`, creating the directory if needed.
///
/// Each candidate is opened with `create_new`, so an existing file is never
/// overwritten even if it appears while saving.
pub fn save_archive(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Save {
        path: dir.to_path_buf(),
        source,
    })?;

    for path in candidate_paths(dir, filename) {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!("{} exists, trying next name", path.display());
                continue;
            }
            Err(source) => return Err(ExportError::Save { path, source }),
        };
        file.write_all(bytes).map_err(|source| ExportError::Save {
            path: path.clone(),
            source,
        })?;
        info!("Saved export archive to {}", path.display());
        return Ok(path);
    }
    Err(ExportError::Save {
        path: dir.join(filename),
        source: io::Error::new(io::ErrorKind::AlreadyExists, "no free file name"),
    })
}

/// Send the export request and turn the response into a report.
///
/// Nothing is saved unless the backend answered 2xx with an archive.
pub async fn run_export(
    client: &ExporterClient,
    request: &ExportRequest,
    download_dir: &Path,
) -> Result<ExportReport, ExportError> {
    if request.is_empty() {
        return Err(ExportError::NothingSelected);
    }

    let response = client.post_export(request).await?;
    match negotiate(&response, request.export_as_zip)? {
        ExportOutcome::Archive { filename, bytes } => {
            let path = save_archive(download_dir, &filename, &bytes)?;
            Ok(ExportReport::Saved {
                path,
                size: bytes.len(),
            })
        }
        ExportOutcome::Summary(summary) => {
            if summary.is_partial() {
                warn!(
                    errors = summary.warnings().len(),
                    "Export completed with errors"
                );
            }
            info!(
                dashboards = summary.exported_dashboards,
                alerts = summary.exported_alerts,
                libraries = summary.exported_libraries,
                "Export completed at {}",
                summary.export_path
            );
            Ok(ExportReport::Summary(summary))
        }
    }
}
