//! Article discovery and URL index parsing.
//!
//! An article directory holds one `<URL_ID>.txt` file per document: the
//! first line is the title and everything after it is the body. The URL
//! index is a small delimited file mapping each `URL_ID` to its source URL.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};

use crate::analysis::Document;
use crate::error::{CorpusError, CorpusResult};

/// Header value that marks the first line of a URL index as column names.
pub const URL_ID_HEADER: &str = "URL_ID";

/// Load every `*.txt` file in `dir` as a [`Document`], sorted by file name.
///
/// Files larger than `max_bytes` fail with [`CorpusError::TooLarge`] when a
/// limit is given.
#[tracing::instrument(skip_all, fields(dir = %dir, max_bytes))]
pub fn load_documents(dir: &Utf8Path, max_bytes: Option<usize>) -> CorpusResult<Vec<Document>> {
    let entries = dir
        .read_dir_utf8()
        .map_err(|e| CorpusError::from_io(dir, e))?;

    let mut files: Vec<Utf8PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CorpusError::from_io(dir, e))?;
        let path = entry.path();
        if path.extension() != Some("txt") {
            continue;
        }
        let metadata = entry
            .metadata()
            .map_err(|e| CorpusError::from_io(path, e))?;
        if !metadata.is_file() {
            continue;
        }
        if let Some(limit) = max_bytes
            && metadata.len() > limit as u64
        {
            return Err(CorpusError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }
        files.push(entry.into_path());
    }
    files.sort();

    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        let content = std::fs::read_to_string(path).map_err(|e| CorpusError::from_io(path, e))?;
        documents.push(parse_article(&document_id(path), &content));
    }

    tracing::info!(documents = documents.len(), "corpus loaded");
    Ok(documents)
}

/// Split saved article text into a document: title line, then body.
pub fn parse_article(id: &str, content: &str) -> Document {
    let (title, body) = content.split_once('\n').unwrap_or((content, ""));
    Document::new(id, title.trim(), body.trim())
}

/// File name up to its first `.`.
fn document_id(path: &Utf8Path) -> String {
    let name = path.file_name().unwrap_or_default();
    name.split('.').next().unwrap_or(name).to_string()
}

/// Read a `URL_ID,URL` index into an ordered map.
///
/// Fields may be separated by a comma or a tab. Blank lines are skipped, as
/// is a first line whose first field is `URL_ID`.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn load_url_index(path: &Utf8Path) -> CorpusResult<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| CorpusError::from_io(path, e))?;
    let index = parse_url_index(path, &content)?;
    tracing::debug!(entries = index.len(), "url index loaded");
    Ok(index)
}

fn parse_url_index(path: &Utf8Path, content: &str) -> CorpusResult<BTreeMap<String, String>> {
    let mut index = BTreeMap::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((id, url)) = line.split_once([',', '\t']) else {
            return Err(CorpusError::Malformed {
                path: path.to_path_buf(),
                line: i + 1,
            });
        };
        let id = id.trim().trim_matches('"');
        if i == 0 && id.eq_ignore_ascii_case(URL_ID_HEADER) {
            continue;
        }
        index.insert(id.to_string(), url.trim().trim_matches('"').to_string());
    }
    Ok(index)
}
