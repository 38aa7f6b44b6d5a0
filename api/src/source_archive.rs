//! Unpacking of verified-source zip archives into viewable text files.

use serde::Deserialize;
use serde::Serialize;

/// One text file extracted from a source archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFile {
    /// Path of the entry within the archive.
    pub name: String,
    /// Decoded UTF-8 content.
    pub content: String,
}

#[cfg(not(target_arch = "wasm32"))]
pub use unpack::unpack_source_archive;
#[cfg(not(target_arch = "wasm32"))]
pub use unpack::ArchiveError;

#[cfg(not(target_arch = "wasm32"))]
mod unpack {
    use std::io::Cursor;
    use std::io::Read;

    use super::ExtractedFile;

    #[derive(Debug, thiserror::Error)]
    pub enum ArchiveError {
        #[error("malformed zip archive: {0}")]
        Zip(#[from] zip::result::ZipError),
        #[error("i/o error reading archive entry: {0}")]
        Io(#[from] std::io::Error),
        #[error("entry {name} is not valid UTF-8")]
        NonUtf8 { name: String },
    }

    /// Unpacks a zip archive into text files, skipping directory markers.
    ///
    /// Entries are read in enumeration order, then every decoding is joined
    /// at once: if any single entry fails to decode, the whole batch fails
    /// and nothing is published.
    pub async fn unpack_source_archive(bytes: &[u8]) -> Result<Vec<ExtractedFile>, ArchiveError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

        let mut entries = Vec::new();
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            let mut raw = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut raw)?;
            entries.push((name, raw));
        }

        let decodings = entries.into_iter().map(|(name, raw)| async move {
            match String::from_utf8(raw) {
                Ok(content) => Ok(ExtractedFile { name, content }),
                Err(_) => Err(ArchiveError::NonUtf8 { name }),
            }
        });

        futures::future::try_join_all(decodings).await
    }
}
