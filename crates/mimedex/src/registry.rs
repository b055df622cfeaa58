use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MimeError, Result};
use crate::models::TypeMap;
use crate::normalize::{is_valid_extension, is_valid_mime_type, normalize_token};

/// Registry of MIME types and the file extensions that claim them, backed
/// by a single JSON snapshot on disk. All mutation funnels through
/// [`MimeRegistry::merge`]; the snapshot is rewritten only when content
/// actually changed.
#[derive(Debug, Clone)]
pub struct MimeRegistry {
    store_path: PathBuf,
    types: TypeMap,
}

/// Extension argument for [`MimeRegistry::append`]: a single extension or
/// a batch.
#[derive(Debug, Clone, Default)]
pub struct ExtensionList(Vec<String>);

impl From<&str> for ExtensionList {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for ExtensionList {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<String>> for ExtensionList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for ExtensionList {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ExtensionList {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|value| (*value).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ExtensionList {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|value| (*value).to_string()).collect())
    }
}

impl MimeRegistry {
    /// Opens the registry backed by the snapshot at `store_path`. A missing
    /// snapshot is the normal empty start; an unreadable or unparsable one
    /// also starts empty, with a warning, so a damaged cache never blocks
    /// startup.
    #[must_use]
    pub fn open(store_path: impl Into<PathBuf>) -> Self {
        let store_path = store_path.into();
        let types = match fs::read_to_string(&store_path) {
            Ok(raw) => match serde_json::from_str::<TypeMap>(&raw) {
                Ok(types) => types,
                Err(err) => {
                    tracing::warn!(
                        "corrupt registry snapshot at {}: {err}; starting empty",
                        store_path.display()
                    );
                    TypeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => TypeMap::new(),
            Err(err) => {
                tracing::warn!(
                    "unreadable registry snapshot at {}: {err}; starting empty",
                    store_path.display()
                );
                TypeMap::new()
            }
        };

        Self { store_path, types }
    }

    /// Read-only view of the full registry.
    #[must_use]
    pub fn list(&self) -> &TypeMap {
        &self.types
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// All MIME types claiming the extension of `path`, in first-seen
    /// registry order. An unknown or absent extension is not an error; the
    /// result is just empty.
    #[must_use]
    pub fn get(&self, path: &str) -> Vec<String> {
        let Some(extension) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
            return Vec::new();
        };
        let extension = extension.trim().to_lowercase();

        self.types
            .iter()
            .filter(|(_, extensions)| extensions.iter().any(|known| *known == extension))
            .map(|(mime_type, _)| mime_type.clone())
            .collect()
    }

    /// Merges one source's contribution and persists the snapshot when the
    /// content actually changed. Extensions are appended, never replaced,
    /// so manually added entries survive later source merges. Returns
    /// whether anything changed; a persistence failure propagates.
    pub fn merge(&mut self, content: &TypeMap) -> Result<bool> {
        let updated = self.update_list(content);
        if updated {
            self.persist()?;
        }
        Ok(updated)
    }

    /// Validates and inserts one `(mime type, extensions)` pair through the
    /// same merge path as source ingestion. Validation is all-or-nothing:
    /// nothing is mutated unless the type and every extension in the batch
    /// are valid.
    pub fn append<E>(&mut self, mime_type: &str, extensions: E) -> Result<()>
    where
        E: Into<ExtensionList>,
    {
        let ExtensionList(extensions) = extensions.into();

        if mime_type.trim().is_empty() || !is_valid_mime_type(mime_type) {
            return Err(MimeError::UnsupportedMimeType(mime_type.to_string()));
        }
        if extensions.is_empty() {
            return Err(MimeError::UnsupportedExtension(String::new()));
        }
        if let Some(bad) = extensions.iter().find(|ext| !is_valid_extension(ext)) {
            return Err(MimeError::UnsupportedExtension(bad.clone()));
        }

        let mut content = TypeMap::new();
        content.insert(mime_type.to_string(), extensions);
        self.merge(&content)?;
        Ok(())
    }

    // Both branches normalize uniformly: incoming keys and extensions are
    // trimmed and lowercased whether the key is known or new.
    fn update_list(&mut self, content: &TypeMap) -> bool {
        let mut updated = false;

        for (raw_type, raw_extensions) in content {
            let mime_type = normalize_token(raw_type);
            if mime_type.is_empty() {
                continue;
            }

            let incoming = raw_extensions
                .iter()
                .map(|ext| normalize_token(ext))
                .filter(|ext| !ext.is_empty());

            match self.types.get_mut(&mime_type) {
                Some(known) => {
                    for extension in incoming {
                        if !known.contains(&extension) {
                            known.push(extension);
                            updated = true;
                        }
                    }
                }
                None => {
                    let mut fresh: Vec<String> = Vec::new();
                    for extension in incoming {
                        if !fresh.contains(&extension) {
                            fresh.push(extension);
                        }
                    }
                    if !fresh.is_empty() {
                        self.types.insert(mime_type, fresh);
                        updated = true;
                    }
                }
            }
        }

        updated
    }

    // Full-snapshot write through a uniquely named temp file and rename,
    // so a crash mid-write cannot truncate the previous snapshot.
    fn persist(&self) -> Result<()> {
        let file_name = self
            .store_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                MimeError::Validation(format!(
                    "invalid store path: {}",
                    self.store_path.display()
                ))
            })?;
        let parent = self
            .store_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = parent {
            fs::create_dir_all(dir)?;
        }

        let tmp_name = format!(".{file_name}.mimedex.tmp.{}", uuid::Uuid::new_v4().simple());
        let tmp_path = match parent {
            Some(dir) => dir.join(&tmp_name),
            None => PathBuf::from(&tmp_name),
        };

        let snapshot = serde_json::to_string(&self.types)?;
        {
            let mut tmp = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&tmp_path)?;
            tmp.write_all(snapshot.as_bytes())?;
            tmp.sync_all()?;
        }

        if let Err(err) = fs::rename(&tmp_path, &self.store_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(MimeError::from(err));
        }

        if let Some(dir) = parent {
            if let Ok(dir) = fs::File::open(dir) {
                let _ = dir.sync_all();
            }
        }
        Ok(())
    }
}
