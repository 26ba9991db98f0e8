use async_trait::async_trait;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use subwatch_application::ports::BaselineStore;
use subwatch_domain::{DomainError, SubdomainName, SubdomainSet};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tracing::debug;

/// Baseline kept as `<dir>/<domain>_subdomains.txt`, one name per line.
///
/// Appends only ever add lines at the end of the file; nothing is rewritten.
pub struct FileBaselineStore {
    dir: PathBuf,
}

impl FileBaselineStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, domain: &str) -> PathBuf {
        self.dir.join(format!("{}_subdomains.txt", domain))
    }

    /// True when the file has content and its last byte is not a newline.
    async fn missing_final_newline(file: &mut fs::File) -> std::io::Result<bool> {
        if file.metadata().await?.len() == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::End(-1)).await?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last).await?;
        Ok(last[0] != b'\n')
    }

    fn storage_error(path: &Path, action: &str, e: std::io::Error) -> DomainError {
        DomainError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
    }
}

#[async_trait]
impl BaselineStore for FileBaselineStore {
    async fn load(&self, domain: &str) -> Result<SubdomainSet, DomainError> {
        let path = self.path_for(domain);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No baseline yet");
                return Ok(SubdomainSet::new());
            }
            Err(e) => return Err(Self::storage_error(&path, "read", e)),
        };

        Ok(content.lines().filter_map(SubdomainName::new).collect())
    }

    async fn append(&self, domain: &str, names: &SubdomainSet) -> Result<(), DomainError> {
        if names.is_empty() {
            return Ok(());
        }

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Self::storage_error(&self.dir, "create", e))?;

        let path = self.path_for(domain);

        // Sorted only so the appended block is stable and diff-friendly.
        let mut sorted: Vec<&SubdomainName> = names.iter().collect();
        sorted.sort();
        let mut buf = String::with_capacity(sorted.iter().map(|n| n.as_str().len() + 1).sum::<usize>() + 1);
        for name in sorted {
            buf.push_str(name.as_str());
            buf.push('\n');
        }

        let mut file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| Self::storage_error(&path, "open", e))?;

        // A file edited by hand may lack the final newline; the first new
        // name must not be glued onto the last existing entry.
        if Self::missing_final_newline(&mut file)
            .await
            .map_err(|e| Self::storage_error(&path, "read", e))?
        {
            buf.insert(0, '\n');
        }

        file.write_all(buf.as_bytes())
            .await
            .map_err(|e| Self::storage_error(&path, "write", e))?;
        file.flush()
            .await
            .map_err(|e| Self::storage_error(&path, "flush", e))?;

        debug!(path = %path.display(), appended = names.len(), "Baseline updated");
        Ok(())
    }
}
