use std::{
    fmt::{self, Debug, Formatter},
    path::Path,
    sync::Arc,
};

use tracing::debug;

use crate::import::{ImportError, Result};

/// Raw contents of a file picked for import.
#[derive(Clone)]
pub struct FileContents {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

// Keep the bytes out of logs and message dumps
impl Debug for FileContents {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileContents")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Read a whole file into memory, once. There is no retry or timeout.
pub async fn read_file(path: &Path) -> Result<FileContents> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!("Read {} bytes from {name}", bytes.len());

    Ok(FileContents {
        name,
        bytes: bytes.into(),
    })
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::read_file;
    use crate::import::ImportError;

    #[tokio::test]
    async fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"spare parts").unwrap();

        let contents = read_file(file.path()).await.unwrap();

        assert_eq!(&*contents.bytes, b"spare parts");
        assert!(!contents.name.is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xlsx");

        assert!(matches!(
            read_file(&path).await,
            Err(ImportError::Read { .. })
        ));
    }
}
