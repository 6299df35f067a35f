use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

const TMP_SUFFIX: &str = "tmp";

/// Raw byte access to named resources. Every operation creates the resource
/// empty when it does not exist yet.
pub trait BlobStore: Send + Sync {
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;
    fn write(&self, name: &str, data: &[u8]) -> io::Result<()>;
    fn append(&self, name: &str, data: &[u8]) -> io::Result<()>;
}

/// Blob store backed by files under a root directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn ensure_exists(&self, name: &str) -> io::Result<PathBuf> {
        let path = self.path_of(name);
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            File::create(&path)?;
        }
        Ok(path)
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self.ensure_exists(name)?;
        fs::read(path)
    }

    /// Stages the content next to the target and renames it into place, so a
    /// failed write leaves the previous content untouched.
    fn write(&self, name: &str, data: &[u8]) -> io::Result<()> {
        let path = self.ensure_exists(name)?;
        replace_file(&path, data)
    }

    fn append(&self, name: &str, data: &[u8]) -> io::Result<()> {
        let path = self.ensure_exists(name)?;
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(data)?;
        file.flush()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Replaces the content of `path` by writing a sibling `.tmp` file and renaming
/// it over the target. The parent directory must exist.
pub fn replace_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.flush()?;
    file.sync_all()?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_keeps_original_extension() {
        assert_eq!(
            tmp_path(Path::new("data/expenses.json")),
            PathBuf::from("data/expenses.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("data/raw")), PathBuf::from("data/raw.tmp"));
    }

    #[test]
    fn replace_file_creates_and_overwrites_without_leftovers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");

        replace_file(&path, b"{}").expect("create");
        replace_file(&path, b"{\"a\":1}").expect("overwrite");

        assert_eq!(fs::read(&path).expect("read"), b"{\"a\":1}");
        assert!(!tmp_path(&path).exists());
    }
}
