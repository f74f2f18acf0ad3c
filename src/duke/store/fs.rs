use super::Storage;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DukeError;

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("tasks.txt"));
        assert!(storage.read().unwrap().is_empty());
    }

    #[test]
    fn write_creates_parents_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("tasks.txt");
        let mut storage = FileStorage::new(&path);

        storage.write("todo 0 a\ntodo 1 b").unwrap();
        assert_eq!(storage.read().unwrap(), vec!["todo 0 a", "todo 1 b"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "todo 0 a\ntodo 1 b");

        storage.write("").unwrap();
        assert!(storage.read().unwrap().is_empty());
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file.
        let storage = FileStorage::new(dir.path());
        assert!(matches!(storage.read(), Err(DukeError::Io(_))));
    }
}
