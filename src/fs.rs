//! Filesystem access behind a trait, so graph loading and the commands can be tested in memory.

use std::io::{self, Write};
use std::path::Path;

pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write content to a file, creating it if it doesn't exist.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Open a file for writing, truncating any existing content.
    fn create_file(&self, path: &Path) -> io::Result<Box<dyn Write>>;

    fn exists(&self, path: &Path) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn create_file(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        let file = std::fs::File::create(path)?;
        Ok(Box::new(io::BufWriter::new(file)))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Shared real filesystem for callers that don't inject one.
pub fn default_fs() -> &'static RealFs {
    static INSTANCE: RealFs = RealFs;
    &INSTANCE
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    type Files = Arc<RwLock<HashMap<String, String>>>;

    /// In-memory filesystem for testing.
    #[derive(Debug, Default)]
    pub struct MockFs {
        files: Files,
    }

    impl MockFs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_files<I, P, C>(files: I) -> Self
        where
            I: IntoIterator<Item = (P, C)>,
            P: AsRef<Path>,
            C: Into<String>,
        {
            let map: HashMap<String, String> = files
                .into_iter()
                .map(|(p, c)| (p.as_ref().to_string_lossy().to_string(), c.into()))
                .collect();
            Self {
                files: Arc::new(RwLock::new(map)),
            }
        }

        pub fn get(&self, path: &Path) -> Option<String> {
            self.files
                .read()
                .unwrap()
                .get(path.to_string_lossy().as_ref())
                .cloned()
        }
    }

    /// Buffers writes and stores them in the mock on drop.
    struct MockWriter {
        key: String,
        buffer: Vec<u8>,
        files: Files,
    }

    impl Write for MockWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            let content = String::from_utf8_lossy(&self.buffer).to_string();
            self.files.write().unwrap().insert(self.key.clone(), content);
            Ok(())
        }
    }

    impl Drop for MockWriter {
        fn drop(&mut self) {
            let _ = self.flush();
        }
    }

    impl FileSystem for MockFs {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            let key = path.to_string_lossy().to_string();
            self.files
                .read()
                .unwrap()
                .get(&key)
                .cloned()
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, format!("file not found: {}", key))
                })
        }

        fn write(&self, path: &Path, content: &str) -> io::Result<()> {
            let key = path.to_string_lossy().to_string();
            self.files.write().unwrap().insert(key, content.to_string());
            Ok(())
        }

        fn create_file(&self, path: &Path) -> io::Result<Box<dyn Write>> {
            Ok(Box::new(MockWriter {
                key: path.to_string_lossy().to_string(),
                buffer: Vec::new(),
                files: Arc::clone(&self.files),
            }))
        }

        fn exists(&self, path: &Path) -> bool {
            let key = path.to_string_lossy().to_string();
            self.files.read().unwrap().contains_key(&key)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_mock_fs_read_write() {
            let fs = MockFs::new();
            let path = Path::new("/test/graph.json");

            assert!(!fs.exists(path));
            assert!(fs.read_to_string(path).is_err());

            fs.write(path, "{}").unwrap();
            assert!(fs.exists(path));
            assert_eq!(fs.read_to_string(path).unwrap(), "{}");
        }

        #[test]
        fn test_mock_fs_create_file() {
            let fs = MockFs::new();
            let path = Path::new("/out/report.md");
            {
                let mut writer = fs.create_file(path).unwrap();
                write!(writer, "# Report").unwrap();
            }
            assert_eq!(fs.get(path).as_deref(), Some("# Report"));
        }
    }
}
