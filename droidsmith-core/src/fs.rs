//! Filesystem abstractions used for scanning and scaffold persistence.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// List all files reachable from the root path.
    ///
    /// Dot-prefixed files and directories (`.git`, editor droppings) are
    /// left out of the walk; a source tree keeps its components in visible
    /// paths.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Check whether a path exists.
    fn path_exists(&self, path: &Path) -> bool;
    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Write a string to a file, replacing any existing contents.
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                if is_hidden(&path) {
                    continue;
                }
                let file_type = entry.file_type()?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        Ok(std::fs::write(path, contents)?)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::StdFileSystem;
    use crate::fs::FileSystem;
    use std::path::PathBuf;

    #[test]
    fn std_filesystem_lists_and_reads_files() {
        let root = std::env::temp_dir().join(unique_dir_name("list"));
        std::fs::create_dir_all(&root).expect("create temp dir");
        let file_path = root.join("Hello.java");
        std::fs::write(&file_path, "class Hello {}").expect("write test file");

        let fs = StdFileSystem::new();
        let files = fs.list_files(&root).expect("list files");
        assert_eq!(files, vec![file_path.clone()]);

        let contents = fs.read_to_string(&file_path).expect("read file");
        assert_eq!(contents, "class Hello {}");

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    #[test]
    fn std_filesystem_skips_hidden_entries() {
        let root = std::env::temp_dir().join(unique_dir_name("hidden"));
        std::fs::create_dir_all(root.join(".git")).expect("create hidden dir");
        std::fs::write(root.join(".git").join("config"), "[core]").expect("write in hidden dir");
        std::fs::write(root.join(".DraftActivity.java.swp"), "swap").expect("write hidden file");
        let visible = root.join("MainActivity.java");
        std::fs::write(&visible, "class MainActivity extends Activity {}")
            .expect("write visible file");

        let fs = StdFileSystem::new();
        let files = fs.list_files(&root).expect("list files");
        assert_eq!(files, vec![visible]);

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    #[test]
    fn std_filesystem_creates_dirs_and_writes() {
        let root = std::env::temp_dir().join(unique_dir_name("write"));
        let nested = root.join("com").join("app");

        let fs = StdFileSystem::new();
        assert!(!fs.path_exists(&nested));
        fs.create_dir_all(&nested).expect("create nested dirs");
        assert!(fs.path_exists(&nested));

        let file_path = nested.join("MainTest.java");
        fs.write_string(&file_path, "// generated").expect("write file");
        assert!(fs.path_exists(&file_path));
        assert_eq!(
            fs.read_to_string(&file_path).expect("read back"),
            "// generated"
        );

        std::fs::remove_dir_all(&root).expect("cleanup temp dir");
    }

    fn unique_dir_name(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        PathBuf::from(format!("droidsmith_core_fs_{tag}_{nanos}"))
    }
}
