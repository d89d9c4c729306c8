// file: src/corpus/scanner.rs
// description: Directory walking and corpus file discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::CorpusConfig;
use crate::error::{NlpError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct CorpusScanner {
    config: CorpusConfig,
}

#[derive(Debug, Clone)]
pub struct CorpusFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

impl CorpusScanner {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    /// Files under `root` with an accepted extension, sorted by relative path.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<CorpusFile>> {
        if !root.is_dir() {
            return Err(NlpError::Corpus {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            });
        }

        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();
        let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");

            if self.should_skip(&relative_path) || !self.has_accepted_extension(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            if let Ok(metadata) = entry.metadata() {
                let size = metadata.len();

                if size > max_size {
                    debug!(
                        "Skipping large file ({} MB): {}",
                        size / 1024 / 1024,
                        path.display()
                    );
                    continue;
                }

                files.push(CorpusFile {
                    path: path.to_path_buf(),
                    relative_path,
                    size,
                });
            }
        }

        info!("Found {} corpus files", files.len());
        Ok(files)
    }

    fn has_accepted_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }

    fn should_skip(&self, relative_path: &str) -> bool {
        for pattern in &self.config.skip_patterns {
            if let Some(dir) = pattern.strip_suffix("/*") {
                if relative_path.starts_with(&format!("{}/", dir))
                    || relative_path.contains(&format!("/{}/", dir))
                {
                    return true;
                }
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                if relative_path.ends_with(suffix) {
                    return true;
                }
            } else if relative_path.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(skip_patterns: Vec<String>) -> CorpusConfig {
        CorpusConfig {
            extensions: vec!["md".to_string(), "txt".to_string()],
            skip_patterns,
            max_file_size_mb: 10,
            parallel_workers: 1,
        }
    }

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.md"), "# B").unwrap();
        fs::write(temp.path().join("a.txt"), "plain").unwrap();
        fs::write(temp.path().join("image.png"), "binary").unwrap();

        let scanner = CorpusScanner::new(config(vec![]));
        let files = scanner.scan_directory(temp.path()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.md"]);
    }

    #[test]
    fn test_skip_patterns() {
        let scanner = CorpusScanner::new(config(vec![
            "*.draft.md".to_string(),
            ".git/*".to_string(),
        ]));

        assert!(scanner.should_skip("notes.draft.md"));
        assert!(scanner.should_skip(".git/description.txt"));
        assert!(scanner.should_skip("vendor/.git/notes.md"));
        assert!(!scanner.should_skip("notes.md"));
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let scanner = CorpusScanner::new(config(vec![]));
        let result = scanner.scan_directory(&temp.path().join("missing"));
        assert!(matches!(result, Err(NlpError::Corpus { .. })));
    }
}
