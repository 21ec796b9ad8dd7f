//! Helpers to build paths to files within a measurement directory.

use std::path::{Path, PathBuf};

/// Extension trait to append a component to a path, returning the new `PathBuf`.
pub trait PathBufExt: Sized {
    fn then(self, p: impl AsRef<Path>) -> PathBuf;

    /// Name of the last component, or the full path if it has none (e.g., `..`).
    fn display_name(&self) -> String;
}

impl PathBufExt for PathBuf {
    fn then(mut self, p: impl AsRef<Path>) -> PathBuf {
        self.push(p);
        self
    }

    fn display_name(&self) -> String {
        self.as_path().display_name()
    }
}

impl PathBufExt for &Path {
    fn then(self, p: impl AsRef<Path>) -> PathBuf {
        let mut path = self.to_path_buf();
        path.push(p);
        path
    }

    fn display_name(&self) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_then() {
        let dir = Path::new("results/2023-05-02_10-13-44");
        assert_eq!(
            dir.then("throughput_per_egress.csv"),
            PathBuf::from("results/2023-05-02_10-13-44/throughput_per_egress.csv")
        );
        assert_eq!(
            PathBuf::from("results").then("a").then("b.html"),
            PathBuf::from("results/a/b.html")
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            Path::new("results/2023-05-02_10-13-44").display_name(),
            "2023-05-02_10-13-44"
        );
        assert_eq!(Path::new("..").display_name(), "..");
    }
}
