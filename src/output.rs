use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[error("error writing artifact `{}`: {source}", .path.display())]
pub struct WriteArtifactError {
    path: PathBuf,
    source: std::io::Error,
}

// whole-file overwrite; a failed write may leave a truncated artifact behind
pub fn write_artifact(path: &Path, source: &str) -> Result<(), WriteArtifactError> {
    fs::write(path, source).map_err(|e| WriteArtifactError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::write_artifact;

    #[test]
    fn writes_artifact_whole() {
        let path = std::env::temp_dir().join("astgen_write_artifact_test.go");

        write_artifact(&path, "package main\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "package main\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_failure_names_the_path() {
        let path = std::env::temp_dir()
            .join("astgen_missing_dir")
            .join("expr.go");

        let error = write_artifact(&path, "package main\n").unwrap_err();
        assert!(error.to_string().contains("expr.go"));
    }
}
