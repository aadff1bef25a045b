use crate::domain::ports::Confirmer;
use crate::utils::error::{BcastError, Result};
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against `base` and normalises it lexically.
///
/// `.` components are dropped and `..` pops the previous component without
/// touching the file system, so symlinks are never followed.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

pub fn check_source_exists(source: &Path) -> Result<()> {
    if !source.exists() {
        return Err(BcastError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    Ok(())
}

/// Returns `destination/<basename of source>` if that entry already exists.
///
/// A source with no final component, such as `/`, has no basename to place
/// in `destination` and never collides, so it is broadcast without a prompt.
pub fn find_collision(source: &Path, destination: &Path) -> Option<PathBuf> {
    let name = source.file_name()?;
    let target = destination.join(name);
    target.exists().then_some(target)
}

/// Warns about an existing entry and asks whether to overwrite it.
///
/// Returns `Ok(true)` when there is nothing to overwrite or the user agreed.
pub async fn confirm_overwrite<F: Confirmer + ?Sized>(
    confirmer: &F,
    source: &Path,
    destination: &Path,
) -> Result<bool> {
    let Some(target) = find_collision(source, destination) else {
        return Ok(true);
    };

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::debug!("Destination entry {} already exists", target.display());
    println!(
        "Warning: '{}' already exists in destination directory '{}'.",
        name,
        destination.display()
    );

    confirmer.confirm("Do you want to overwrite? [y/N]: ").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct CountingConfirmer {
        answer: bool,
        asked: AtomicUsize,
    }

    #[async_trait]
    impl Confirmer for CountingConfirmer {
        async fn confirm(&self, _question: &str) -> Result<bool> {
            self.asked.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    #[test]
    fn test_absolutize_relative_and_dots() {
        let base = Path::new("/home/user/work");

        assert_eq!(
            absolutize(Path::new("data/set"), base),
            PathBuf::from("/home/user/work/data/set")
        );
        assert_eq!(
            absolutize(Path::new("./data/../other/"), base),
            PathBuf::from("/home/user/work/other")
        );
        assert_eq!(
            absolutize(Path::new("/shared/./x/.."), base),
            PathBuf::from("/shared")
        );
        assert_eq!(absolutize(Path::new("../../../.."), base), PathBuf::from("/"));
    }

    #[test]
    fn test_check_source_exists() {
        let temp_dir = TempDir::new().unwrap();
        assert!(check_source_exists(temp_dir.path()).is_ok());

        let missing = temp_dir.path().join("missing");
        match check_source_exists(&missing) {
            Err(BcastError::SourceNotFound { path }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_find_collision() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let source = src_dir.path().join("dataset");
        std::fs::create_dir(&source).unwrap();

        assert_eq!(find_collision(&source, dest_dir.path()), None);

        std::fs::write(dest_dir.path().join("dataset"), b"old").unwrap();
        assert_eq!(
            find_collision(&source, dest_dir.path()),
            Some(dest_dir.path().join("dataset"))
        );
    }

    #[test]
    fn test_root_source_has_no_collision() {
        let dest_dir = TempDir::new().unwrap();
        assert_eq!(find_collision(Path::new("/"), dest_dir.path()), None);
    }

    #[tokio::test]
    async fn test_root_source_never_prompts() {
        let dest_dir = TempDir::new().unwrap();
        let confirmer = CountingConfirmer {
            answer: false,
            asked: AtomicUsize::new(0),
        };

        let proceed = confirm_overwrite(&confirmer, Path::new("/"), dest_dir.path())
            .await
            .unwrap();
        assert!(proceed);
        assert_eq!(confirmer.asked.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_confirm_overwrite_only_asks_on_collision() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let source = src_dir.path().join("input.bin");
        std::fs::write(&source, b"new").unwrap();

        let confirmer = CountingConfirmer {
            answer: false,
            asked: AtomicUsize::new(0),
        };

        let proceed = confirm_overwrite(&confirmer, &source, dest_dir.path())
            .await
            .unwrap();
        assert!(proceed);
        assert_eq!(confirmer.asked.load(Ordering::SeqCst), 0);

        std::fs::write(dest_dir.path().join("input.bin"), b"old").unwrap();
        let proceed = confirm_overwrite(&confirmer, &source, dest_dir.path())
            .await
            .unwrap();
        assert!(!proceed);
        assert_eq!(confirmer.asked.load(Ordering::SeqCst), 1);
    }
}
