use crate::utils::error::{BcastError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str();
    let blank = raw.is_empty() || raw.to_str().is_some_and(|s| s.trim().is_empty());
    if blank {
        return Err(BcastError::InvalidArgument {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.as_encoded_bytes().contains(&0) {
        return Err(BcastError::InvalidArgument {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source", Path::new("/data/set")).is_ok());
        assert!(validate_path("source", Path::new("relative/dir")).is_ok());
        assert!(validate_path("source", Path::new("")).is_err());
        assert!(validate_path("source", Path::new("   ")).is_err());
        assert!(validate_path("source", Path::new("bad\0path")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_path_accepts_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/data/set\xff"));
        assert!(validate_path("source", path).is_ok());

        let path = Path::new(OsStr::from_bytes(b"/data\xff\0"));
        assert!(validate_path("source", path).is_err());
    }

    #[test]
    fn test_validate_optional_path() {
        assert!(validate_optional_path("mpiexec", None).is_ok());
        assert!(validate_optional_path("mpiexec", Some(Path::new("mpirun"))).is_ok());

        match validate_optional_path("bcast", Some(Path::new(""))) {
            Err(BcastError::InvalidArgument { field, .. }) => assert_eq!(field, "bcast"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
