//! Leaf entry classification

use std::fs::Metadata;
use std::path::Path;

use super::node::Classification;

/// File name suffixes treated as images.
pub const IMAGE_SUFFIXES: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff"];

/// File name suffixes treated as archives. Compound suffixes are matched
/// against the whole name, so `backup.tar.gz` is an archive.
pub const ARCHIVE_SUFFIXES: &[&str] = &[".zip", ".tar", ".tar.gz", ".tar.bz2", ".rar", ".7z"];

/// Classify a non-directory entry from its own (non-following) metadata.
///
/// First match wins: symlink, executable regular file, image, archive, plain.
pub fn classify(path: &Path, meta: &Metadata) -> Classification {
    if meta.file_type().is_symlink() {
        return Classification::Symlink;
    }
    if meta.is_file() && is_owner_executable(meta) {
        return Classification::Executable;
    }

    let name = path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    if has_suffix(&name, IMAGE_SUFFIXES) {
        Classification::Image
    } else if has_suffix(&name, ARCHIVE_SUFFIXES) {
        Classification::Archive
    } else {
        Classification::Plain
    }
}

/// Check whether a file name ends in one of `suffixes`. Matching is
/// case-sensitive, and a name that is only the suffix (a dotfile such as
/// `.png`) does not count.
pub fn has_suffix(name: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|s| name.len() > s.len() && name.ends_with(s))
}

#[cfg(unix)]
fn is_owner_executable(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
fn is_owner_executable(_meta: &Metadata) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn classify_file(dir: &TempDir, name: &str) -> Classification {
        let path = dir.path().join(name);
        fs::write(&path, b"data").unwrap();
        let meta = fs::symlink_metadata(&path).unwrap();
        classify(&path, &meta)
    }

    #[test]
    fn test_has_suffix() {
        assert!(has_suffix("photo.png", IMAGE_SUFFIXES));
        assert!(has_suffix("backup.tar.gz", ARCHIVE_SUFFIXES));
        assert!(has_suffix("backup.tar.bz2", ARCHIVE_SUFFIXES));
        assert!(!has_suffix("backup.gz", ARCHIVE_SUFFIXES));
        assert!(!has_suffix(".png", IMAGE_SUFFIXES));
        assert!(!has_suffix("png", IMAGE_SUFFIXES));
    }

    #[test]
    fn test_classify_by_extension() {
        let dir = TempDir::new().unwrap();
        assert_eq!(classify_file(&dir, "a.jpeg"), Classification::Image);
        assert_eq!(classify_file(&dir, "c.7z"), Classification::Archive);
        assert_eq!(classify_file(&dir, "d.tar.gz"), Classification::Archive);
        assert_eq!(classify_file(&dir, "notes.txt"), Classification::Plain);
        assert_eq!(classify_file(&dir, "Makefile"), Classification::Plain);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        assert_eq!(classify_file(&dir, "SHOT.PNG"), Classification::Plain);
        assert_eq!(classify_file(&dir, "B.Jpg"), Classification::Plain);
        assert_eq!(classify_file(&dir, "BACKUP.TAR.GZ"), Classification::Plain);
        assert_eq!(classify_file(&dir, "shot.png"), Classification::Image);
        assert_eq!(classify_file(&dir, "backup.tar.bz2"), Classification::Archive);
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_takes_precedence_over_extension() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.png");
        fs::write(&path, b"#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        let meta = fs::symlink_metadata(&path).unwrap();
        assert_eq!(classify(&path, &meta), Classification::Executable);
    }

    #[cfg(unix)]
    #[test]
    fn test_group_execute_bit_alone_is_not_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tool");
        fs::write(&path, b"x").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o654)).unwrap();
        let meta = fs::symlink_metadata(&path).unwrap();
        assert_eq!(classify(&path, &meta), Classification::Plain);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_image_is_symlink() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("photo.png");
        fs::write(&target, b"png").unwrap();
        let link = dir.path().join("link.png");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let meta = fs::symlink_metadata(&link).unwrap();
        assert_eq!(classify(&link, &meta), Classification::Symlink);
    }
}
