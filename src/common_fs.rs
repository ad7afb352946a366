//! A module to hold all common file system functionality.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Walks a given `root_path` recursively and returns every file found in it.
///
/// Each returned path is `root_path` joined with the file's path relative to
/// `root_path`. Within a directory, its files are listed before the contents of its
/// subdirectories; entries are otherwise kept in the order the OS reports them.
///
/// Symbolic links to directories are not followed. Any error from reading a
/// directory (including a missing `root_path`) is returned as is.
pub fn list_all_files(root_path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut sub_dirs = Vec::new();
    for entry in fs::read_dir(root_path)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            sub_dirs.push(path);
        } else if file_type.is_symlink() {
            if path.is_dir() {
                log::debug!("not following symlinked directory {}", path.display());
            } else {
                files.push(path);
            }
        } else {
            files.push(path);
        }
    }
    for dir in sub_dirs {
        files.extend(list_all_files(&dir)?);
    }
    Ok(files)
}

/// Does `entry` use at least 1 of the listed file `extensions`?
///
/// Only the part of the file name after the last `.` is compared, so a file named
/// `xc` is not mistaken for a `c` source.
pub fn is_source_file<S: AsRef<str>>(entry: &Path, extensions: &[S]) -> bool {
    match entry.extension().and_then(|ext| ext.to_str()) {
        Some(extension) => extensions.iter().any(|ext| ext.as_ref() == extension),
        None => false,
    }
}

/// Keeps only the `files` that use one of the given `extensions`, preserving order.
pub fn filter_source_files<S: AsRef<str>>(files: Vec<PathBuf>, extensions: &[S]) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|file| !file.as_os_str().is_empty())
        .filter(|file| {
            let is_src = is_source_file(file, extensions);
            if is_src {
                log::debug!("{} is a source file", file.to_string_lossy().replace('\\', "/"));
            }
            is_src
        })
        .collect()
}

/// Walks a given `root_path` recursively and returns the files that use at least 1
/// of the `extensions`.
pub fn list_source_files<S: AsRef<str>>(
    root_path: &Path,
    extensions: &[S],
) -> io::Result<Vec<PathBuf>> {
    Ok(filter_source_files(list_all_files(root_path)?, extensions))
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::path::{Path, PathBuf};

    use tempfile::tempdir;

    use super::{filter_source_files, is_source_file, list_all_files, list_source_files};

    const EXTENSIONS: [&str; 5] = ["c", "cc", "cpp", "h", "hpp"];

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }

    #[test]
    fn keeps_sources_drops_text() {
        let dir = tempdir().unwrap();
        for name in ["main.c", "util.cpp", "util.h", "notes.txt"] {
            touch(&dir.path().join(name));
        }
        let files = list_source_files(dir.path(), &EXTENSIONS).unwrap();
        assert_eq!(
            sorted(files),
            sorted(vec![
                dir.path().join("main.c"),
                dir.path().join("util.cpp"),
                dir.path().join("util.h"),
            ])
        );
    }

    #[test]
    fn walk_dir_recursively() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("foo");
        touch(&root.join("a.cpp"));
        touch(&root.join("bar").join("b.h"));
        touch(&root.join("readme.md"));
        touch(&root.join("bar").join("baz").join("qux").join("deep.hpp"));

        let all = list_all_files(&root).unwrap();
        assert_eq!(all.len(), 4);

        let files = list_source_files(&root, &EXTENSIONS).unwrap();
        assert_eq!(
            sorted(files),
            sorted(vec![
                root.join("a.cpp"),
                root.join("bar").join("b.h"),
                root.join("bar").join("baz").join("qux").join("deep.hpp"),
            ])
        );
    }

    #[test]
    fn files_before_sub_dirs() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("sub").join("inner.c"));
        touch(&dir.path().join("outer.c"));
        let files = list_all_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("outer.c"), dir.path().join("sub").join("inner.c")]
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let err = list_all_files(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn extension_not_suffix() {
        assert!(is_source_file(Path::new("src/x.c"), &EXTENSIONS));
        assert!(!is_source_file(Path::new("src/xc"), &EXTENSIONS));
        assert!(!is_source_file(Path::new("src/foo.hc"), &EXTENSIONS));
        assert!(!is_source_file(Path::new("src/foo.CPP"), &EXTENSIONS));
        assert!(!is_source_file(Path::new("Makefile"), &EXTENSIONS));
    }

    #[test]
    fn filter_preserves_order() {
        let input = vec![
            PathBuf::from("z.h"),
            PathBuf::from("readme.md"),
            PathBuf::new(),
            PathBuf::from("a.cc"),
            PathBuf::from("m.c"),
        ];
        assert_eq!(
            filter_source_files(input, &EXTENSIONS),
            vec![PathBuf::from("z.h"), PathBuf::from("a.cc"), PathBuf::from("m.c")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_dirs_not_followed() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        touch(&real.join("a.c"));
        std::os::unix::fs::symlink(&real, dir.path().join("link")).unwrap();
        let files = list_source_files(dir.path(), &EXTENSIONS).unwrap();
        assert_eq!(files, vec![real.join("a.c")]);
    }
}
