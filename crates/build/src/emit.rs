use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::target::{OutputTarget, RenderedFile};

/// Write rendered files in order. The first failure stops the remaining
/// writes.
pub fn write_files(files: &[RenderedFile]) -> Result<()> {
    for file in files {
        if let Some(parent) = file.destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| BuildError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&file.destination, &file.contents).map_err(|source| BuildError::Write {
            path: file.destination.clone(),
            source,
        })?;
        log::info!("✔︎ {}", file.destination.display());
    }
    Ok(())
}

/// Remove every target's file. Missing files are skipped. The build
/// directory goes too when this call emptied it, unless it names the
/// current, parent or root directory.
pub fn remove_files(targets: &[OutputTarget], build_path: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for target in targets {
        match fs::remove_file(&target.destination) {
            Ok(()) => {
                log::info!("Removed {}", target.destination.display());
                removed.push(target.destination.clone());
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("Nothing to remove at {}", target.destination.display());
            }
            Err(source) => {
                return Err(BuildError::Remove {
                    path: target.destination.clone(),
                    source,
                })
            }
        }
    }

    if removed.is_empty() || !is_removable_dir(build_path) {
        return Ok(removed);
    }
    let is_empty = fs::read_dir(build_path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false);
    if is_empty {
        fs::remove_dir(build_path).map_err(|source| BuildError::Remove {
            path: build_path.to_path_buf(),
            source,
        })?;
        log::debug!("Removed empty {}", build_path.display());
    }
    Ok(removed)
}

fn is_removable_dir(path: &Path) -> bool {
    matches!(path.components().next_back(), Some(Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerType;
    use tempfile::tempdir;

    fn rendered(path: PathBuf) -> RenderedFile {
        RenderedFile {
            destination: path,
            pointer: PointerType::Coarse,
            declarations: 0,
            contents: "x\n".to_string(),
        }
    }

    #[test]
    fn creates_missing_directories() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out/nested/coarse.css");
        write_files(&[rendered(path.clone())]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "x\n");
    }

    #[test]
    fn write_failure_stops_remaining_files() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let later = temp.path().join("later.css");

        let err = write_files(&[rendered(blocker.join("coarse.css")), rendered(later.clone())])
            .unwrap_err();
        assert!(matches!(err, BuildError::Write { .. }));
        assert!(!later.exists());
    }

    #[test]
    fn remove_skips_missing_and_drops_empty_dir() {
        let temp = tempdir().unwrap();
        let build = temp.path().join("build");
        let targets: Vec<_> = PointerType::ALL
            .into_iter()
            .map(|p| OutputTarget::for_pointer(&build, p, true, true))
            .collect();
        write_files(&[rendered(targets[0].destination.clone())]).unwrap();

        let removed = remove_files(&targets, &build).unwrap();
        assert_eq!(removed, vec![targets[0].destination.clone()]);
        assert!(!build.exists());
    }

    #[test]
    fn remove_keeps_directory_it_did_not_empty() {
        let temp = tempdir().unwrap();
        let build = temp.path().join("build");
        fs::create_dir_all(&build).unwrap();
        let targets = [OutputTarget::for_pointer(&build, PointerType::Fine, true, true)];

        assert!(remove_files(&targets, &build).unwrap().is_empty());
        assert!(build.exists());
    }

    #[test]
    fn remove_keeps_shared_directory_contents() {
        let temp = tempdir().unwrap();
        let build = temp.path().join("build");
        let target = OutputTarget::for_pointer(&build, PointerType::Coarse, true, true);
        write_files(&[rendered(target.destination.clone())]).unwrap();
        fs::write(build.join("site.css"), "body {}").unwrap();

        remove_files(&[target], &build).unwrap();
        assert!(build.join("site.css").exists());
    }

    #[test]
    fn current_parent_and_root_dirs_are_never_removed() {
        assert!(!is_removable_dir(Path::new(".")));
        assert!(!is_removable_dir(Path::new("./.")));
        assert!(!is_removable_dir(Path::new("..")));
        assert!(!is_removable_dir(Path::new("/")));
        assert!(is_removable_dir(Path::new("build")));
        assert!(is_removable_dir(Path::new("./out/css")));
    }
}
