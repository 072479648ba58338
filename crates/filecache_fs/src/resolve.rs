use std::path::{Component, Path, PathBuf};

impl crate::FileFS {
    /// Resolves `path` against the current working directory and normalizes
    /// it lexically. The target does not have to exist and symlinks are not
    /// followed, so two spellings of the same location always produce the
    /// same key.
    pub fn resolve<T: AsRef<Path>>(path: T) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            return normalize(path);
        }

        match std::env::current_dir() {
            Ok(cwd) => normalize(&cwd.join(path)),
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "Unable to determine working directory, resolving path as given"
                );
                normalize(path)
            }
        }
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component.as_os_str())
            }
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `/..` stays at `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
        }
    }
    normalized
}
