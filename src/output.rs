use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Format of the default output root.
pub const DEFAULT_ROOT_FORMAT: &str = "corns_result_%Y-%m-%d_%H:%M:%S";

/// Default output root for a run started at `now`.
pub fn default_root(now: DateTime<Local>) -> String {
    now.format(DEFAULT_ROOT_FORMAT).to_string()
}

/// Where the report goes, and whether the requested name had to be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    /// The requested file, when it already existed and was not used.
    pub replaced: Option<PathBuf>,
}

/// Resolve `<root>.csv` inside `dir`.
///
/// Without a requested root the default is used as-is. A requested file that
/// already exists is never overwritten; the default root is used instead.
pub fn resolve(dir: &Path, requested: Option<&str>, default_root: &str) -> OutputTarget {
    let fallback = dir.join(format!("{default_root}.csv"));
    let Some(root) = requested else {
        return OutputTarget {
            path: fallback,
            replaced: None,
        };
    };

    let wanted = dir.join(format!("{root}.csv"));
    if wanted.exists() {
        OutputTarget {
            path: fallback,
            replaced: Some(wanted),
        }
    } else {
        OutputTarget {
            path: wanted,
            replaced: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("corns_output_{name}_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_root_format() {
        let now = Local.with_ymd_and_hms(2016, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(default_root(now), "corns_result_2016-03-07_09:05:01");
    }

    #[test]
    fn test_no_request_uses_default() {
        let dir = scratch_dir("default");
        let target = resolve(&dir, None, "corns_result_x");
        assert_eq!(target.path, dir.join("corns_result_x.csv"));
        assert_eq!(target.replaced, None);
    }

    #[test]
    fn test_free_name_is_used() {
        let dir = scratch_dir("free");
        let _ = std::fs::remove_file(dir.join("mine.csv"));
        let target = resolve(&dir, Some("mine"), "corns_result_x");
        assert_eq!(target.path, dir.join("mine.csv"));
        assert_eq!(target.replaced, None);
    }

    #[test]
    fn test_existing_name_falls_back() {
        let dir = scratch_dir("taken");
        std::fs::write(dir.join("taken.csv"), "keep me").unwrap();

        let target = resolve(&dir, Some("taken"), "corns_result_x");
        assert_eq!(target.path, dir.join("corns_result_x.csv"));
        assert_eq!(target.replaced, Some(dir.join("taken.csv")));
        assert_eq!(std::fs::read_to_string(dir.join("taken.csv")).unwrap(), "keep me");
    }
}
