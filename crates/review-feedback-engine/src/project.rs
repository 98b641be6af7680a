use glob::Pattern;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".py", ".java", ".cs", ".go", ".rs", ".rb", ".php", ".html",
    ".css", ".scss", ".sql", ".json", ".md", ".yml", ".yaml", ".toml", ".ini", "Dockerfile",
    ".sh", ".ps1", ".xml", ".env.example",
];

pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    "dist",
    "build",
    "out",
    "coverage",
    ".next",
    ".idea",
];

pub const DEFAULT_IGNORED_FILES: &[&str] = &["package-lock.json", "yarn.lock", "pnpm-lock.yaml"];

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("Invalid project directory {path}: {reason}")]
    InvalidProjectDir { path: PathBuf, reason: String },
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A source file selected for review, with its path relative to the
/// project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: RelativePathBuf,
    pub content: String,
}

/// Decides which files of a project are uploaded for review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFilter {
    /// Suffixes such as `.rs`, or whole names such as `Dockerfile`.
    pub allowed_extensions: Vec<String>,
    /// Directory names skipped at any depth.
    pub ignored_dirs: Vec<String>,
    /// File names or glob patterns skipped at any depth.
    pub ignored_files: Vec<String>,
}

impl Default for UploadFilter {
    fn default() -> Self {
        Self {
            allowed_extensions: to_owned(DEFAULT_ALLOWED_EXTENSIONS),
            ignored_dirs: to_owned(DEFAULT_IGNORED_DIRS),
            ignored_files: to_owned(DEFAULT_IGNORED_FILES),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl UploadFilter {
    /// Whether a file at `path` (relative to the project root) is uploaded.
    pub fn accepts(&self, path: &RelativePath) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };

        if let Some(parent) = path.parent()
            && parent.components().any(|c| self.is_ignored_dir(c.as_str()))
        {
            return false;
        }

        if self.is_ignored_file(name) {
            return false;
        }

        self.allowed_extensions
            .iter()
            .any(|ext| allowed_entry_matches(ext, name))
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|d| d == name)
    }

    pub fn is_ignored_file(&self, name: &str) -> bool {
        self.ignored_files.iter().any(|entry| {
            entry == name
                || Pattern::new(entry)
                    .map(|p| p.matches(name))
                    .unwrap_or(false)
        })
    }
}

/// `.rs` style entries match as a suffix, bare names must match exactly.
fn allowed_entry_matches(entry: &str, name: &str) -> bool {
    if entry.starts_with('.') {
        name.ends_with(entry)
    } else {
        name == entry
    }
}

pub fn validate_project_dir(path: &Path) -> Result<(), ProjectError> {
    if !path.exists() || !path.is_dir() {
        return Err(ProjectError::InvalidProjectDir {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        });
    }

    Ok(())
}

/// Walks the project and reads every file the filter accepts, sorted by path.
pub fn collect_project_files(
    root: &Path,
    filter: &UploadFilter,
) -> Result<Vec<ProjectFile>, ProjectError> {
    validate_project_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, RelativePath::new(""), filter, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    log::debug!(
        "collected {} project files from {}",
        files.len(),
        root.display()
    );
    Ok(files)
}

fn scan_directory_recursive(
    dir: &Path,
    relative: &RelativePath,
    filter: &UploadFilter,
    files: &mut Vec<ProjectFile>,
) -> Result<(), ProjectError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ProjectError::Io { path, source }
    };

    let entries = fs::read_dir(dir).map_err(io_err(dir))?;

    for entry in entries {
        let entry = entry.map_err(io_err(dir))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let child = relative.join(&name);
        let file_type = entry.file_type().map_err(io_err(&path))?;

        // Linked directories can point back up the tree; linked files are read.
        if file_type.is_symlink() {
            if path.is_dir() {
                log::debug!("skipping linked directory {child}");
                continue;
            }
            if !path.is_file() {
                log::debug!("skipping dangling link {child}");
                continue;
            }
        }

        if file_type.is_dir() {
            if filter.is_ignored_dir(&name) {
                log::debug!("skipping ignored directory {child}");
                continue;
            }
            scan_directory_recursive(&path, &child, filter, files)?;
        } else if filter.accepts(&child) {
            let bytes = fs::read(&path).map_err(io_err(&path))?;
            match String::from_utf8(bytes) {
                Ok(content) => files.push(ProjectFile {
                    path: child,
                    content,
                }),
                Err(_) => log::warn!("skipping non UTF-8 file {child}"),
            }
        } else {
            log::trace!("skipping filtered file {child}");
        }
    }

    Ok(())
}

/// Concatenates files into the text submitted for review.
pub fn bundle(files: &[ProjectFile]) -> String {
    files
        .iter()
        .map(|f| format!("--- FILE: {} ---\n{}\n", f.path, f.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_project_dir};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("main.rs", true)]
    #[case("src/lib.rs", true)]
    #[case("Dockerfile", true)]
    #[case("deploy/Dockerfile", true)]
    #[case("my.Dockerfile", false)]
    #[case(".env.example", true)]
    #[case("config/app.env.example", true)]
    #[case(".env", false)]
    #[case("image.png", false)]
    #[case("README", false)]
    #[case("node_modules/pkg/index.js", false)]
    #[case("web/node_modules/pkg/index.js", false)]
    #[case("build/out.js", false)]
    #[case("builder/out.js", true)]
    #[case("package-lock.json", false)]
    #[case("nested/yarn.lock", false)]
    #[case("data.json", true)]
    #[case("MAIN.RS", false)]
    fn default_filter_rules(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(
            UploadFilter::default().accepts(RelativePath::new(path)),
            expected
        );
    }

    #[test]
    fn ignored_files_accept_glob_patterns() {
        let filter = UploadFilter {
            ignored_files: vec!["*.min.js".into()],
            ..UploadFilter::default()
        };
        assert!(!filter.accepts(RelativePath::new("static/app.min.js")));
        assert!(filter.accepts(RelativePath::new("static/app.js")));
    }

    #[test]
    fn empty_allow_list_accepts_nothing() {
        let filter = UploadFilter {
            allowed_extensions: vec![],
            ..UploadFilter::default()
        };
        assert!(!filter.accepts(RelativePath::new("main.rs")));
    }

    #[test]
    fn collect_reads_accepted_files_sorted() {
        let dir = create_test_project_dir();
        create_test_file(&dir, "src/main.rs", "fn main() {}");
        create_test_file(&dir, "Cargo.toml", "[package]");
        create_test_file(&dir, "logo.png", "binary-ish");
        create_test_file(&dir, "node_modules/dep/index.js", "x");
        create_test_file(&dir, "package-lock.json", "{}");

        let files = collect_project_files(dir.path(), &UploadFilter::default()).unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["Cargo.toml", "src/main.rs"]);
        assert_eq!(files[1].content, "fn main() {}");
    }

    #[test]
    fn collect_skips_non_utf8_files() {
        let dir = create_test_project_dir();
        create_test_file(&dir, "ok.py", "print(1)");
        std::fs::write(dir.path().join("bad.py"), [0xff, 0xfe, 0x00]).unwrap();

        let files = collect_project_files(dir.path(), &UploadFilter::default()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path.as_str(), "ok.py");
    }

    #[cfg(unix)]
    #[test]
    fn collect_does_not_follow_directory_links() {
        let dir = create_test_project_dir();
        create_test_file(&dir, "a.rs", "fn a() {}");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let files = collect_project_files(dir.path(), &UploadFilter::default()).unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.rs"]);
    }

    #[cfg(unix)]
    #[test]
    fn collect_reads_linked_files() {
        let dir = create_test_project_dir();
        let target = create_test_file(&dir, "real.rs", "fn r() {}");
        std::os::unix::fs::symlink(&target, dir.path().join("alias.rs")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.rs"), dir.path().join("dangling.rs"))
            .unwrap();

        let files = collect_project_files(dir.path(), &UploadFilter::default()).unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["alias.rs", "real.rs"]);
    }

    #[test]
    fn collect_rejects_missing_directory() {
        let result = collect_project_files(
            Path::new("/this/path/does/not/exist"),
            &UploadFilter::default(),
        );
        assert!(matches!(
            result,
            Err(ProjectError::InvalidProjectDir { .. })
        ));
    }

    #[test]
    fn validate_project_dir_rejects_file() {
        let dir = create_test_project_dir();
        let file = create_test_file(&dir, "a.rs", "");
        assert!(validate_project_dir(&file).is_err());
        assert!(validate_project_dir(dir.path()).is_ok());
    }

    #[test]
    fn bundle_formats_each_file() {
        let files = vec![
            ProjectFile {
                path: RelativePathBuf::from("a.rs"),
                content: "fn a() {}".into(),
            },
            ProjectFile {
                path: RelativePathBuf::from("b/c.py"),
                content: "pass".into(),
            },
        ];
        assert_eq!(
            bundle(&files),
            "--- FILE: a.rs ---\nfn a() {}\n\n--- FILE: b/c.py ---\npass\n"
        );
    }

    #[test]
    fn bundle_of_nothing_is_empty() {
        assert_eq!(bundle(&[]), "");
    }
}
