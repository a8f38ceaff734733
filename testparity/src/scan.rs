use std::path::{Path, PathBuf};

use testparity_core::error::ParityError;
use testparity_core::model::{Platform, TestMap, count_tests};

pub mod apple;
pub mod jvm;
pub mod managed;

/// Turns one source file into test classes and their test methods.
pub trait PlatformScanner {
    fn platform(&self) -> Platform;

    fn scan_source(&self, source: &str, tests: &mut TestMap);
}

pub fn scanner_for(platform: Platform) -> &'static dyn PlatformScanner {
    match platform {
        Platform::Apple => &apple::AppleScanner,
        Platform::Managed => &managed::ManagedScanner,
        Platform::Jvm => &jvm::JvmScanner,
    }
}

/// Scans the files directly under `dir` that carry the platform's extension.
pub fn scan_directory(
    scanner: &dyn PlatformScanner,
    dir: &Path,
    skip_files: &[String],
) -> Result<TestMap, ParityError> {
    let platform = scanner.platform();
    if !dir.is_dir() {
        return Err(ParityError::MissingSource {
            platform,
            path: dir.to_path_buf(),
        });
    }

    let mut tests = TestMap::new();
    for path in list_source_files(dir, platform.source_extension())? {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if skip_files.iter().any(|skipped| *skipped == file_name) {
            tracing::debug!(%platform, file = %file_name, "skipping file");
            continue;
        }
        let bytes = std::fs::read(&path).map_err(|source| ParityError::Io {
            path: path.clone(),
            source,
        })?;
        scanner.scan_source(&String::from_utf8_lossy(&bytes), &mut tests);
    }

    tracing::info!(
        %platform,
        dir = %dir.display(),
        classes = tests.len(),
        tests = count_tests(&tests),
        "scanned"
    );
    Ok(tests)
}

fn list_source_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ParityError> {
    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| walk_error(dir, err))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn walk_error(dir: &Path, err: walkdir::Error) -> ParityError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    ParityError::Io {
        path,
        source: err.into(),
    }
}

/// Appends `method` to the class currently being scanned, if any.
fn record_method(tests: &mut TestMap, class: Option<&str>, method: String) {
    if let Some(class) = class {
        tests.entry(class.to_string()).or_default().push(method);
    }
}

/// Starts a fresh method list for `class`, replacing any earlier declaration.
fn open_class(tests: &mut TestMap, class: &str) {
    tests.insert(class.to_string(), Vec::new());
}

fn is_test_class(name: &str) -> bool {
    name.ends_with("Test")
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
