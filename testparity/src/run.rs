use std::path::{Path, PathBuf};

use testparity_core::aggregate::{ParityReport, ScannedSuites, build_reports};
use testparity_core::config::load_config;
use testparity_core::error::ParityError;
use testparity_core::model::Platform;

use crate::render::{render_diff_report, render_inventory, write_report_file};
use crate::scan::{scan_directory, scanner_for};

pub const DIFF_REPORT_FILE: &str = "diff.puml";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub uml_directory: PathBuf,
    pub config_path: Option<PathBuf>,
    pub csharp_path: PathBuf,
    pub apple_path: Option<PathBuf>,
    pub java_path: Option<PathBuf>,
    pub verbose: bool,
}

impl RunOptions {
    fn source_dir(&self, platform: Platform) -> Option<&Path> {
        match platform {
            Platform::Apple => self.apple_path.as_deref(),
            Platform::Managed => Some(self.csharp_path.as_path()),
            Platform::Jvm => self.java_path.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub report: ParityReport,
}

/// Scans every requested platform, diffs them, and writes `diff.puml`.
pub fn run(options: &RunOptions) -> Result<RunSummary, ParityError> {
    let config = load_config(options.config_path.as_deref())?;
    let tables = config.tables();
    let skips = config.skip_sets();

    let mut suites = ScannedSuites::default();
    for platform in [Platform::Managed, Platform::Apple, Platform::Jvm] {
        let Some(dir) = options.source_dir(platform) else {
            continue;
        };
        let tests = scan_directory(scanner_for(platform), dir, config.skip_files())?;
        if options.verbose {
            let path = options.uml_directory.join(platform.inventory_file_name());
            write_report_file(&path, |out| render_inventory(out, &tests))?;
        }
        suites.set(platform, tests);
    }

    let report = build_reports(&suites, &tables, &skips);
    let report_path = options.uml_directory.join(DIFF_REPORT_FILE);
    write_report_file(&report_path, |out| render_diff_report(out, &report))?;
    Ok(RunSummary {
        report_path,
        report,
    })
}
