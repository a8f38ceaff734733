use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use testparity_core::aggregate::{ParityReport, PlatformReport};
use testparity_core::error::ParityError;
use testparity_core::model::TestMap;

const BACKGROUND: &str = "skinparam backgroundColor #DDDDFF";

/// PlantUML namespaces of missing tests, one per analyzed platform.
pub fn render_diff_report(out: &mut impl Write, report: &ParityReport) -> std::io::Result<()> {
    writeln!(out, "@startuml")?;
    writeln!(out, "{BACKGROUND}")?;
    for section in &report.sections {
        render_section(out, section)?;
    }
    writeln!(out, "@enduml")
}

fn render_section(out: &mut impl Write, section: &PlatformReport) -> std::io::Result<()> {
    let package = section.platform.package_name();
    writeln!(out, "namespace {package} {{")?;
    for (class, entries) in section.missing.iter() {
        writeln!(out, "    class {class} {{")?;
        for entry in entries {
            writeln!(out, "        +{entry}")?;
        }
        writeln!(out, "    }}")?;
        writeln!(out)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "note top of {package}")?;
    writeln!(out, "{} total tests scanned", section.total_tests)?;
    writeln!(out, "end note")?;
    writeln!(out)
}

/// Every scanned test of one platform, for `--verbose` runs.
pub fn render_inventory(out: &mut impl Write, tests: &TestMap) -> std::io::Result<()> {
    writeln!(out, "@startuml")?;
    writeln!(out, "{BACKGROUND}")?;
    writeln!(out, "package \"CBL Tests\" {{")?;
    for (class, methods) in tests.iter().filter(|(_, methods)| !methods.is_empty()) {
        writeln!(out, "    class {class} {{")?;
        for method in methods {
            writeln!(out, "        +{method}()")?;
        }
        writeln!(out, "    }}")?;
        writeln!(out)?;
    }
    writeln!(out, "}}")?;
    writeln!(out, "@enduml")
}

pub fn write_report_file(
    path: &Path,
    render: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<(), ParityError> {
    let to_error = |source| ParityError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    render(&mut out).map_err(to_error)?;
    out.flush().map_err(to_error)?;
    tracing::info!(path = %path.display(), "wrote report");
    Ok(())
}
