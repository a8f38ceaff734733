use anyhow::Context;
use clap::Parser;

use testparity::args::Cli;

fn main() {
    testparity::logging::init_tracing();
    if let Err(err) = run() {
        eprintln!("testparity: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let options = Cli::parse().into_run_options()?;
    let summary = testparity::run::run(&options).with_context(|| {
        format!(
            "failed to build parity report in {}",
            options.uml_directory.display()
        )
    })?;
    let missing = summary
        .report
        .sections
        .iter()
        .map(|section| format!("{}={}", section.platform, section.missing.entry_count()))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{} ({missing})", summary.report_path.display());
    Ok(())
}
