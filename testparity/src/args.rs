use std::path::PathBuf;

use clap::Parser;
use dialoguer::Input;

use crate::run::RunOptions;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "testparity")]
#[command(
    about = "Diffs the .NET, Java and Apple unit test suites into a PlantUML report",
    long_about = None
)]
pub struct Cli {
    /// The path to the folder to read Apple unit tests from
    #[arg(short = 'a', long, value_name = "path")]
    pub apple_path: Option<PathBuf>,

    /// The path to the file to read the program configuration from
    #[arg(short = 'c', long, value_name = "path")]
    pub config_path: Option<PathBuf>,

    /// The path to the folder to read C# unit tests from
    #[arg(short = 's', long, value_name = "path")]
    pub csharp_path: Option<PathBuf>,

    /// The path to the folder to read Java unit tests from
    #[arg(short = 'j', long, value_name = "path")]
    pub java_path: Option<PathBuf>,

    /// The path to the directory to write UML output to
    #[arg(short = 'u', long, value_name = "path")]
    pub uml_directory: Option<PathBuf>,

    /// Also write per platform unit test lists
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Fills required paths, asking on the terminal for any that were not given.
    pub fn into_run_options(self) -> anyhow::Result<RunOptions> {
        let uml_directory = match self.uml_directory {
            Some(dir) => dir,
            None => prompt_path("Please enter the path to the directory to write the UML to")?,
        };
        let csharp_path = match self.csharp_path {
            Some(dir) => dir,
            None => prompt_path("Please enter the path to the folder to read C# unit tests from")?,
        };
        Ok(RunOptions {
            uml_directory,
            config_path: self.config_path,
            csharp_path,
            apple_path: self.apple_path,
            java_path: self.java_path,
            verbose: self.verbose,
        })
    }
}

fn prompt_path(prompt: &str) -> anyhow::Result<PathBuf> {
    loop {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(PathBuf::from(answer));
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from([
            "testparity", "-s", "net", "-a", "apple", "-j", "java", "-u", "out", "-c", "cfg.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.csharp_path.as_deref(), Some(std::path::Path::new("net")));
        assert_eq!(cli.apple_path.as_deref(), Some(std::path::Path::new("apple")));
        assert_eq!(cli.java_path.as_deref(), Some(std::path::Path::new("java")));
        assert_eq!(cli.uml_directory.as_deref(), Some(std::path::Path::new("out")));
        assert_eq!(cli.config_path.as_deref(), Some(std::path::Path::new("cfg.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn optional_platforms_stay_unset() {
        let cli = Cli::try_parse_from(["testparity", "--csharp-path", "net", "--uml-directory", "out"])
            .unwrap();
        assert!(cli.apple_path.is_none());
        assert!(cli.java_path.is_none());
        assert!(!cli.verbose);

        let options = cli.into_run_options().unwrap();
        assert_eq!(options.csharp_path, std::path::PathBuf::from("net"));
        assert_eq!(options.uml_directory, std::path::PathBuf::from("out"));
    }
}
