use std::path::Path;

use serde::Deserialize;

use crate::error::ParityError;
use crate::model::Platform;
use crate::skip::SkipSet;
use crate::translate::{TranslationChain, TranslationTable};

/// Keys are PascalCase; camelCase spellings are accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParityConfig {
    /// .NET name -> Apple name.
    #[serde(alias = "appleFunctionMap")]
    pub apple_function_map: TranslationTable,
    /// Apple name -> .NET name. Inverted `AppleFunctionMap` entries are layered on top.
    #[serde(alias = "fromAppleFunctionMap")]
    pub from_apple_function_map: TranslationTable,
    /// .NET name -> Java name.
    #[serde(alias = "javaFunctionMap")]
    pub java_function_map: TranslationTable,
    /// Java name -> .NET name. Inverted `JavaFunctionMap` entries are layered on top.
    #[serde(alias = "fromJavaFunctionMap")]
    pub from_java_function_map: TranslationTable,

    #[serde(rename = "CSharpSkip", alias = "cSharpSkip", alias = "csharpSkip")]
    pub csharp_skip: Vec<String>,
    #[serde(alias = "appleSkip")]
    pub apple_skip: Vec<String>,
    #[serde(alias = "javaSkip")]
    pub java_skip: Vec<String>,
    #[serde(alias = "skipFiles")]
    pub skip_files: Vec<String>,
}

impl ParityConfig {
    pub fn tables(&self) -> TranslationTables {
        let mut from_apple = self.from_apple_function_map.clone();
        from_apple.merge(&self.apple_function_map.inverted());
        let mut from_java = self.from_java_function_map.clone();
        from_java.merge(&self.java_function_map.inverted());
        TranslationTables {
            to_apple: self.apple_function_map.clone(),
            from_apple,
            to_java: self.java_function_map.clone(),
            from_java,
        }
    }

    pub fn skip_set(&self, platform: Platform) -> SkipSet {
        let names = match platform {
            Platform::Apple => &self.apple_skip,
            Platform::Managed => &self.csharp_skip,
            Platform::Jvm => &self.java_skip,
        };
        names.iter().cloned().collect()
    }

    pub fn skip_sets(&self) -> SkipSets {
        SkipSets {
            apple: self.skip_set(Platform::Apple),
            managed: self.skip_set(Platform::Managed),
            jvm: self.skip_set(Platform::Jvm),
        }
    }

    pub fn skip_files(&self) -> &[String] {
        &self.skip_files
    }
}

/// Translation tables for every comparison direction, built once per run.
#[derive(Debug, Clone, Default)]
pub struct TranslationTables {
    pub to_apple: TranslationTable,
    pub from_apple: TranslationTable,
    pub to_java: TranslationTable,
    pub from_java: TranslationTable,
}

impl TranslationTables {
    /// Chain translating `source` names into `target` names.
    ///
    /// Authored tables are keyed by .NET names, so Java <-> Apple goes through
    /// the .NET vocabulary in two hops.
    pub fn chain(&self, source: Platform, target: Platform) -> Option<TranslationChain<'_>> {
        let hops = match (source, target) {
            (Platform::Managed, Platform::Apple) => vec![&self.to_apple],
            (Platform::Jvm, Platform::Apple) => vec![&self.from_java, &self.to_apple],
            (Platform::Apple, Platform::Managed) => vec![&self.from_apple],
            (Platform::Jvm, Platform::Managed) => vec![&self.from_java],
            (Platform::Apple, Platform::Jvm) => vec![&self.from_apple, &self.to_java],
            (Platform::Managed, Platform::Jvm) => vec![&self.to_java],
            _ => return None,
        };
        Some(TranslationChain::new(hops))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkipSets {
    pub apple: SkipSet,
    pub managed: SkipSet,
    pub jvm: SkipSet,
}

impl SkipSets {
    pub fn for_platform(&self, platform: Platform) -> &SkipSet {
        match platform {
            Platform::Apple => &self.apple,
            Platform::Managed => &self.managed,
            Platform::Jvm => &self.jvm,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ParityConfig, ParityError> {
    match path {
        Some(path) => load_config_from_path(path),
        None => Ok(ParityConfig::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ParityConfig, ParityError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ParityError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = raw.trim_start_matches('\u{feff}');
    let ext = path
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str::<ParityConfig>(raw).map_err(|e| e.to_string()),
        "toml" => toml::from_str::<ParityConfig>(raw).map_err(|e| e.to_string()),
        _ => parse_json_config(raw),
    };
    let config = parsed.map_err(|message| ParityError::ConfigParse {
        path: path.to_path_buf(),
        message,
    })?;
    tracing::info!(
        path = %path.display(),
        apple_renames = config.apple_function_map.len(),
        java_renames = config.java_function_map.len(),
        skip_files = config.skip_files.len(),
        "loaded config"
    );
    Ok(config)
}

fn parse_json_config(raw: &str) -> Result<ParityConfig, String> {
    json5::from_str::<ParityConfig>(raw)
        .or_else(|_| serde_json::from_str::<ParityConfig>(raw))
        .map_err(|err| err.to_string())
}
