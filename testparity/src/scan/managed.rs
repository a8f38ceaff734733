use once_cell::sync::Lazy;
use regex::Regex;
use testparity_core::model::{Platform, TestMap};

use super::{PlatformScanner, is_test_class, open_class, record_method};

static CLASS_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public (?:sealed )?class (\S+)").unwrap());

/// xunit suites: `[Fact]` marks the method declared on the following line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagedScanner;

impl PlatformScanner for ManagedScanner {
    fn platform(&self) -> Platform {
        Platform::Managed
    }

    fn scan_source(&self, source: &str, tests: &mut TestMap) {
        let mut class: Option<String> = None;
        let mut after_fact = false;
        for line in source.lines().map(str::trim) {
            if class.is_none() {
                if let Some(caps) = CLASS_SIGNATURE.captures(line) {
                    let name = &caps[1];
                    if is_test_class(name) {
                        open_class(tests, name);
                        class = Some(name.to_string());
                    }
                    continue;
                }
            }

            if !after_fact {
                after_fact = line == "[Fact]";
                continue;
            }
            let tokens = line.split(' ').collect::<Vec<_>>();
            if tokens.len() < 3 {
                continue;
            }
            if let Some(method) = tokens.iter().find(|t| t.starts_with("Test")) {
                let method = method.trim_matches(&['(', ')'][..]).to_string();
                record_method(tests, class.as_deref(), method);
            }
            after_fact = false;
        }
    }
}
