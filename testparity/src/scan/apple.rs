use once_cell::sync::Lazy;
use regex::Regex;
use testparity_core::model::{Platform, TestMap};

use super::{PlatformScanner, is_test_class, open_class, record_method, upper_first};

static TEST_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\s*\(void\)\s*(test\S+)\s*\{").unwrap());

/// XCTest suites written in Objective-C.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppleScanner;

impl PlatformScanner for AppleScanner {
    fn platform(&self) -> Platform {
        Platform::Apple
    }

    fn scan_source(&self, source: &str, tests: &mut TestMap) {
        let mut class: Option<String> = None;
        for line in source.lines().map(str::trim) {
            if class.is_none() && line.starts_with("@implementation") {
                let name = line.split(' ').filter(|t| *t != "{").last();
                if let Some(name) = name.filter(|n| is_test_class(n)) {
                    open_class(tests, name);
                    class = Some(name.to_string());
                }
                continue;
            }
            if let Some(caps) = TEST_SIGNATURE.captures(line) {
                record_method(tests, class.as_deref(), upper_first(&caps[1]));
            }
        }
    }
}
