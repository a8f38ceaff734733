use testparity_core::model::{Platform, TestMap};

use super::{PlatformScanner, is_test_class, open_class, record_method, upper_first};

/// `testFoo()` -> `TestFoo`.
fn method_name(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            upper_first(&first.to_string()) + chars.as_str().trim_matches(&['(', ')'][..])
        }
        None => String::new(),
    }
}

/// JUnit suites: `@Test` marks the method declared on the following line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JvmScanner;

impl PlatformScanner for JvmScanner {
    fn platform(&self) -> Platform {
        Platform::Jvm
    }

    fn scan_source(&self, source: &str, tests: &mut TestMap) {
        let mut class: Option<String> = None;
        let mut after_annotation = false;
        for line in source.lines().map(str::trim) {
            if class.is_none() && line.starts_with("public class") {
                if let Some(name) = line.split(' ').nth(2).filter(|n| is_test_class(n)) {
                    open_class(tests, name);
                    class = Some(name.to_string());
                }
                continue;
            }

            if !after_annotation {
                after_annotation = line == "@Test";
                continue;
            }
            let tokens = line.split(' ').collect::<Vec<_>>();
            if tokens.len() < 3 {
                continue;
            }
            if let Some(method) = tokens.iter().find(|t| t.starts_with("test")) {
                record_method(tests, class.as_deref(), method_name(method));
            }
            after_annotation = false;
        }
    }
}
