use crate::model::{DiffResult, MissingTest, TestMap};
use crate::skip::SkipSet;
use crate::translate::{Translate, unqualified};

/// Records into `result` every test in `source` that `target` lacks.
///
/// Skipped classes and skipped methods never produce entries. A method is
/// present in `target` when its name appears verbatim, or when its translated
/// name (`Class.method` first, then bare `method`) does. Methods without any
/// translation are reported as missing.
pub fn compute(
    result: &mut DiffResult,
    source: &TestMap,
    target: &TestMap,
    translator: &dyn Translate,
    skip: &SkipSet,
    tag: &str,
) {
    for (class, methods) in source {
        if skip.contains(class) || methods.is_empty() {
            continue;
        }

        let unskipped = methods.iter().filter(|method| !skip.contains(method));
        let missing = match target.get(class) {
            None => unskipped
                .map(|method| MissingTest::new(method.as_str(), tag))
                .collect::<Vec<_>>(),
            Some(target_methods) => unskipped
                .filter(|method| is_missing(class, method, target_methods, translator))
                .map(|method| MissingTest::new(method.as_str(), tag))
                .collect::<Vec<_>>(),
        };
        result.extend(class, missing);
    }
}

fn is_missing(
    class: &str,
    method: &str,
    target_methods: &[String],
    translator: &dyn Translate,
) -> bool {
    if contains_name(target_methods, method) {
        return false;
    }
    let qualified = format!("{class}.{method}");
    match translator
        .resolve(&qualified)
        .or_else(|| translator.resolve(method))
    {
        Some(translated) => !contains_name(target_methods, unqualified(translated)),
        None => true,
    }
}

fn contains_name(names: &[String], name: &str) -> bool {
    names.iter().any(|candidate| candidate == name)
}
