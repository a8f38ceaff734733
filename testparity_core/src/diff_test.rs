use indexmap::IndexMap;

use crate::diff::compute;
use crate::model::{DiffResult, MissingTest, TestMap};
use crate::skip::SkipSet;
use crate::translate::{TranslationChain, TranslationTable};

fn tests(entries: &[(&str, &[&str])]) -> TestMap {
    entries
        .iter()
        .map(|(class, methods)| {
            (
                class.to_string(),
                methods.iter().map(|m| m.to_string()).collect(),
            )
        })
        .collect()
}

fn labels(result: &DiffResult) -> IndexMap<String, Vec<String>> {
    result.to_labels()
}

fn expected(entries: &[(&str, &[&str])]) -> IndexMap<String, Vec<String>> {
    tests(entries)
}

#[test]
fn class_absent_from_target_reports_every_method() {
    let mut result = DiffResult::new();
    let empty = TranslationTable::new();
    compute(
        &mut result,
        &tests(&[("FooTest", &["testBar"])]),
        &TestMap::new(),
        &empty,
        &SkipSet::new(),
        "From X",
    );
    assert_eq!(labels(&result), expected(&[("FooTest", &["testBar(From X)"])]));
}

#[test]
fn only_methods_missing_from_target_are_reported() {
    let mut result = DiffResult::new();
    let empty = TranslationTable::new();
    compute(
        &mut result,
        &tests(&[("FooTest", &["testBar", "testBaz"])]),
        &tests(&[("FooTest", &["testBar"])]),
        &empty,
        &SkipSet::new(),
        "tag",
    );
    assert_eq!(labels(&result), expected(&[("FooTest", &["testBaz(tag)"])]));
}

#[test]
fn translated_name_found_in_target_is_not_missing() {
    let mut result = DiffResult::new();
    let renames = [("oldName", "newName")].into_iter().collect::<TranslationTable>();
    compute(
        &mut result,
        &tests(&[("FooTest", &["oldName"])]),
        &tests(&[("FooTest", &["newName"])]),
        &renames,
        &SkipSet::new(),
        "tag",
    );
    assert!(result.get("FooTest").is_none());
    assert!(result.is_empty());
}

#[test]
fn qualified_translation_uses_method_component() {
    let mut result = DiffResult::new();
    let renames = [("FooTest.TestOld", "FooTests.TestNew")]
        .into_iter()
        .collect::<TranslationTable>();
    compute(
        &mut result,
        &tests(&[("FooTest", &["TestOld"])]),
        &tests(&[("FooTest", &["TestNew"])]),
        &renames,
        &SkipSet::new(),
        "tag",
    );
    assert!(result.is_empty());
}

#[test]
fn qualified_translation_wins_over_bare_translation() {
    let mut result = DiffResult::new();
    let renames = [
        ("FooTest.TestOld", "FooTest.TestQualified"),
        ("TestOld", "TestBare"),
    ]
    .into_iter()
    .collect::<TranslationTable>();
    compute(
        &mut result,
        &tests(&[("FooTest", &["TestOld"])]),
        &tests(&[("FooTest", &["TestBare"])]),
        &renames,
        &SkipSet::new(),
        "tag",
    );
    assert_eq!(labels(&result), expected(&[("FooTest", &["TestOld(tag)"])]));
}

#[test]
fn translated_name_absent_from_target_is_missing() {
    let mut result = DiffResult::new();
    let renames = [("TestOld", "TestNew")].into_iter().collect::<TranslationTable>();
    compute(
        &mut result,
        &tests(&[("FooTest", &["TestOld"])]),
        &tests(&[("FooTest", &["TestOther"])]),
        &renames,
        &SkipSet::new(),
        "tag",
    );
    assert_eq!(labels(&result), expected(&[("FooTest", &["TestOld(tag)"])]));
}

#[test]
fn skipped_method_is_never_reported() {
    let mut result = DiffResult::new();
    let empty = TranslationTable::new();
    let skip = ["oldName"].into_iter().collect::<SkipSet>();
    compute(
        &mut result,
        &tests(&[("FooTest", &["oldName"]), ("BarTest", &["oldName", "kept"])]),
        &tests(&[("FooTest", &["newName"])]),
        &empty,
        &skip,
        "tag",
    );
    assert_eq!(labels(&result), expected(&[("BarTest", &["kept(tag)"])]));
}

#[test]
fn skipped_class_contributes_nothing() {
    let mut result = DiffResult::new();
    let empty = TranslationTable::new();
    let skip = ["FooTest"].into_iter().collect::<SkipSet>();
    compute(
        &mut result,
        &tests(&[("FooTest", &["TestA", "TestB"])]),
        &tests(&[("FooTest", &[])]),
        &empty,
        &skip,
        "tag",
    );
    assert!(result.is_empty());
}

#[test]
fn empty_source_class_never_becomes_a_key() {
    let mut result = DiffResult::new();
    let empty = TranslationTable::new();
    compute(
        &mut result,
        &tests(&[("EmptyTest", &[]), ("FooTest", &["TestA"])]),
        &TestMap::new(),
        &empty,
        &SkipSet::new(),
        "tag",
    );
    assert_eq!(result.classes().collect::<Vec<_>>(), vec!["FooTest"]);
}

#[test]
fn fully_skipped_class_absent_from_target_is_not_materialized() {
    let mut result = DiffResult::new();
    let empty = TranslationTable::new();
    let skip = ["TestA"].into_iter().collect::<SkipSet>();
    compute(
        &mut result,
        &tests(&[("FooTest", &["TestA"])]),
        &TestMap::new(),
        &empty,
        &skip,
        "tag",
    );
    assert!(result.get("FooTest").is_none());
}

#[test]
fn repeated_runs_accumulate_in_invocation_order() {
    let mut result = DiffResult::new();
    let empty = TranslationTable::new();
    let source = tests(&[("FooTest", &["TestA"])]);
    let target = tests(&[("FooTest", &[])]);
    compute(&mut result, &source, &target, &empty, &SkipSet::new(), "From Net");
    compute(&mut result, &source, &TestMap::new(), &empty, &SkipSet::new(), "From Java");
    assert_eq!(
        result.get("FooTest"),
        Some(
            &[
                MissingTest::new("TestA", "From Net"),
                MissingTest::new("TestA", "From Java"),
            ][..]
        )
    );
}

#[test]
fn missing_methods_keep_source_order() {
    let mut result = DiffResult::new();
    let empty = TranslationTable::new();
    compute(
        &mut result,
        &tests(&[("FooTest", &["TestZ", "TestA", "TestM"])]),
        &tests(&[("FooTest", &["TestA"])]),
        &empty,
        &SkipSet::new(),
        "tag",
    );
    assert_eq!(
        labels(&result),
        expected(&[("FooTest", &["TestZ(tag)", "TestM(tag)"])])
    );
}

#[test]
fn partial_chain_translation_counts_as_translated() {
    let from_java = [("TestFoo", "TestFooNet")].into_iter().collect::<TranslationTable>();
    let to_apple = TranslationTable::new();
    let chain = TranslationChain::new(vec![&from_java, &to_apple]);

    let mut result = DiffResult::new();
    compute(
        &mut result,
        &tests(&[("FooTest", &["TestFoo", "TestUndocumented"])]),
        &tests(&[("FooTest", &["TestFooNet", "TestUndocumentedApple"])]),
        &chain,
        &SkipSet::new(),
        "From Java",
    );
    assert_eq!(
        labels(&result),
        expected(&[("FooTest", &["TestUndocumented(From Java)"])])
    );
}
