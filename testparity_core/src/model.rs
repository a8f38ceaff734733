use std::fmt;

use indexmap::IndexMap;

/// Test class name -> test method names, in source-file encounter order.
pub type TestMap = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Apple,
    Managed,
    Jvm,
}

impl Platform {
    /// Report order.
    pub const ALL: [Platform; 3] = [Platform::Apple, Platform::Managed, Platform::Jvm];

    pub fn source_extension(self) -> &'static str {
        match self {
            Platform::Apple => "m",
            Platform::Managed => "cs",
            Platform::Jvm => "java",
        }
    }

    pub fn package_name(self) -> &'static str {
        match self {
            Platform::Apple => "Apple",
            Platform::Managed => "NET",
            Platform::Jvm => "Java",
        }
    }

    pub fn inventory_file_name(self) -> &'static str {
        match self {
            Platform::Apple => "apple.puml",
            Platform::Managed => "csharp.puml",
            Platform::Jvm => "java.puml",
        }
    }

    fn provenance_label(self) -> &'static str {
        match self {
            Platform::Apple => "Apple",
            Platform::Managed => "Net",
            Platform::Jvm => "Java",
        }
    }

    /// Tag attached to tests found missing relative to this platform.
    pub fn provenance_tag(self) -> String {
        format!("From {}", self.provenance_label())
    }

    /// Platforms compared against `self`, in the order their diffs are accumulated.
    pub fn reference_platforms(self) -> [Platform; 2] {
        match self {
            Platform::Apple => [Platform::Managed, Platform::Jvm],
            Platform::Managed => [Platform::Apple, Platform::Jvm],
            Platform::Jvm => [Platform::Apple, Platform::Managed],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Apple => "Apple",
            Platform::Managed => "C#",
            Platform::Jvm => "Java",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTest {
    pub method: String,
    pub tag: String,
}

impl MissingTest {
    pub fn new(method: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for MissingTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.method, self.tag)
    }
}

/// Missing tests per class. Never holds a class with no entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    by_class: IndexMap<String, Vec<MissingTest>>,
}

impl DiffResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the class's entries, creating the class on first non-empty insert.
    pub fn extend(&mut self, class: &str, entries: impl IntoIterator<Item = MissingTest>) {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return;
        }
        match self.by_class.get_mut(class) {
            Some(existing) => existing.extend(entries),
            None => {
                self.by_class.insert(class.to_string(), entries.collect());
            }
        }
    }

    pub fn push(&mut self, class: &str, entry: MissingTest) {
        self.extend(class, std::iter::once(entry));
    }

    pub fn get(&self, class: &str) -> Option<&[MissingTest]> {
        self.by_class.get(class).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MissingTest])> {
        self.by_class
            .iter()
            .map(|(class, entries)| (class.as_str(), entries.as_slice()))
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.by_class.keys().map(String::as_str)
    }

    pub fn entry_count(&self) -> usize {
        self.by_class.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_class.is_empty()
    }

    /// Entries rendered as `method(tag)`, keyed by class.
    pub fn to_labels(&self) -> IndexMap<String, Vec<String>> {
        self.by_class
            .iter()
            .map(|(class, entries)| {
                (
                    class.clone(),
                    entries.iter().map(ToString::to_string).collect(),
                )
            })
            .collect()
    }
}

pub fn count_tests(tests: &TestMap) -> usize {
    tests.values().map(Vec::len).sum()
}
