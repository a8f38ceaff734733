use crate::config::{SkipSets, TranslationTables};
use crate::diff;
use crate::model::{DiffResult, Platform, TestMap, count_tests};

/// Test maps for the platforms requested in this run.
#[derive(Debug, Clone, Default)]
pub struct ScannedSuites {
    pub apple: Option<TestMap>,
    pub managed: Option<TestMap>,
    pub jvm: Option<TestMap>,
}

impl ScannedSuites {
    pub fn get(&self, platform: Platform) -> Option<&TestMap> {
        match platform {
            Platform::Apple => self.apple.as_ref(),
            Platform::Managed => self.managed.as_ref(),
            Platform::Jvm => self.jvm.as_ref(),
        }
    }

    pub fn set(&mut self, platform: Platform, tests: TestMap) {
        let slot = match platform {
            Platform::Apple => &mut self.apple,
            Platform::Managed => &mut self.managed,
            Platform::Jvm => &mut self.jvm,
        };
        *slot = Some(tests);
    }

    pub fn analyzed(&self) -> impl Iterator<Item = (Platform, &TestMap)> {
        Platform::ALL
            .into_iter()
            .filter_map(move |platform| self.get(platform).map(|tests| (platform, tests)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformReport {
    pub platform: Platform,
    pub missing: DiffResult,
    pub total_tests: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParityReport {
    pub sections: Vec<PlatformReport>,
}

impl ParityReport {
    pub fn section(&self, platform: Platform) -> Option<&PlatformReport> {
        self.sections.iter().find(|s| s.platform == platform)
    }
}

pub struct DiffAggregator<'a> {
    tables: &'a TranslationTables,
    skips: &'a SkipSets,
}

impl<'a> DiffAggregator<'a> {
    pub fn new(tables: &'a TranslationTables, skips: &'a SkipSets) -> Self {
        Self { tables, skips }
    }

    /// One report per analyzed platform, in [`Platform::ALL`] order.
    pub fn build(&self, suites: &ScannedSuites) -> ParityReport {
        let sections = suites
            .analyzed()
            .map(|(platform, tests)| PlatformReport {
                platform,
                missing: self.missing_from(platform, tests, suites),
                total_tests: count_tests(tests),
            })
            .collect();
        ParityReport { sections }
    }

    /// Tests other analyzed platforms have that `target` lacks.
    pub fn missing_from(
        &self,
        target: Platform,
        target_tests: &TestMap,
        suites: &ScannedSuites,
    ) -> DiffResult {
        let mut result = DiffResult::new();
        let skip = self.skips.for_platform(target);
        for source in target.reference_platforms() {
            let Some(source_tests) = suites.get(source) else {
                continue;
            };
            let Some(chain) = self.tables.chain(source, target) else {
                continue;
            };
            let before = result.entry_count();
            let tag = source.provenance_tag();
            diff::compute(&mut result, source_tests, target_tests, &chain, skip, &tag);
            tracing::debug!(
                %source,
                %target,
                hops = chain.hop_count(),
                added = result.entry_count() - before,
                "diffed"
            );
        }
        result
    }
}

pub fn build_reports(
    suites: &ScannedSuites,
    tables: &TranslationTables,
    skips: &SkipSets,
) -> ParityReport {
    DiffAggregator::new(tables, skips).build(suites)
}
