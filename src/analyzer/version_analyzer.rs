use crate::config::{AnalysisConfig, Config};
use crate::domain::{CommitParser, CommitRecord, IncrementClass};
use crate::error::Result;
use crate::git::RawCommit;

/// Reduce commit records to the increment class they require.
///
/// Returns `None` for an empty collection: nothing changed, so nothing needs a bump.
/// Otherwise starts at `Patch`; a record carrying notes forces `Major`, a record whose
/// type is in `minor_types` raises to at least `Minor`. Every record is visited and
/// the result does not depend on their order.
pub fn classify<S: AsRef<str>>(
    records: &[CommitRecord],
    minor_types: &[S],
) -> Option<IncrementClass> {
    if records.is_empty() {
        return None;
    }

    let mut increment = IncrementClass::Patch;
    for record in records {
        let required = if record.is_breaking() {
            IncrementClass::Major
        } else if record
            .r#type
            .as_deref()
            .is_some_and(|t| minor_types.iter().any(|m| m.as_ref() == t))
        {
            IncrementClass::Minor
        } else {
            IncrementClass::Patch
        };
        increment = increment.max(required);
    }

    Some(increment)
}

/// Analyzes commits to determine the increment class
pub struct VersionAnalyzer {
    parser: CommitParser,
    config: AnalysisConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: &Config) -> Result<Self> {
        Ok(VersionAnalyzer {
            parser: CommitParser::new(&config.parser)?,
            config: config.analysis.clone(),
        })
    }

    /// Parse every commit of a stream. A read error discards everything read so far.
    pub fn parse_commits<I>(&self, commits: I) -> Result<Vec<CommitRecord>>
    where
        I: IntoIterator<Item = Result<RawCommit>>,
    {
        self.parser.parse_all(commits)
    }

    /// Classify already parsed records
    pub fn classify(&self, records: &[CommitRecord]) -> Option<IncrementClass> {
        classify(records, &self.config.minor_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;

    fn record(r#type: Option<&str>, notes: &[&str]) -> CommitRecord {
        CommitRecord {
            hash: String::new(),
            r#type: r#type.map(str::to_string),
            scope: None,
            subject: None,
            header: String::new(),
            body: None,
            notes: notes
                .iter()
                .map(|n| Note {
                    title: "BREAKING CHANGE".to_string(),
                    text: n.to_string(),
                })
                .collect(),
        }
    }

    fn analyzer() -> VersionAnalyzer {
        VersionAnalyzer::new(&Config::default()).unwrap()
    }

    fn analyze(analyzer: &VersionAnalyzer, messages: &[&str]) -> Option<IncrementClass> {
        let commits = messages.iter().enumerate().map(|(i, m)| -> Result<RawCommit> {
            Ok(RawCommit::new(format!("{:040x}", i), *m))
        });
        let records = analyzer.parse_commits(commits).unwrap();
        analyzer.classify(&records)
    }

    const FEAT: &[&str] = &["feat"];

    /// All orderings of `items` (Heap's algorithm).
    fn permutations(items: &[CommitRecord]) -> Vec<Vec<CommitRecord>> {
        fn heap(k: usize, items: &mut Vec<CommitRecord>, out: &mut Vec<Vec<CommitRecord>>) {
            if k <= 1 {
                out.push(items.clone());
                return;
            }
            heap(k - 1, items, out);
            for i in 0..k - 1 {
                if k % 2 == 0 {
                    items.swap(i, k - 1);
                } else {
                    items.swap(0, k - 1);
                }
                heap(k - 1, items, out);
            }
        }
        let mut items = items.to_vec();
        let mut out = Vec::new();
        heap(items.len(), &mut items, &mut out);
        out
    }

    #[test]
    fn test_classify_empty_is_none() {
        assert_eq!(classify(&[], FEAT), None);
    }

    #[test]
    fn test_classify_fix_and_feat_is_minor() {
        let records = vec![record(Some("fix"), &[]), record(Some("feat"), &[])];
        assert_eq!(classify(&records, FEAT), Some(IncrementClass::Minor));
    }

    #[test]
    fn test_classify_breaking_note_is_major() {
        let records = vec![record(Some("fix"), &["breaks API"])];
        assert_eq!(classify(&records, FEAT), Some(IncrementClass::Major));
    }

    #[test]
    fn test_classify_breaking_note_without_type() {
        let records = vec![record(None, &["breaks API"]), record(Some("feat"), &[])];
        assert_eq!(classify(&records, FEAT), Some(IncrementClass::Major));
    }

    #[test]
    fn test_classify_no_feat_no_notes_is_patch() {
        let records = vec![
            record(Some("fix"), &[]),
            record(Some("chore"), &[]),
            record(None, &[]),
            record(Some("docs"), &[]),
        ];
        assert_eq!(classify(&records, FEAT), Some(IncrementClass::Patch));
    }

    #[test]
    fn test_classify_single_untyped_commit_is_patch() {
        let records = vec![record(None, &[])];
        assert_eq!(classify(&records, FEAT), Some(IncrementClass::Patch));
    }

    #[test]
    fn test_classify_multiple_breaking_notes_same_as_one() {
        let one = vec![record(Some("fix"), &["a"])];
        let many = vec![record(Some("fix"), &["a", "b"]), record(Some("feat"), &["c"])];
        assert_eq!(classify(&one, FEAT), classify(&many, FEAT));
    }

    #[test]
    fn test_classify_order_independent() {
        let records = vec![
            record(Some("feat"), &[]),
            record(Some("fix"), &["breaks"]),
            record(Some("chore"), &[]),
            record(None, &[]),
        ];
        for ordering in permutations(&records) {
            assert_eq!(classify(&ordering, FEAT), Some(IncrementClass::Major));
        }

        let records = vec![
            record(Some("fix"), &[]),
            record(Some("feat"), &[]),
            record(Some("docs"), &[]),
        ];
        for ordering in permutations(&records) {
            assert_eq!(classify(&ordering, FEAT), Some(IncrementClass::Minor));
        }
    }

    #[test]
    fn test_classify_custom_minor_types() {
        let records = vec![record(Some("perf"), &[])];
        assert_eq!(classify(&records, FEAT), Some(IncrementClass::Patch));
        assert_eq!(
            classify(&records, &["feat", "perf"]),
            Some(IncrementClass::Minor)
        );
    }

    #[test]
    fn test_analyze_minor() {
        let messages = ["feat: new feature", "fix: bug fix"];
        assert_eq!(
            analyze(&analyzer(), &messages),
            Some(IncrementClass::Minor)
        );
    }

    #[test]
    fn test_analyze_breaking_change_via_footer() {
        let messages = ["fix: rename API field\n\nBREAKING CHANGE: field changed from X to Y"];
        assert_eq!(
            analyze(&analyzer(), &messages),
            Some(IncrementClass::Major)
        );
    }

    #[test]
    fn test_analyze_bang_header_is_patch_by_default() {
        let messages = ["feat!: drop api"];
        assert_eq!(
            analyze(&analyzer(), &messages),
            Some(IncrementClass::Patch)
        );
    }

    #[test]
    fn test_analyze_bang_header_when_enabled() {
        let mut config = Config::default();
        config.parser.breaking_header = true;
        let analyzer = VersionAnalyzer::new(&config).unwrap();
        let messages = ["docs: typo", "refactor(core)!: drop legacy mode"];
        assert_eq!(analyze(&analyzer, &messages), Some(IncrementClass::Major));
    }

    #[test]
    fn test_analyze_breaking_trailer_any_case() {
        let messages = ["fix: x\n\nBreaking change: removed flag"];
        assert_eq!(
            analyze(&analyzer(), &messages),
            Some(IncrementClass::Major)
        );
    }

    #[test]
    fn test_analyze_keywords_in_subject_do_not_count() {
        // Only types and notes matter; "feature" or "breaking" in prose is ignored.
        let messages = ["fix: breaking bug in feature flag parsing"];
        assert_eq!(
            analyze(&analyzer(), &messages),
            Some(IncrementClass::Patch)
        );
    }

    #[test]
    fn test_analyze_non_conventional_commits() {
        let messages = ["Updated stuff", "Fixed things", "Added more stuff"];
        assert_eq!(
            analyze(&analyzer(), &messages),
            Some(IncrementClass::Patch)
        );
    }

    #[test]
    fn test_analyze_real_release_cycle() {
        let messages = [
            "feat(api): add user list endpoint",
            "feat(auth): add role-based access",
            "fix(ui): modal alignment",
            "docs: update api docs",
        ];
        assert_eq!(
            analyze(&analyzer(), &messages),
            Some(IncrementClass::Minor)
        );
    }

    #[test]
    fn test_analyze_no_messages() {
        let messages: [&str; 0] = [];
        assert_eq!(analyze(&analyzer(), &messages), None);
    }
}
