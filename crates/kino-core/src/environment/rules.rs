//! Ordered first-match rule tables

use super::sniff::Facts;

/// One row of a decision list
pub(crate) struct Rule<T> {
    /// Stable name, reported in [`Decisions`](super::Decisions)
    pub name: &'static str,
    pub applies: fn(&Facts<'_>) -> bool,
    pub outcome: T,
}

/// First rule whose predicate holds, evaluated top to bottom
pub(crate) fn first_match<'r, T>(rules: &'r [Rule<T>], facts: &Facts<'_>) -> Option<&'r Rule<T>> {
    rules.iter().find(|rule| (rule.applies)(facts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentInput;

    static TABLE: &[Rule<u8>] = &[
        Rule {
            name: "android",
            applies: |f| f.platform.is_android,
            outcome: 1,
        },
        Rule {
            name: "linux",
            applies: |f| f.input.platform.contains("Linux"),
            outcome: 2,
        },
    ];

    #[test]
    fn test_first_match_wins() {
        let input = EnvironmentInput::new("", "Linux armv7l", "Android 4.4");
        let facts = Facts::gather(&input);
        let rule = first_match(TABLE, &facts).unwrap();
        assert_eq!(rule.name, "android");
        assert_eq!(rule.outcome, 1);
    }

    #[test]
    fn test_no_match() {
        let input = EnvironmentInput::new("", "Win32", "5.0 (Windows NT 10.0)");
        let facts = Facts::gather(&input);
        assert!(first_match(TABLE, &facts).is_none());
    }
}
