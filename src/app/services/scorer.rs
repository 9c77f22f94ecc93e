//! Quality scoring for validation results
//!
//! Reduces a flat issue list to an integer score. Every issue subtracts a
//! severity-dependent penalty from 100 and the result is clamped to a floor,
//! so adding an issue can never raise the score.

use crate::app::models::{Issue, Severity};
use crate::config::ScoringConfig;
use crate::constants::{MAX_SCORE, STRONG_SCORE_THRESHOLD, USABLE_SCORE_THRESHOLD};
use tracing::debug;

/// Score calculator with configurable penalties
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Penalty subtracted for one issue of the given severity
    pub fn penalty(&self, severity: Severity) -> i32 {
        match severity {
            Severity::High => self.config.high_penalty,
            Severity::Medium => self.config.medium_penalty,
            Severity::Low => self.config.low_penalty,
        }
    }

    /// Score an issue list
    ///
    /// An empty list scores 100. Otherwise each issue's penalty is subtracted
    /// from 100 and the result is clamped to the configured floor.
    pub fn score(&self, issues: &[Issue]) -> i32 {
        if issues.is_empty() {
            return MAX_SCORE;
        }

        let deductions: i32 = issues
            .iter()
            .map(|issue| self.penalty(issue.severity))
            .fold(0i32, |acc, penalty| acc.saturating_add(penalty));
        let score = MAX_SCORE.saturating_sub(deductions).max(self.config.floor);

        debug!(
            "Scored {} issues: -{} points, final score {}",
            issues.len(),
            deductions,
            score
        );

        score
    }
}

/// Score an issue list with the default penalties (12/6/3, floor 40)
pub fn score(issues: &[Issue]) -> i32 {
    Scorer::default().score(issues)
}

/// Human-readable label for a score
///
/// # Arguments
///
/// * `score` - Score returned by [`score`]
/// * `issue_count` - Number of issues the score was computed from
pub fn score_label(score: i32, issue_count: usize) -> &'static str {
    if issue_count == 0 {
        "Excellent: no issues detected in this sample."
    } else if score >= STRONG_SCORE_THRESHOLD {
        "Strong data quality with a few minor issues."
    } else if score >= USABLE_SCORE_THRESHOLD {
        "Usable, but several issues should be reviewed."
    } else {
        "Needs attention: significant issues detected."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn issues(severities: &[Severity]) -> Vec<Issue> {
        severities
            .iter()
            .map(|severity| Issue::new(*severity, "test issue"))
            .collect()
    }

    #[test]
    fn test_score_empty_is_perfect() {
        assert_eq!(score(&[]), 100);
    }

    #[test]
    fn test_score_penalties() {
        assert_eq!(score(&issues(&[Severity::High])), 88);
        assert_eq!(score(&issues(&[Severity::Medium])), 94);
        assert_eq!(score(&issues(&[Severity::Low])), 97);
        assert_eq!(
            score(&issues(&[Severity::High, Severity::Medium, Severity::Low])),
            79
        );
    }

    #[test]
    fn test_score_floor() {
        let many = issues(&[Severity::High; 10]);
        assert_eq!(score(&many), 40);
    }

    #[test]
    fn test_score_with_custom_config() {
        let scorer = Scorer::new(ScoringConfig {
            high_penalty: 20,
            medium_penalty: 10,
            low_penalty: 1,
            floor: 0,
        });
        assert_eq!(scorer.score(&issues(&[Severity::High, Severity::Low])), 79);
        assert_eq!(scorer.score(&issues(&[Severity::High; 6])), 0);
    }

    #[test]
    fn test_score_label_thresholds() {
        assert_eq!(score_label(100, 0), "Excellent: no issues detected in this sample.");
        assert_eq!(score_label(94, 1), "Strong data quality with a few minor issues.");
        assert_eq!(score_label(85, 2), "Strong data quality with a few minor issues.");
        assert_eq!(score_label(84, 3), "Usable, but several issues should be reviewed.");
        assert_eq!(score_label(70, 5), "Usable, but several issues should be reviewed.");
        assert_eq!(score_label(69, 4), "Needs attention: significant issues detected.");
        assert_eq!(score_label(40, 12), "Needs attention: significant issues detected.");
    }

    fn severity() -> impl Strategy<Value = Severity> {
        prop_oneof![
            Just(Severity::High),
            Just(Severity::Medium),
            Just(Severity::Low),
        ]
    }

    proptest! {
        #[test]
        fn prop_score_is_bounded_and_non_increasing(
            severities in prop::collection::vec(severity(), 0..40)
        ) {
            let mut accumulated = Vec::new();
            let mut previous = score(&accumulated);
            prop_assert_eq!(previous, 100);

            for severity in severities {
                accumulated.push(Issue::new(severity, "generated"));
                let current = score(&accumulated);
                prop_assert!(current <= previous);
                prop_assert!((40..=100).contains(&current));
                previous = current;
            }
        }
    }
}
