use super::similarity::similarity_ratio;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.80;

/// Result of comparing one recognized utterance against its expected text.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    pub ratio: f64,
    pub accepted: bool,
}

/// Decides whether recognized text is close enough to an expected
/// transcript, tolerating minor recognition differences.
///
/// Both sides are case-folded before scoring; an utterance is accepted
/// when its similarity ratio is strictly above the threshold.
pub struct TranscriptMatcher {
    threshold: f64,
}

impl TranscriptMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Case-folded similarity ratio between expected and recognized text.
    pub fn score(&self, expected: &str, recognized: &str) -> f64 {
        similarity_ratio(&expected.to_lowercase(), &recognized.to_lowercase())
    }

    pub fn check(&self, expected: &str, recognized: &str) -> MatchOutcome {
        let ratio = self.score(expected, recognized);
        MatchOutcome {
            ratio,
            accepted: ratio > self.threshold,
        }
    }

    /// Compare utterance lists pairwise by index.
    ///
    /// When one list is shorter, the missing side is treated as empty
    /// text, so an unpaired non-empty utterance scores 0.0 and fails.
    pub fn check_all(&self, expected: &[String], recognized: &[String]) -> Vec<MatchOutcome> {
        let len = expected.len().max(recognized.len());
        (0..len)
            .map(|i| {
                let exp = expected.get(i).map(String::as_str).unwrap_or("");
                let rec = recognized.get(i).map(String::as_str).unwrap_or("");
                self.check(exp, rec)
            })
            .collect()
    }
}

impl Default for TranscriptMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}
