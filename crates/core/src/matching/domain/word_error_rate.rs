/// Word error rate between a reference transcript and a hypothesis.
///
/// `WER = (insertions + deletions + substitutions) / reference word count`,
/// computed with a word-level Levenshtein distance where every edit costs 1.
/// Words are whitespace-separated tokens. Can exceed 1.0 when the
/// hypothesis is much longer than the reference.
pub fn word_error_rate(reference: &str, hypothesis: &str) -> f64 {
    let ref_words: Vec<&str> = reference.split_whitespace().collect();
    let hyp_words: Vec<&str> = hypothesis.split_whitespace().collect();

    if ref_words.is_empty() {
        return if hyp_words.is_empty() { 0.0 } else { 1.0 };
    }

    let mut prev: Vec<usize> = (0..=hyp_words.len()).collect();
    let mut curr: Vec<usize> = vec![0; hyp_words.len() + 1];

    for (i, rw) in ref_words.iter().enumerate() {
        curr[0] = i + 1;
        for (j, hw) in hyp_words.iter().enumerate() {
            let substitution = if rw == hw { prev[j] } else { prev[j] + 1 };
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[hyp_words.len()] as f64 / ref_words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_transcripts() {
        assert_relative_eq!(word_error_rate("hello world", "hello world"), 0.0);
    }

    #[test]
    fn test_one_substitution_of_two_words() {
        assert_relative_eq!(word_error_rate("hello world", "hello there"), 0.5);
    }

    #[test]
    fn test_deletion_and_insertion() {
        assert_relative_eq!(
            word_error_rate("the quick brown fox", "the brown fox jumps"),
            0.5
        );
    }

    #[test]
    fn test_empty_reference_empty_hypothesis() {
        assert_relative_eq!(word_error_rate("", ""), 0.0);
    }

    #[test]
    fn test_empty_reference_nonempty_hypothesis() {
        assert_relative_eq!(word_error_rate("", "hello"), 1.0);
    }

    #[test]
    fn test_empty_hypothesis_deletes_everything() {
        assert_relative_eq!(word_error_rate("hello there world", ""), 1.0);
    }

    #[test]
    fn test_can_exceed_one_with_long_hypothesis() {
        assert!(word_error_rate("hi", "one two three four") > 1.0);
    }

    #[test]
    fn test_whitespace_normalization() {
        assert_relative_eq!(word_error_rate("hello   world", "hello world"), 0.0);
    }
}
