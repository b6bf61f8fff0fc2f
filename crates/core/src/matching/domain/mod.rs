pub mod similarity;
pub mod transcript_matcher;
pub mod word_error_rate;
