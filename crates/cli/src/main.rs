use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;

use verbatim_core::matching::domain::transcript_matcher::{
    TranscriptMatcher, DEFAULT_SIMILARITY_THRESHOLD,
};
use verbatim_core::matching::domain::word_error_rate::word_error_rate;
use verbatim_core::matching::infrastructure::transcript_reader;

/// Transcript accuracy scoring for speech-to-text output.
#[derive(Parser)]
#[command(name = "verbatim")]
struct Cli {
    /// Reference transcript file (one expected utterance per line).
    reference: PathBuf,

    /// Hypothesis transcript file (one recognized utterance per line).
    hypothesis: PathBuf,

    /// Similarity ratio an utterance must exceed to pass (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    threshold: f64,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct UtteranceReport {
    index: usize,
    expected: String,
    recognized: String,
    ratio: f64,
    word_error_rate: f64,
    accepted: bool,
}

#[derive(Serialize)]
struct TranscriptReport {
    threshold: f64,
    total: usize,
    passed: usize,
    accepted: bool,
    utterances: Vec<UtteranceReport>,
}

fn main() {
    env_logger::init();

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}

fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let expected = transcript_reader::load_utterances(&cli.reference)?;
    let recognized = transcript_reader::load_utterances(&cli.hypothesis)?;

    let matcher = TranscriptMatcher::new(cli.threshold);
    let report = build_report(&matcher, &expected, &recognized);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    log::info!(
        "{}/{} utterances above threshold {:.2}",
        report.passed,
        report.total,
        report.threshold
    );
    Ok(report.accepted)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !(0.0..=1.0).contains(&cli.threshold) {
        return Err(format!("threshold must be in 0.0-1.0, got {}", cli.threshold).into());
    }
    Ok(())
}

fn build_report(
    matcher: &TranscriptMatcher,
    expected: &[String],
    recognized: &[String],
) -> TranscriptReport {
    let outcomes = matcher.check_all(expected, recognized);

    let utterances: Vec<UtteranceReport> = outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| {
            let exp = expected.get(i).map(String::as_str).unwrap_or("");
            let rec = recognized.get(i).map(String::as_str).unwrap_or("");
            UtteranceReport {
                index: i,
                expected: exp.to_string(),
                recognized: rec.to_string(),
                ratio: outcome.ratio,
                word_error_rate: word_error_rate(&exp.to_lowercase(), &rec.to_lowercase()),
                accepted: outcome.accepted,
            }
        })
        .collect();

    let passed = utterances.iter().filter(|u| u.accepted).count();
    TranscriptReport {
        threshold: matcher.threshold(),
        total: utterances.len(),
        passed,
        accepted: passed == utterances.len(),
        utterances,
    }
}

fn print_report(report: &TranscriptReport) {
    for u in &report.utterances {
        let verdict = if u.accepted { "PASS" } else { "FAIL" };
        println!(
            "#{:<3} {}  ratio {:.3}  wer {:.3}",
            u.index, verdict, u.ratio, u.word_error_rate
        );
        println!("     expected:   {}", u.expected);
        println!("     recognized: {}", u.recognized);
    }
    println!(
        "{}/{} utterances above threshold {:.2}",
        report.passed, report.total, report.threshold
    );
}
