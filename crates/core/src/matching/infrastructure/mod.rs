pub mod transcript_reader;
