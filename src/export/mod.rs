// export/mod.rs
//
// Transcript file output.

pub mod transcript_writer;

pub use transcript_writer::{sanitize_filename, write_transcript_json, write_transcript_text};
