//! Speech transcription port.
//!
//! # Responsibility
//! - Define the contract a speech-to-text collaborator must satisfy.
//!
//! The core ships no live implementation; audio capture and the remote
//! transcription service live outside this crate. The extractor only ever
//! receives the transcript string, never a failure tag.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tagged failure reasons a transcription collaborator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscribeError {
    /// Microphone permission was denied by the user or platform.
    PermissionDenied,
    /// Audio capture started but failed before producing a usable clip.
    RecordingFailed,
    /// The transcription service credential is absent or unusable.
    MissingCredential,
    /// The transcription service rejected or failed the request.
    ServiceFailure,
    /// The service could not be reached.
    NetworkFailure,
}

impl Display for TranscribeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "microphone permission denied"),
            Self::RecordingFailed => write!(f, "audio recording failed"),
            Self::MissingCredential => write!(f, "transcription credential missing"),
            Self::ServiceFailure => write!(f, "transcription service failed"),
            Self::NetworkFailure => write!(f, "transcription network failure"),
        }
    }
}

impl Error for TranscribeError {}

/// Records up to `max_seconds` of audio and returns its transcript.
pub trait Transcriber {
    fn transcribe(&self, max_seconds: u32) -> Result<String, TranscribeError>;
}

#[cfg(test)]
mod tests {
    use super::{TranscribeError, Transcriber};

    struct FixedTranscriber(&'static str);

    impl Transcriber for FixedTranscriber {
        fn transcribe(&self, _max_seconds: u32) -> Result<String, TranscribeError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn transcript_feeds_the_extractor_unchanged() {
        let transcriber = FixedTranscriber("buy milk and call mom");
        let transcript = transcriber.transcribe(10).unwrap();
        let titles = crate::extract::extract_tasks(&transcript);
        assert_eq!(titles, vec!["Buy milk".to_string(), "Call mom".to_string()]);
    }

    #[test]
    fn error_display_strings_are_stable() {
        assert_eq!(
            TranscribeError::PermissionDenied.to_string(),
            "microphone permission denied"
        );
        assert_eq!(
            TranscribeError::NetworkFailure.to_string(),
            "transcription network failure"
        );
    }
}
