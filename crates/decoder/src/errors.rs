use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("minimum confidence must be strictly between 0 and 1, got {0}")]
    InvalidMinimumConfidence(f32),

    #[error("{tensor} tensor shape mismatch: expected {expected}, got {actual:?}")]
    ShapeMismatch {
        tensor: &'static str,
        expected: String,
        actual: Vec<usize>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid raw output JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DecoderError {
    pub(crate) fn shape_mismatch(
        tensor: &'static str,
        expected: impl Into<String>,
        actual: &[usize],
    ) -> Self {
        DecoderError::ShapeMismatch {
            tensor,
            expected: expected.into(),
            actual: actual.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formatting() {
        let err = DecoderError::InvalidMinimumConfidence(1.5);
        assert_eq!(
            err.to_string(),
            "minimum confidence must be strictly between 0 and 1, got 1.5",
            "InvalidMinimumConfidence should name the offending value"
        );

        let err = DecoderError::shape_mismatch("boxes", "[1, Q, 4]", &[1, 300, 2]);
        assert_eq!(
            err.to_string(),
            "boxes tensor shape mismatch: expected [1, Q, 4], got [1, 300, 2]",
            "ShapeMismatch should show expected and actual shapes"
        );

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        assert_eq!(
            DecoderError::IoError(io_err).to_string(),
            "IO error: file not found"
        );
    }

    #[test]
    fn test_error_conversion_from_io_error() {
        fn returns_io_error() -> Result<(), io::Error> {
            Err(io::Error::other("test error"))
        }

        fn uses_question_mark() -> Result<(), DecoderError> {
            returns_io_error()?;
            Ok(())
        }

        match uses_question_mark() {
            Err(DecoderError::IoError(e)) => assert_eq!(e.to_string(), "test error"),
            other => panic!("Expected IoError variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_conversion_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DecoderError = json_err.into();
        assert!(matches!(err, DecoderError::JsonError(_)));
        assert!(err.to_string().starts_with("Invalid raw output JSON: "));
    }
}
