use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaglineError {
    #[error("Cannot compute statistics over an empty score list")]
    EmptyInputError,

    #[error("Self-check failed: {check}")]
    SelfCheckError { check: String },

    #[error("Speech synthesis failed: {reason}")]
    SpeechError { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Profile parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, TaglineError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Degraded but successful run (e.g. optional collaborator missing).
    Low,
    /// The requested operation could not be completed.
    High,
}

impl TaglineError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TaglineError::SpeechError { .. } => ErrorSeverity::Low,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TaglineError::EmptyInputError => {
                "The profile has no satisfaction scores to summarize".to_string()
            }
            TaglineError::SelfCheckError { check } => {
                format!("Self-check failed: {}", check)
            }
            TaglineError::SpeechError { reason } => {
                format!("Could not read the tagline aloud: {}", reason)
            }
            TaglineError::IoError(e) => format!("Could not read the profile file: {}", e),
            TaglineError::TomlError(e) => format!("The profile file is not valid TOML: {}", e),
            TaglineError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid profile value for {}: {}", field, reason)
            }
            TaglineError::MissingConfigError { field } => {
                format!("The profile is missing a value for {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TaglineError::EmptyInputError => {
                "Add at least one score to satisfaction_scores in the profile"
            }
            TaglineError::SelfCheckError { .. } => {
                "Re-run with --verbose to see which computation went inconsistent"
            }
            TaglineError::SpeechError { .. } => {
                "Install espeak-ng or point TAGLINE_SPEECH_BIN at a speech engine"
            }
            TaglineError::IoError(_) => "Check that the --profile path exists and is readable",
            TaglineError::TomlError(_) => "Fix the TOML syntax in the profile file",
            TaglineError::InvalidConfigValueError { .. } | TaglineError::MissingConfigError { .. } => {
                "Correct the profile file and try again"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_errors_are_low_severity() {
        let err = TaglineError::SpeechError {
            reason: "engine exited with status 1".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_self_check_errors_are_high_severity() {
        let err = TaglineError::SelfCheckError {
            check: "mean outside [minimum, maximum]".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("mean outside"));
    }
}
