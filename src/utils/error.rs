use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Input file not found: {path}")]
    MissingInput { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LeadError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LeadError::MissingInput { path } => {
                format!("ERROR: {} not found. Run the scraper first.", path)
            }
            LeadError::CsvError(e) => format!("Failed to write CSV export: {}", e),
            LeadError::IoError(e) => format!("File operation failed: {}", e),
            LeadError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LeadError::MissingInput { .. } => {
                "Run the scraper to produce the results file, or point --base-dir at its directory"
            }
            LeadError::CsvError(_) | LeadError::IoError(_) => {
                "Check disk space and write permissions for the output directory"
            }
            LeadError::InvalidConfigValueError { .. } => "Fix the configuration value and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message_names_file() {
        let err = LeadError::MissingInput {
            path: "bucharest-results.json".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "ERROR: bucharest-results.json not found. Run the scraper first."
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LeadError = io.into();
        assert!(matches!(err, LeadError::IoError(_)));
        assert!(err.to_string().contains("denied"));
    }
}
