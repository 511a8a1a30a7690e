use serde_json::error::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input is not valid JSON: {0}")]
    Parse(serde_json::Error),

    #[error("input does not match the expected report shape: {0}")]
    Structural(serde_json::Error),

    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => ReportError::Parse(err),
            Category::Data => ReportError::Structural(err),
            Category::Io => ReportError::Io(err.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
