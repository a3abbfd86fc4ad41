use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DataNotFound,
    LoadFailed,
    ParseFailed,
    ConfigError,
    InvalidArgument,
    NoData,
    ExportFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataNotFound => "DATA_NOT_FOUND",
            Self::LoadFailed => "LOAD_FAILED",
            Self::ParseFailed => "PARSE_FAILED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NoData => "NO_DATA",
            Self::ExportFailed => "EXPORT_FAILED",
        }
    }
}

/// Errors raised outside the pure pipeline: loading, configuration,
/// argument parsing and export. The pipeline itself never fails.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BoardError {
    pub code: ErrorCode,
    pub message: String,
}

impl BoardError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn data_not_found(path: &str) -> Self {
        Self::new(
            ErrorCode::DataNotFound,
            format!("Data file not found: {path}"),
        )
    }

    pub fn load_failed(path: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::LoadFailed,
            format!("Failed to load data from {path}: {reason}"),
        )
    }

    pub fn parse_failed(reason: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::ParseFailed,
            format!("Failed to parse JSON data: {reason}"),
        )
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    pub fn unknown_group(name: &str) -> Self {
        Self::new(
            ErrorCode::InvalidArgument,
            format!("Unknown group '{name}'. Expected one of: Criação, Mídia, Produção, Operações, BI, Estratégia, Outros"),
        )
    }

    pub fn no_data() -> Self {
        Self::new(ErrorCode::NoData, "No data to export.")
    }

    pub fn export_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExportFailed, message)
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse_failed(e)
    }
}

impl From<std::io::Error> for BoardError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorCode::LoadFailed, e.to_string())
    }
}
