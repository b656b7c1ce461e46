//! Error types for WXR parsing and request planning.

mod code;
mod formatter;
mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ErrorContext, RichError};

use thiserror::Error;

/// Unified error type for the library.
///
/// Parsing only ever fails with [`WxrError::MalformedDocument`]; everything
/// else in an export is absorbed into empty defaults.
#[derive(Debug, Error)]
pub enum WxrError {
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, WxrError>;

impl WxrError {
    /// Error code used when the error reaches the CLI.
    pub fn code(&self) -> ErrorCode {
        match self {
            WxrError::MalformedDocument(_) => ErrorCode::Xml001,
            WxrError::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::Io001,
                std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
                _ => ErrorCode::Int001,
            },
            WxrError::Json(_) | WxrError::Yaml(_) => ErrorCode::Ser001,
            WxrError::Config(_) => ErrorCode::Cfg001,
            WxrError::InvalidArgument(_) => ErrorCode::Val001,
        }
    }
}

impl From<WxrError> for RichError {
    fn from(err: WxrError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            WxrError::MalformedDocument(source) => {
                let (row, col) = (source.pos().row, source.pos().col);
                RichError::new(code, message)
                    .with_context(
                        ErrorContext::new().with_additional("position", format!("{row}:{col}")),
                    )
                    .with_source(source)
            }
            WxrError::Io(source) => RichError::new(code, message).with_source(source),
            WxrError::Json(source) => RichError::new(code, message).with_source(source),
            WxrError::Yaml(source) => RichError::new(code, message).with_source(source),
            WxrError::Config(source) => RichError::new(code, message).with_source(source),
            WxrError::InvalidArgument(_) => RichError::new(code, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_document_maps_to_xml_code() {
        let err = roxmltree::Document::parse("<rss><channel></rss>").unwrap_err();
        let err = WxrError::from(err);
        assert_eq!(err.code(), ErrorCode::Xml001);
        assert!(err.to_string().starts_with("Malformed document"));
    }

    #[test]
    fn io_not_found_maps_to_io001() {
        let err = WxrError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.code(), ErrorCode::Io001);
    }

    #[test]
    fn rich_error_keeps_parse_position() {
        let err = roxmltree::Document::parse("<rss>").unwrap_err();
        let rich = RichError::from(WxrError::from(err));
        assert_eq!(rich.code(), ErrorCode::Xml001);
        assert!(rich.context().additional.contains_key("position"));
    }
}
