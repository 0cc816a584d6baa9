use std::fmt;

use thiserror::Error;

/// Which side of the language pair failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    Source,
    Target,
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageRole::Source => write!(f, "source"),
            LanguageRole::Target => write!(f, "target"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("source text is empty")]
    EmptyInput,
    #[error("invalid {role} language: {code}")]
    InvalidLanguage { role: LanguageRole, code: String },
    #[error("request construction: {0}")]
    RequestConstruction(#[from] url::ParseError),
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("received non-200 status code: {code}")]
    UnexpectedStatus { code: u16 },
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no translation found in the response")]
    EmptyResponse,
    #[error("no valid translated text found")]
    NoTranslation,
}

impl TranslateError {
    pub(crate) fn invalid_language(role: LanguageRole, code: &str) -> Self {
        Self::InvalidLanguage { role, code: code.to_string() }
    }

    /// True when the request ran out of its timeout budget.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// True for failures raised before any network I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::InvalidLanguage { .. } | Self::RequestConstruction(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_role_and_code() {
        let err = TranslateError::invalid_language(LanguageRole::Target, "xx");
        assert_eq!(err.to_string(), "invalid target language: xx");
        assert!(err.is_input_error());
        assert!(!err.is_timeout());
    }

    #[test]
    fn status_errors_are_not_input_errors() {
        let err = TranslateError::UnexpectedStatus { code: 429 };
        assert_eq!(err.to_string(), "received non-200 status code: 429");
        assert!(!err.is_input_error());
    }
}
