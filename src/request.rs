//! Input validation and query construction.

use url::Url;

use crate::consts::{params, FIXED_PARAMS};
use crate::error::{LanguageRole, TranslateError};
use crate::languages::is_valid_language;

/// One translation call, borrowed from the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRequest<'a> {
    pub source_text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
}

impl<'a> TranslationRequest<'a> {
    pub fn new(source_text: &'a str, source_lang: &'a str, target_lang: &'a str) -> Self {
        Self { source_text, source_lang, target_lang }
    }

    /// Checks run in order: text, then source language, then target language.
    pub fn validate(&self) -> Result<(), TranslateError> {
        if self.source_text.is_empty() {
            return Err(TranslateError::EmptyInput);
        }
        if !is_valid_language(self.source_lang) {
            return Err(TranslateError::invalid_language(LanguageRole::Source, self.source_lang));
        }
        if !is_valid_language(self.target_lang) {
            return Err(TranslateError::invalid_language(LanguageRole::Target, self.target_lang));
        }
        Ok(())
    }

    /// Validates, then appends the full query to `endpoint`.
    ///
    /// Values are form-urlencoded, so a space in the text goes out as `+`.
    /// Any query already present on `endpoint` is kept in front.
    pub fn build_url(&self, endpoint: &Url) -> Result<Url, TranslateError> {
        self.validate()?;

        let mut url = endpoint.clone();
        if url.cannot_be_a_base() {
            return Err(TranslateError::RequestConstruction(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in FIXED_PARAMS {
                query.append_pair(key, value);
            }
            query
                .append_pair(params::SOURCE_LANG, self.source_lang)
                .append_pair(params::TARGET_LANG, self.target_lang)
                .append_pair(params::DATA_TYPE.0, params::DATA_TYPE.1)
                .append_pair(params::QUERY, self.source_text);
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ENDPOINT;

    fn endpoint() -> Url {
        Url::parse(ENDPOINT).unwrap()
    }

    #[test]
    fn builds_exact_query_string() {
        let url = TranslationRequest::new("Glory to Ukraine", "en", "es")
            .build_url(&endpoint())
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://translate.googleapis.com/translate_a/single?client=gtx\
             &soc-app=1&soc-platform=1&soc-device=1&ie=UTF-8&oe=UTF-8\
             &sl=en&tl=es&dt=t&q=Glory+to+Ukraine"
        );
    }

    #[test]
    fn encodes_reserved_and_non_ascii_text() {
        let url = TranslationRequest::new("a&b=c?/ é", "fr-CA", "zh-CN")
            .build_url(&endpoint())
            .unwrap();

        assert!(url.as_str().ends_with("&sl=fr-CA&tl=zh-CN&dt=t&q=a%26b%3Dc%3F%2F+%C3%A9"));
        let q = url.query_pairs().find(|(k, _)| k == "q").map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("a&b=c?/ é"));
    }

    #[test]
    fn empty_text_is_rejected_first() {
        let err = TranslationRequest::new("", "xx", "yy").validate().unwrap_err();
        assert!(matches!(err, TranslateError::EmptyInput));
    }

    #[test]
    fn source_language_is_checked_before_target() {
        let err = TranslationRequest::new("Hello", "xx", "zz").validate().unwrap_err();
        match err {
            TranslateError::InvalidLanguage { role, code } => {
                assert_eq!(role, LanguageRole::Source);
                assert_eq!(code, "xx");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_target_language_is_reported() {
        let err = TranslationRequest::new("Hello", "en", "xx").build_url(&endpoint()).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::InvalidLanguage { role: LanguageRole::Target, .. }
        ));
    }

    #[test]
    fn cannot_be_a_base_endpoint_fails_construction() {
        let endpoint = Url::parse("mailto:someone@example.com").unwrap();
        let err = TranslationRequest::new("Hello", "en", "es").build_url(&endpoint).unwrap_err();
        assert!(matches!(err, TranslateError::RequestConstruction(_)));
    }
}
