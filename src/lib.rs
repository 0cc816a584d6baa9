//! Minimal client for the public Google Translate `gtx` endpoint.
//!
//! ```no_run
//! # async fn run() -> Result<(), gtx_translate::TranslateError> {
//! let translator = gtx_translate::Translator::new()?;
//! let text = translator.translate("Glory to Ukraine", "en", "uk").await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod consts;
pub mod error;
pub mod languages;
pub mod request;
pub mod response;
pub mod translator;

pub use config::Config;
pub use error::{LanguageRole, TranslateError};
pub use languages::{is_valid_language, supported_languages};
pub use request::TranslationRequest;
pub use translator::{translate, Translator};
