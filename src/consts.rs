//! Static request contract with zero-allocation design.
//! All strings are &'static str; the provider expects them byte-for-byte.

/// Public gtx endpoint
pub const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Fixed query pairs, sent before the per-call parameters.
pub static FIXED_PARAMS: &[(&str, &str)] = &[
    ("client", "gtx"),
    ("soc-app", "1"),
    ("soc-platform", "1"),
    ("soc-device", "1"),
    ("ie", "UTF-8"),
    ("oe", "UTF-8"),
];

/// Query parameter names for the per-call values
pub mod params {
    pub const SOURCE_LANG: &str = "sl";
    pub const TARGET_LANG: &str = "tl";
    pub const DATA_TYPE: (&str, &str) = ("dt", "t");
    pub const QUERY: &str = "q";
}

/// HTTP headers
pub mod headers {
    pub const CONTENT_TYPE: &str = "application/json";
}

/// Limits and thresholds
pub mod limits {
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    pub const LOG_PREVIEW_CHARS: usize = 48;
}
