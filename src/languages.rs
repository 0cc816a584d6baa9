//! Supported language table.
//!
//! Codes are matched exactly (case-sensitive). Anything outside the table is
//! rejected, even if it is a perfectly good BCP 47 tag.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Every language code the endpoint is known to accept, in provider order.
pub static SUPPORTED_LANGUAGES: &[&str] = &[
    "ab", "ace", "ach", "af", "sq", "alz", "am", "ar", "hy", "as",
    "awa", "ay", "az", "ban", "bm", "ba", "eu", "btx", "bts", "bbc",
    "be", "bem", "bn", "bew", "bho", "bik", "bs", "br", "bg", "bua",
    "yue", "ca", "ceb", "ny", "zh-CN", "zh-TW", "cv", "co", "crh", "hr",
    "cs", "da", "din", "dv", "doi", "dov", "nl", "dz", "en", "eo",
    "et", "ee", "fj", "fil", "fi", "fr", "fr-FR", "fr-CA", "fy", "ff",
    "gaa", "gl", "lg", "ka", "de", "el", "gn", "gu", "ht", "cnh",
    "ha", "haw", "iw", "hil", "hi", "hmn", "hu", "hrx", "is", "ig",
    "ilo", "id", "ga", "it", "ja", "jw", "kn", "pam", "kk", "km",
    "cgg", "rw", "ktu", "gom", "ko", "kri", "ku", "ckb", "ky", "lo",
    "ltg", "la", "lv", "lij", "li", "ln", "lt", "lmo", "luo", "lb",
    "mk", "mai", "mak", "mg", "ms", "ms-Arab", "ml", "mt", "mi", "mr",
    "chm", "mni-Mtei", "min", "lus", "mn", "my", "nr", "new", "ne", "nso",
    "no", "nus", "oc", "or", "om", "pag", "pap", "ps", "fa", "pl",
    "pt", "pt-PT", "pt-BR", "pa", "pa-Arab", "qu", "rom", "ro", "rn", "ru",
    "sm", "sg", "sa", "gd", "sr", "st", "crs", "shn", "sn", "scn",
    "szl", "sd", "si", "sk", "sl", "so", "es", "su", "sw", "ss",
    "sv", "tg", "ta", "tt", "te", "tet", "th", "ti", "ts", "tn",
    "tr", "tk", "ak", "uk", "ur", "ug", "uz", "vi", "cy", "xh",
    "yi", "yo", "yua", "zu",
];

static LANGUAGE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SUPPORTED_LANGUAGES.iter().copied().collect());

/// Membership test against [`SUPPORTED_LANGUAGES`]
#[inline]
pub fn is_valid_language(code: &str) -> bool {
    LANGUAGE_SET.contains(code)
}

#[inline]
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    SUPPORTED_LANGUAGES.iter().copied()
}
