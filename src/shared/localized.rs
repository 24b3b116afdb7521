//! Bilingual text support.
//!
//! Every piece of editable copy is stored as a [`LocalizedString`] carrying
//! the English and Chinese variants side by side. Readers pick one variant
//! with [`LocalizedString::get`], which falls back to English whenever the
//! requested variant is empty.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::ValidationError;

/// Supported content locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Zh,
}

/// Parallel English/Chinese text for the same concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocalizedString {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub zh: String,
}

impl LocalizedString {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// Text for `lang`, or the English text when that variant is empty
    pub fn get(&self, lang: LanguageCode) -> &str {
        let value = match lang {
            LanguageCode::En => &self.en,
            LanguageCode::Zh => &self.zh,
        };

        if value.is_empty() {
            &self.en
        } else {
            value
        }
    }

    /// Owned copy of [`Self::get`]
    pub fn resolve(&self, lang: LanguageCode) -> String {
        self.get(lang).to_string()
    }

    /// True when neither locale carries any non-whitespace text
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.zh.trim().is_empty()
    }

    /// Case-insensitive substring match against both locales
    pub fn contains_ignore_case(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.en.to_lowercase().contains(&term) || self.zh.to_lowercase().contains(&term)
    }
}

/// Pick between two fixed UI strings
pub fn pick(lang: LanguageCode, en: &str, zh: &str) -> String {
    match lang {
        LanguageCode::En => en.to_string(),
        LanguageCode::Zh => zh.to_string(),
    }
}

/// Validator hook for required bilingual fields
pub fn validate_localized_required(value: &LocalizedString) -> Result<(), ValidationError> {
    if value.is_blank() {
        let mut err = ValidationError::new("localized_required");
        err.message = Some("A value is required in at least one language".into());
        return Err(err);
    }
    Ok(())
}

/// `?lang=` query parameter shared by the localized read endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct LangQuery {
    /// Content language: "en" (default) or "zh"
    #[serde(default)]
    pub lang: LanguageCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_requested_locale() {
        let text = LocalizedString::new("Services", "企业服务");
        assert_eq!(text.get(LanguageCode::En), "Services");
        assert_eq!(text.get(LanguageCode::Zh), "企业服务");
    }

    #[test]
    fn test_get_falls_back_to_english_when_missing() {
        let text = LocalizedString::new("Consulting", "");
        assert_eq!(text.get(LanguageCode::Zh), "Consulting");

        let parsed: LocalizedString = serde_json::from_str(r#"{"en":"About Us"}"#).unwrap();
        assert_eq!(parsed.get(LanguageCode::Zh), "About Us");
    }

    #[test]
    fn test_blank_detection() {
        assert!(LocalizedString::new("  ", "").is_blank());
        assert!(!LocalizedString::new("", "计算机").is_blank());
        assert!(validate_localized_required(&LocalizedString::default()).is_err());
    }

    #[test]
    fn test_contains_ignore_case_checks_both_locales() {
        let text = LocalizedString::new("Galaxy Phone Ultra", "银河手机 Ultra");
        assert!(text.contains_ignore_case("phone"));
        assert!(text.contains_ignore_case("银河"));
        assert!(!text.contains_ignore_case("laptop"));
    }

    #[test]
    fn test_language_code_wire_format() {
        assert_eq!(serde_json::to_string(&LanguageCode::Zh).unwrap(), "\"zh\"");
        let lang: LanguageCode = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, LanguageCode::En);
    }
}
