use crate::constants::{DEFAULT_LANGUAGE, FALLBACK_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stored text that is either a plain string or a per-language object.
///
/// Only the ingestion boundary should look at the shape; everything past it
/// works with the string returned by [`LocalizedText::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Translated(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Picks the display string: `preferred`, then Spanish, then English, then
    /// the first non-blank translation in key order. Blank entries are skipped.
    #[must_use]
    pub fn resolve(&self, preferred: &str) -> Option<&str> {
        match self {
            Self::Plain(text) => non_blank(text),
            Self::Translated(map) => [preferred, DEFAULT_LANGUAGE, FALLBACK_LANGUAGE]
                .iter()
                .find_map(|lang| map.get(*lang).and_then(|t| non_blank(t)))
                .or_else(|| map.values().find_map(|t| non_blank(t))),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_and_translated_shapes_deserialize() {
        let plain: LocalizedText = serde_json::from_value(json!("Café Austral")).unwrap();
        assert_eq!(plain.resolve("en"), Some("Café Austral"));

        let translated: LocalizedText =
            serde_json::from_value(json!({ "en": "Southern Café", "es": "Café Austral" })).unwrap();
        assert_eq!(translated.resolve("en"), Some("Southern Café"));
        assert_eq!(translated.resolve("pt"), Some("Café Austral"));
    }

    #[test]
    fn falls_back_to_any_non_blank_translation() {
        let text: LocalizedText =
            serde_json::from_value(json!({ "es": " ", "pt": "Loja" })).unwrap();
        assert_eq!(text.resolve("es"), Some("Loja"));

        let empty = LocalizedText::Plain("   ".to_owned());
        assert_eq!(empty.resolve("es"), None);
    }
}
