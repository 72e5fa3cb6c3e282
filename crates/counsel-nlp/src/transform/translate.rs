//! Reversal "translation" placeholder.

pub const DEFAULT_TARGET_LANG: &str = "es";

/// Reverse the characters of `text` and tag it with the language code.
pub fn translate(text: &str, target_lang: &str) -> String {
    let reversed: String = text.chars().rev().collect();
    format!("{} ({})", reversed, target_lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverses_and_tags() {
        assert_eq!(translate("abc", "fr"), "cba (fr)");
        assert_eq!(translate("hola", DEFAULT_TARGET_LANG), "aloh (es)");
    }

    #[test]
    fn test_reverses_by_character() {
        assert_eq!(translate("año", "en"), "oña (en)");
        assert_eq!(translate("", "de"), " (de)");
    }
}
