//! Keyboard matching helpers.

const ESCAPE_KEY_NAMES: [&str; 2] = ["Escape", "Esc"];
const ESCAPE_KEY_CODE: u32 = 27;

/// Returns true when the `key` name or legacy `key_code` identifies the escape key.
///
/// Older engines report `"Esc"`, and some synthetic events only carry `keyCode`.
pub fn is_escape(key: &str, key_code: u32) -> bool {
    ESCAPE_KEY_NAMES.contains(&key) || key_code == ESCAPE_KEY_CODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_matches_by_name_or_code() {
        assert!(is_escape("Escape", 0));
        assert!(is_escape("Esc", 0));
        assert!(is_escape("", 27));
        assert!(!is_escape("Enter", 13));
    }
}
