use crate::env::Environment;

/// Marks a string as a variable reference.
pub const TRIGGER: char = '$';

/// Returns the variable name when `text` is a whole-string reference.
///
/// The name is everything after the leading `$`, with no delimiter, so
/// `$A-B` names the variable `A-B` and a lone `$` names the empty variable.
pub fn reference_name(text: &str) -> Option<&str> {
    text.strip_prefix(TRIGGER)
}

/// Replace `text` when it has the form `$NAME`.
///
/// Anything not starting with `$` is returned unchanged. Unset and empty
/// variables both yield an empty string. The result is never expanded again.
pub fn substitute(text: &str, env: &dyn Environment) -> String {
    match reference_name(text) {
        Some(name) => env.lookup(name).unwrap_or_default(),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest, std::collections::HashMap};

    fn env() -> HashMap<String, String> {
        HashMap::from([
            ("TEST_VAR".to_string(), "test_value".to_string()),
            ("EMPTY_VAR".to_string(), String::new()),
            ("NESTED".to_string(), "$TEST_VAR".to_string()),
            ("A-B".to_string(), "dashed".to_string()),
        ])
    }

    #[rstest]
    #[case("plain text")]
    #[case("")]
    #[case("prefix-$TEST_VAR")]
    #[case(" $TEST_VAR")]
    #[case("TEST_VAR")]
    fn non_references_are_unchanged(#[case] text: &str) {
        assert_eq!(substitute(text, &env()), text);
    }

    #[rstest]
    #[case("$TEST_VAR", "test_value")]
    #[case("$A-B", "dashed")]
    #[case("$EMPTY_VAR", "")]
    #[case("$MISSING", "")]
    #[case("$", "")]
    #[case("${TEST_VAR}", "")]
    fn references_resolve(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(substitute(text, &env()), expected);
    }

    #[test]
    fn single_pass_only() {
        assert_eq!(substitute("$NESTED", &env()), "$TEST_VAR");
    }

    #[test]
    fn reference_name_strips_trigger() {
        assert_eq!(reference_name("$HOME"), Some("HOME"));
        assert_eq!(reference_name("$"), Some(""));
        assert_eq!(reference_name("HOME"), None);
    }
}
