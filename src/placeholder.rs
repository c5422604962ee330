//! Placeholder token grammar and the substitution pass.
//!
//! A placeholder is `{{%name%}}` where `name` is one or more ASCII letters,
//! digits, `_` or `-`. Names are matched case-insensitively.

use log::trace;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

const PLACEHOLDER_PATTERN: &str = r"\{\{%([A-Za-z0-9_-]+)%\}\}";

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

    PLACEHOLDER.get_or_init(|| {
        Regex::new(PLACEHOLDER_PATTERN).expect("Literal provided must be a valid regex")
    })
}

/// Normalizes a variable name the way the variable table stores it.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Replaces every placeholder in `text` with its value from `variables`.
///
/// Unknown names are replaced by the empty string. `variables` must be keyed
/// by normalized names.
pub fn substitute<'t>(text: &'t str, variables: &HashMap<String, String>) -> Cow<'t, str> {
    placeholder_regex().replace_all(text, |caps: &Captures| {
        let name = normalize_name(&caps[1]);
        match variables.get(&name) {
            Some(value) => value.clone(),
            None => {
                trace!("Placeholder '{}' has no value.", name);
                String::new()
            }
        }
    })
}

/// Removes every remaining placeholder from `text` without looking it up.
pub fn strip(text: &str) -> Cow<'_, str> {
    placeholder_regex().replace_all(text, "")
}

/// Lists the normalized names of the placeholders found in `text`, in order
/// of first appearance.
pub fn placeholder_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(text) {
        let name = normalize_name(&caps[1]);
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_substitute_matches_any_case() {
        let variables = vars(&[("foo", "x")]);
        assert_eq!(substitute("{{%FOO%}}{{%foo%}}{{%Foo%}}", &variables), "xxx");
    }

    #[test]
    fn test_substitute_accepts_dashes_and_underscores() {
        let variables = vars(&[("page-title_2", "Home")]);
        assert_eq!(substitute("<h1>{{%Page-Title_2%}}</h1>", &variables), "<h1>Home</h1>");
    }

    #[test]
    fn test_substitute_unknown_is_empty() {
        assert_eq!(substitute("a{{%missing%}}b", &HashMap::new()), "ab");
    }

    #[test]
    fn test_malformed_tokens_are_kept() {
        let variables = vars(&[("has", "x")]);
        for text in ["{{%has space%}}", "{{%%}}", "{{has%}}", "{%has%}", "{{%has.dot%}}"] {
            assert_eq!(substitute(text, &variables), text);
        }
    }

    #[test]
    fn test_substitute_is_single_pass() {
        let variables = vars(&[("a", "{{%b%}}"), ("b", "B")]);
        assert_eq!(substitute("{{%a%}}", &variables), "{{%b%}}");
    }

    #[test]
    fn test_substitute_borrows_when_nothing_matches() {
        assert!(matches!(substitute("plain text", &HashMap::new()), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("x{{%left%}}y{{%%}}"), "xy{{%%}}");
    }

    #[test]
    fn test_placeholder_names() {
        let names = placeholder_names("{{%Title%}} {{%body%}} {{%TITLE%}} {{%bad name%}}");
        assert_eq!(names, vec!["title".to_string(), "body".to_string()]);
    }
}
