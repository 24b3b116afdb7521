use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating page slugs
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "home", "about", "terms-of-service", "faq2"
    /// - Invalid: "-home", "home-", "terms--of", "Home", "home_page"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("home"));
        assert!(SLUG_REGEX.is_match("about"));
        assert!(SLUG_REGEX.is_match("terms-of-service"));
        assert!(SLUG_REGEX.is_match("faq2"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-home")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("home-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("terms--of")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Home")); // uppercase
        assert!(!SLUG_REGEX.is_match("home_page")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
    }
}
