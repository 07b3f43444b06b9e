//! Built-in simple matchers: email, URL, UUID

use crate::{BasicPatternGroup, GroupMeta};
use regex::Regex;
use textkit_text::validate;

// ============ EmailPatterns ============

pub struct EmailPatterns;

static EMAIL_EXAMPLES: [&str; 3] = [
    "matches(\"user@example.com\", strict) → true",
    "matches(\"a..b@example.com\", strict) → false",
    "extract(\"mail bob@x.org now\") → \"bob@x.org\"",
];

impl BasicPatternGroup for EmailPatterns {
    fn meta(&self) -> GroupMeta {
        GroupMeta {
            name: "email",
            description: "Email addresses; strict follows the RFC 5322 dot-atom form",
            examples: &EMAIL_EXAMPLES,
        }
    }

    fn rule(&self, strict: bool) -> &Regex {
        validate::email_regex(strict)
    }

    fn search_rule(&self) -> &Regex {
        validate::email_search_regex()
    }

    fn matches(&self, input: &str, strict: bool) -> bool {
        validate::is_email(input, strict)
    }
}

// ============ UrlPatterns ============

pub struct UrlPatterns;

static URL_EXAMPLES: [&str; 2] = [
    "matches(\"https://example.com/a?b=1\", strict) → true",
    "matches(\"ftp://files.local\", lenient) → true",
];

impl BasicPatternGroup for UrlPatterns {
    fn meta(&self) -> GroupMeta {
        GroupMeta {
            name: "url",
            description: "URLs; strict requires http(s) and a dotted host, lenient accepts ftp and bare hosts",
            examples: &URL_EXAMPLES,
        }
    }

    fn rule(&self, strict: bool) -> &Regex {
        validate::url_regex(strict)
    }

    fn search_rule(&self) -> &Regex {
        validate::url_search_regex()
    }
}

// ============ UuidPatterns ============

pub struct UuidPatterns;

static UUID_EXAMPLES: [&str; 2] = [
    "matches(\"550e8400-e29b-41d4-a716-446655440000\", strict) → true",
    "matches(\"00000000-0000-0000-0000-000000000000\", strict) → false",
];

impl BasicPatternGroup for UuidPatterns {
    fn meta(&self) -> GroupMeta {
        GroupMeta {
            name: "uuid",
            description: "UUIDs; strict requires an RFC 4122 version and variant",
            examples: &UUID_EXAMPLES,
        }
    }

    fn rule(&self, strict: bool) -> &Regex {
        validate::uuid_regex(strict)
    }

    fn search_rule(&self) -> &Regex {
        validate::uuid_search_regex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_match_modes() {
        let g = EmailPatterns;
        assert!(g.matches("user@example.com", true));
        assert!(!g.matches("a..b@example.com", true));
        assert!(g.matches("a..b@example.com", false));
        assert!(!g.matches("", false));
    }

    #[test]
    fn test_email_extract() {
        let g = EmailPatterns;
        let text = "contact alice@example.com or bob@test.org, not carol@";
        assert_eq!(g.extract(text), "alice@example.com");
        assert_eq!(g.extract_all(text), vec!["alice@example.com", "bob@test.org"]);
        assert_eq!(g.extract("nothing here"), "");
        assert!(g.extract_all("nothing here").is_empty());
    }

    #[test]
    fn test_extract_is_restartable() {
        let g = UrlPatterns;
        let text = "see https://a.com and http://b.org/x";
        assert_eq!(g.extract_all(text), g.extract_all(text));
        assert_eq!(g.extract_all(text), vec!["https://a.com", "http://b.org/x"]);
    }

    #[test]
    fn test_url_match_modes() {
        let g = UrlPatterns;
        assert!(g.matches("https://example.com/a?b=1", true));
        assert!(!g.matches("ftp://files.local", true));
        assert!(g.matches("ftp://files.local", false));
        assert!(!g.matches("example.com", false));
    }

    #[test]
    fn test_uuid_group() {
        let g = UuidPatterns;
        assert!(g.matches("550e8400-e29b-41d4-a716-446655440000", true));
        assert!(!g.matches("00000000-0000-0000-0000-000000000000", true));
        assert!(g.matches("00000000-0000-0000-0000-000000000000", false));
        assert_eq!(
            g.extract("id=550e8400-e29b-41d4-a716-446655440000;"),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    fn groups_with_samples() -> Vec<(Box<dyn BasicPatternGroup>, Vec<&'static str>)> {
        vec![
            (
                Box::new(EmailPatterns) as Box<dyn BasicPatternGroup>,
                vec![
                    "user@example.com",
                    "user!#@example.com",
                    "o'brien+tag@mail.example.co.uk",
                    "{x}|=?^~@example.org",
                    "üser@exämple.de",
                    "a..b@example.com",
                ],
            ),
            (
                Box::new(UrlPatterns) as Box<dyn BasicPatternGroup>,
                vec![
                    "http://ab",
                    "https://example.com/a?b=1",
                    "ftp://files.local",
                    "https://exämple.de/päth",
                ],
            ),
            (
                Box::new(UuidPatterns) as Box<dyn BasicPatternGroup>,
                vec![
                    "550e8400-e29b-41d4-a716-446655440000",
                    "00000000-0000-0000-0000-000000000000",
                ],
            ),
        ]
    }

    #[test]
    fn test_extract_returns_whole_valid_input() {
        for (group, samples) in groups_with_samples() {
            let name = group.meta().name;
            for s in samples {
                assert!(group.matches(s, false), "{}: {:?} should match", name, s);
                assert_eq!(group.extract(s), s, "{}: extract({:?})", name, s);
                assert_eq!(group.extract(&format!("see {} now", s)), s, "{}: embedded {:?}", name, s);
            }
        }
    }

    #[test]
    fn test_extracted_values_match() {
        let text = "go http://a now, <http://ab> mail user!#@example.com; \
                    üser@exämple.de, (bob@x.org) id 550e8400-e29b-41d4-a716-446655440000. \
                    carol@ https://example.com/a?b=1 a@b";
        for (group, _) in groups_with_samples() {
            let found = group.extract_all(text);
            assert!(!found.is_empty(), "{} found nothing", group.meta().name);
            for m in found {
                assert!(group.matches(&m, false), "{}: extracted {:?} does not match", group.meta().name, m);
            }
        }
    }

    #[test]
    fn test_email_extract_non_ascii_and_specials() {
        let g = EmailPatterns;
        assert_eq!(g.extract("user!#@example.com"), "user!#@example.com");
        assert_eq!(g.extract("üser@exämple.de"), "üser@exämple.de");
        assert_eq!(g.extract("<bob@x.org>"), "bob@x.org");
    }

    #[test]
    fn test_url_extract_needs_two_char_host() {
        let g = UrlPatterns;
        assert_eq!(g.extract("go http://a now"), "");
        assert!(!g.matches("http://a", false));
        assert_eq!(g.extract("go http://ab now"), "http://ab");
    }

    #[test]
    fn test_meta_serializes() {
        let json = serde_json::to_value(EmailPatterns.meta()).unwrap();
        assert_eq!(json["name"], "email");
        assert_eq!(json["examples"].as_array().unwrap().len(), 3);
        let json = serde_json::to_string(&UuidPatterns.meta()).unwrap();
        assert!(json.contains("\"description\":\"UUIDs"));
    }

    #[test]
    fn test_group_as_trait_object() {
        let groups: Vec<Box<dyn BasicPatternGroup>> =
            vec![Box::new(EmailPatterns), Box::new(UrlPatterns), Box::new(UuidPatterns)];
        let names: Vec<&str> = groups.iter().map(|g| g.meta().name).collect();
        assert_eq!(names, vec!["email", "url", "uuid"]);
        assert!(groups.iter().all(|g| !g.matches("???", false)));
    }
}
