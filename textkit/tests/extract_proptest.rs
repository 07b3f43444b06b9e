//! Property-based tests: simple matchers extract only what they match

use proptest::prelude::*;
use textkit::{BasicPatternGroup, EmailPatterns, UrlPatterns, UuidPatterns};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zü]{1,6}",
        r"[a-z!#'+]{1,5}@[a-zä]{1,5}\.[a-z]{2,3}",
        r"(https?|ftp)://[a-z]{1,6}(\.[a-z]{2,3})?",
        "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        r"[<>(),;:@.\-]{1,3}",
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just(""), Just(", "), Just("<")]
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec((token(), separator()), 0..10).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(t, sep)| format!("{}{}", t, sep))
            .collect()
    })
}

fn groups() -> Vec<Box<dyn BasicPatternGroup>> {
    vec![Box::new(EmailPatterns), Box::new(UrlPatterns), Box::new(UuidPatterns)]
}

proptest! {
    #[test]
    fn strict_email_extracts_whole(
        s in r"[a-z0-9!#$%&'*+/=?^_{|}~-]{1,10}@[a-z0-9]{1,10}\.[a-z]{2,6}",
    ) {
        let g = EmailPatterns;
        prop_assert!(g.matches(&s, true));
        prop_assert_eq!(g.extract(&s), s.clone());
        prop_assert_eq!(g.extract(&format!("write to {} today", s)), s);
    }

    #[test]
    fn lenient_url_extracts_whole(s in r"(https?|ftp)://[a-zä]{2,8}(\.[a-z]{2,3})?(/[a-z0-9?=]{0,6})?") {
        let g = UrlPatterns;
        prop_assert!(g.matches(&s, false));
        prop_assert_eq!(g.extract(&s), s.clone());
        prop_assert_eq!(g.extract(&format!("open {} now", s)), s);
    }

    #[test]
    fn extracted_values_match(t in text()) {
        for g in groups() {
            for m in g.extract_all(&t) {
                prop_assert!(g.matches(&m, false), "{} extracted {:?} from {:?}", g.meta().name, m, t);
            }
            let first = g.extract(&t);
            prop_assert!(first.is_empty() || g.matches(&first, false));
        }
    }
}
