//! Property-based tests for the pipeline's latch semantics

use proptest::prelude::*;
use textkit::{ErrorKind, Pipeline};

/// Manipulation steps that do not depend on randomness
#[derive(Debug, Clone, Copy)]
enum Step {
    Trim,
    Collapse,
    Clean,
    Lower,
    Upper,
    Snake,
    Camel,
    Slug,
    StripHtml,
    Escape,
    Reverse,
}

fn apply(p: Pipeline, step: Step) -> Pipeline {
    match step {
        Step::Trim => p.trim(),
        Step::Collapse => p.collapse_whitespace(),
        Step::Clean => p.clean_whitespace(),
        Step::Lower => p.to_lower(),
        Step::Upper => p.to_upper(),
        Step::Snake => p.to_snake_case(),
        Step::Camel => p.to_camel_case(),
        Step::Slug => p.slugify(),
        Step::StripHtml => p.strip_html(),
        Step::Escape => p.escape_html(),
        Step::Reverse => p.reverse(),
    }
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Trim),
        Just(Step::Collapse),
        Just(Step::Clean),
        Just(Step::Lower),
        Just(Step::Upper),
        Just(Step::Snake),
        Just(Step::Camel),
        Just(Step::Slug),
        Just(Step::StripHtml),
        Just(Step::Escape),
        Just(Step::Reverse),
    ]
}

fn run(input: &str, steps: &[Step]) -> Pipeline {
    steps.iter().fold(Pipeline::new(input), |p, &s| apply(p, s))
}

proptest! {
    #[test]
    fn construction_is_identity(s in ".*") {
        let p = Pipeline::new(s.clone());
        prop_assert_eq!(p.value(), s.as_str());
        prop_assert!(p.error().is_none());
    }

    #[test]
    fn manipulation_is_deterministic(
        s in "[ a-zA-Z0-9<>_&-]{0,40}",
        steps in prop::collection::vec(step_strategy(), 0..8),
    ) {
        prop_assert_eq!(run(&s, &steps).into_string(), run(&s, &steps).into_string());
    }

    #[test]
    fn manipulation_never_sets_error(
        s in ".{0,40}",
        steps in prop::collection::vec(step_strategy(), 0..8),
    ) {
        prop_assert!(run(&s, &steps).is_ok());
    }

    #[test]
    fn first_failure_wins(
        s in "[a-z]{1,10}",
        steps in prop::collection::vec(step_strategy(), 0..6),
    ) {
        // Digits are never alphabetic and a one-char max cannot hold 2+ chars
        let p = Pipeline::new(format!("{}1", s))
            .require_alpha()
            .require_length(0, 1);
        let p = steps.iter().fold(p, |p, &step| apply(p, step));
        let p = p.require_email().require_uuid().require_not_empty();
        prop_assert_eq!(p.error().map(|e| e.kind()), Some(ErrorKind::NotAlpha));
    }

    #[test]
    fn latch_persists(
        s in ".{0,20}",
        steps in prop::collection::vec(step_strategy(), 0..8),
    ) {
        let p = Pipeline::new(s).require_length(5, 1);
        let before = p.error().cloned();
        let p = steps.iter().fold(p, |p, &step| apply(p, step).require_email());
        prop_assert_eq!(p.error().cloned(), before);
    }

    #[test]
    fn failure_does_not_stop_manipulation(
        s in "[a-zA-Z ]{0,30}",
        steps in prop::collection::vec(step_strategy(), 0..8),
    ) {
        let clean = run(&s, &steps).into_string();
        let failed = steps
            .iter()
            .fold(Pipeline::new(s.clone()).require_uuid(), |p, &step| apply(p, step));
        prop_assert!(failed.error().is_some());
        prop_assert_eq!(failed.into_string(), clean);
    }
}
