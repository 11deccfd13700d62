use std::collections::BTreeMap;

use affirm_chain::issue::{Issue, IssueMany};
use affirm_chain::{expect, expect_many, AffirmError, Diagnostic, Operation, RenderConfig, Renderer};

fn positive(value: &i32) -> bool {
    *value > 0
}

fn validate(port: i32) -> Result<i32, AffirmError> {
    let checked = expect(port).that(positive)?.not(|p| *p > 65_535)?;
    Ok(checked.into_inner())
}

#[test]
fn question_mark_composition() {
    assert_eq!(validate(443), Ok(443));
    let err = validate(70_000).unwrap_err();
    assert_eq!(err.info().context_value("operator"), Some("Not"));
    assert_eq!(err.info().context_value("target"), Some("70000"));
}

#[test]
fn first_failure_stops_the_chain() {
    let mut later = false;
    let result = expect(-1).that(positive).and_then(|e| {
        later = true;
        e.that(|_| true)
    });
    assert!(result.is_err());
    assert!(!later);
}

#[test]
fn issue_many_receives_operation_arguments() {
    let needle = "z";
    let issue: &dyn Issue<String> = &IssueMany(|target: &String, arguments: &[&dyn Diagnostic]| {
        format!("{target:?} has no {}", affirm_chain::render(arguments[0]))
    });
    let err = expect(String::from("abc"))
        .apply(
            Operation::named("Contains").with_argument(&needle),
            |s| s.contains(needle),
            Some(issue),
        )
        .unwrap_err();
    assert_eq!(err.message(), "\"abc\" has no \"z\"");
    assert_eq!(err.info().context_value("argument.0"), Some("\"z\""));
}

#[test]
fn map_targets_render_as_pair_blocks() {
    let settings: BTreeMap<&str, bool> = [("color", true), ("verbose", false)].into_iter().collect();
    let err = expect(settings).that(|m| m.is_empty()).unwrap_err();
    assert_eq!(
        err.info().context_value("target"),
        Some("{\n  [\"color\"] = true,\n  [\"verbose\"] = false\n}")
    );
}

#[test]
fn renderer_config_from_json_applies_to_failures() {
    let config = RenderConfig::from_json(r#"{"max_inline_width": 4, "indent": "    "}"#)
        .expect("config parses");
    let err = expect_many(vec![100, 200])
        .with_renderer(Renderer::new(config))
        .that(|items| items.len() > 2)
        .unwrap_err();
    assert_eq!(err.info().context_value("target"), Some("[\n    100,\n    200\n]"));
}

#[test]
fn expectation_errors_serialize_with_their_family() {
    let err = expect(false).that(|b| *b).unwrap_err();
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Expectation");
    assert_eq!(json["detail"]["code"], "expectation-failed");
    assert_eq!(json["detail"]["context"]["target"], "false");
    let back: AffirmError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, err);
}

#[test]
fn display_includes_message_and_code() {
    let err = expect(0).that(positive).unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("expectation failed: expected 0 to satisfy That(expect_chain.positive)"));
    assert!(text.contains("(code: expectation-failed)"));
}

#[test]
fn predicate_panics_propagate_unchanged() {
    let payload = std::panic::catch_unwind(|| expect(1).that(|_| panic!("predicate failed hard")))
        .expect_err("panic escapes the chain");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"predicate failed hard"));

    let payload = std::panic::catch_unwind(|| {
        expect(String::from("abc")).apply(
            Operation::named("Exploding"),
            |_| std::panic::panic_any(7i64),
            None,
        )
    })
    .expect_err("panic escapes the chain");
    assert_eq!(payload.downcast_ref::<i64>(), Some(&7));
}
