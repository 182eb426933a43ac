//! Entry-point tests.
//!
//! Covers:
//! 1. Validation warnings for malformed context atoms and alias pairs
//! 2. Evaluation options (strict trailing tokens, nesting limit)
//! 3. Token inspection through `tokenize`
//! 4. JSON requests, reports, and error serialization

use atomx_eval::{
    evaluate_boolean_expression, evaluate_json, evaluate_request, tokenize, Context, Diagnostics,
    ErrorCode, EvalOptions, EvalRequest, Evaluator, LabelIdPair, NullSink, Universe,
    ValidationWarning, DEFAULT_MAX_DEPTH,
};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

const NO_PAIRS: [(&str, &str); 0] = [];

fn collecting() -> Evaluator<Vec<ValidationWarning>> {
    Evaluator::with_sink(Vec::new())
}

// ─────────────────────────────────────────────────────────────────────
// Validation warnings
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_malformed_context_atom_is_skipped() {
    let mut evaluator = collecting();
    let result = evaluator.evaluate("granted & !bad", ["granted", "bad!", "-bad"], NO_PAIRS);
    assert_eq!(result, Ok(true));

    let warnings = evaluator.into_sink();
    assert_eq!(warnings.len(), 2);
    assert!(warnings
        .iter()
        .all(|w| w.code() == ErrorCode::INVALID_CONTEXT_ATOM));
    assert_eq!(
        warnings[1].to_string(),
        "[Context] failed insertion of '-bad' (atom name cannot start with '-')"
    );
}

#[test]
fn test_malformed_alias_pair_is_skipped() {
    let mut evaluator = collecting();
    let pairs = [("Read", "r 1"), ("Write", "w-1"), ("", "x-1")];
    let result = evaluator.evaluate("write & !read", ["w-1", "r 1"], pairs);
    assert_eq!(result, Ok(true));

    let warnings = evaluator.into_sink();
    let codes: Vec<ErrorCode> = warnings.iter().map(ValidationWarning::code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::INVALID_UNIVERSE_PAIR,
            ErrorCode::INVALID_UNIVERSE_PAIR,
            ErrorCode::INVALID_CONTEXT_ATOM,
        ]
    );
    assert_eq!(
        warnings[0].to_string(),
        "[Universe] failed insertion of 'Read': 'r 1' (invalid character ' ' at position 1)"
    );
}

#[test]
fn test_warnings_never_fail_evaluation() {
    let context = ["", " ", "ok", "ñ"];
    let universe = [("a b", "c"), ("ok", "ok-id")];
    assert_eq!(
        evaluate_boolean_expression("ok & ok-id | nothing", &context, &universe),
        Ok(false)
    );
    assert_eq!(
        evaluate_boolean_expression("ok", &context, &universe),
        Ok(true)
    );
}

#[test]
fn test_diagnostics_sink_caps_stored_warnings() {
    let atoms: Vec<String> = (0..30).map(|i| format!("-{i}")).collect();
    let mut evaluator = Evaluator::with_sink(Diagnostics::empty());
    assert_eq!(evaluator.evaluate("x", &atoms, NO_PAIRS), Ok(false));

    let diagnostics = evaluator.into_sink();
    assert_eq!(diagnostics.warnings.len(), Diagnostics::MAX_WARNINGS);
    assert_eq!(diagnostics.total_warnings, 30);
}

#[test]
fn test_last_identifier_registration_wins() {
    let pairs = [("Read", "shared-id"), ("Write", "shared-id")];
    let mut evaluator = Evaluator::with_sink(NullSink);
    assert_eq!(
        evaluator.evaluate("write & !read", ["shared-id"], pairs),
        Ok(true)
    );
}

// ─────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_default_options_ignore_trailing_tokens() {
    let mut evaluator = Evaluator::with_sink(NullSink);
    assert_eq!(evaluator.evaluate("(a | b) & !c)", ["a"], NO_PAIRS), Ok(true));
}

#[test]
fn test_strict_options_reject_trailing_tokens() {
    let mut evaluator = Evaluator::with_sink(NullSink).with_options(EvalOptions::strict());
    let e = evaluator
        .evaluate("(a | b) & !c)", ["a"], NO_PAIRS)
        .unwrap_err();
    assert_eq!(e.code, ErrorCode::UNEXPECTED_TOKEN);
    assert_eq!(e.position(), Some(12));
}

#[test]
fn test_nesting_limit_option() {
    let mut evaluator =
        Evaluator::with_sink(NullSink).with_options(EvalOptions::default().with_max_depth(3));
    assert_eq!(evaluator.evaluate("!!!a", ["a"], NO_PAIRS), Ok(false));
    assert_eq!(
        evaluator
            .evaluate("!!!!a", ["a"], NO_PAIRS)
            .map_err(|e| e.code),
        Err(ErrorCode::NESTING_LIMIT_EXCEEDED)
    );
}

#[test]
fn test_deep_input_ends_in_value_or_error() {
    let results = std::thread::spawn(|| {
        let nested = |depth: usize| format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
        [
            evaluate_boolean_expression(&nested(DEFAULT_MAX_DEPTH), &["a"], &NO_PAIRS),
            evaluate_boolean_expression(&nested(DEFAULT_MAX_DEPTH * 4), &["a"], &NO_PAIRS),
            evaluate_boolean_expression(&vec!["a"; 600].join(" ^ "), &["a"], &NO_PAIRS),
        ]
        .map(|r| r.map_err(|e| e.code))
    })
    .join()
    .expect("evaluation thread panicked");
    assert_eq!(
        results,
        [
            Ok(true),
            Err(ErrorCode::NESTING_LIMIT_EXCEEDED),
            Ok(false)
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Token inspection
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_tokenize_exposes_bindings() {
    let universe = Universe::from_pairs([("Read", "r-1")], &mut NullSink);
    let context = Context::expand(["r-1"], &universe, &mut NullSink);
    let tokens: Vec<_> = {
        let mut stream = tokenize("r-1 | read", &context, &universe).unwrap();
        std::iter::from_fn(|| stream.pop_front()).collect()
    };
    assert_eq!(tokens.len(), 3);

    let id = tokens[0].as_label().unwrap();
    assert_eq!(id.raw, "R-1");
    assert_eq!(id.canonical, "READ");
    assert!(id.resolved);
    assert!(id.value);

    let label = tokens[2].as_label().unwrap();
    assert_eq!(label.raw, "READ");
    assert!(label.value);
}

#[test]
fn test_tokenize_reports_lexical_errors() {
    let universe = Universe::new();
    let context = Context::new();
    let e = tokenize("a & b#", &context, &universe).unwrap_err();
    assert_eq!(e.code, ErrorCode::INVALID_CHARACTER);
    assert_eq!(e.near, Some('#'));
}

// ─────────────────────────────────────────────────────────────────────
// JSON
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_request_round_trip_through_json() {
    let input = r#"{
        "expression": "Read & !Write",
        "context": ["r-1", "not valid"],
        "universe": [{"label": "Read", "id": "r-1"}, {"label": "Write", "id": "w-1"}]
    }"#;
    let output = evaluate_json(input).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["value"], true);
    assert!(report.get("error").is_none());
    assert_eq!(report["diagnostics"]["total_warnings"], 1);
    assert_eq!(
        report["diagnostics"]["warnings"][0]["kind"],
        "invalid_context_atom"
    );
}

#[test]
fn test_error_report_json() {
    let output = evaluate_json(r#"{"expression": "a & (b"}"#).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["success"], false);
    assert!(report["value"].is_null());
    assert_eq!(report["error"]["code"], 103);
    assert_eq!(report["error"]["category"], "syntax");
    assert_eq!(report["error"]["severity"], "error");
    assert_eq!(report["error"]["span"]["start"], 6);
}

#[test]
fn test_invalid_character_json_includes_near() {
    let output = evaluate_json(r#"{"expression": "a $ b"}"#).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["error"]["code"], 101);
    assert_eq!(report["error"]["near"], "$");
}

#[test]
fn test_request_options_from_json() {
    let output = evaluate_json(
        r#"{"expression": "a b", "context": ["a"], "options": {"reject_trailing_tokens": true}}"#,
    )
    .unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["error"]["code"], 105);
}

#[test]
fn test_malformed_request_is_an_error() {
    assert!(evaluate_json("not json").is_err());
    assert!(evaluate_json(r#"{"context": []}"#).is_err());
}

#[test]
fn test_evaluate_request_directly() {
    let request = EvalRequest {
        expression: "write".into(),
        context: vec!["w-1".into()],
        universe: vec![LabelIdPair::new("Write", "w-1")],
        options: EvalOptions::strict(),
    };
    let report = evaluate_request(&request);
    assert!(report.success);
    assert_eq!(report.value, Some(true));
}
