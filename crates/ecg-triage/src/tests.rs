use serde_json::json;

use crate::cli::{Cli, CliError};
use crate::output::{float_repr, to_python_json};

fn render(value: &serde_json::Value) -> String {
    String::from_utf8(to_python_json(value).unwrap()).unwrap()
}

#[test]
fn separators_match_json_dumps() {
    let doc = json!({"error": "Invalid arguments"});
    assert_eq!(render(&doc), r#"{"error": "Invalid arguments"}"#);

    let doc = json!({"a": [1, 2, {"b": null}], "c": true});
    assert_eq!(render(&doc), r#"{"a": [1, 2, {"b": null}], "c": true}"#);
}

#[test]
fn non_ascii_is_escaped() {
    assert_eq!(render(&json!("Zoë")), r#""Zo\u00eb""#);
    assert_eq!(render(&json!("ok 😀")), r#""ok \ud83d\ude00""#);
    assert_eq!(render(&json!("tab\there")), r#""tab\there""#);
}

#[test]
fn delete_character_is_escaped() {
    assert_eq!(render(&json!("a\u{7f}b")), r#""a\u007fb""#);
    assert_eq!(render(&json!("\u{7f}é")), r#""\u007f\u00e9""#);
    assert_eq!(render(&json!("~")), r#""~""#);
}

#[test]
fn floats_follow_python_repr() {
    assert_eq!(float_repr(70.0), "70.0");
    assert_eq!(float_repr(0.0), "0.0");
    assert_eq!(float_repr(-0.0), "-0.0");
    assert_eq!(float_repr(0.1), "0.1");
    assert_eq!(float_repr(0.55), "0.55");
    assert_eq!(float_repr(123.456), "123.456");
    assert_eq!(float_repr(0.0001), "0.0001");
    assert_eq!(float_repr(1e-5), "1e-05");
    assert_eq!(float_repr(2.5e-7), "2.5e-07");
    assert_eq!(float_repr(1e16), "1e+16");
    assert_eq!(float_repr(1.5e16), "1.5e+16");
    assert_eq!(float_repr(1234567890123456.0), "1234567890123456.0");
    assert_eq!(float_repr(-42.5), "-42.5");
    assert_eq!(render(&json!({"x": 1.0e-5, "n": 7})), r#"{"x": 1e-05, "n": 7}"#);
}

#[test]
fn two_positionals_parse() {
    let cli = Cli::parse_args(["analyze-ecg", "rec.dat", r#"{"age": 70}"#]).unwrap();
    assert_eq!(cli.ecg_path(), std::path::PathBuf::from("rec.dat"));
    assert_eq!(cli.patient().unwrap(), json!({"age": 70}));
}

#[test]
fn empty_path_is_still_a_positional() {
    let cli = Cli::parse_args(["analyze-ecg", "", "{}"]).unwrap();
    assert!(cli.ecg_path().as_os_str().is_empty());
    assert_eq!(cli.patient().unwrap(), json!({}));
}

#[test]
fn hyphen_leading_operands_are_taken_verbatim() {
    let cli = Cli::parse_args(["analyze-ecg", "-rec.dat", "{}"]).unwrap();
    assert_eq!(cli.ecg_path(), std::path::PathBuf::from("-rec.dat"));

    let cli = Cli::parse_args(["analyze-ecg", "--", "{}"]).unwrap();
    assert_eq!(cli.ecg_path(), std::path::PathBuf::from("--"));
}

#[test]
fn other_argument_shapes_are_invalid() {
    for args in [
        vec!["analyze-ecg"],
        vec!["analyze-ecg", "rec.dat"],
        vec!["analyze-ecg", "rec.dat", "{}", "extra"],
        vec!["analyze-ecg", "--", "rec.dat", "{}"],
        vec!["analyze-ecg", "--help"],
        vec!["analyze-ecg", "--version"],
    ] {
        let err = Cli::parse_args(args).unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments));
        assert_eq!(err.to_string(), "Invalid arguments");
    }
}

#[test]
fn patient_json_only_needs_to_be_well_formed() {
    let cli = Cli::parse_args(["analyze-ecg", "rec.dat", "{not json"]).unwrap();
    assert!(matches!(cli.patient(), Err(CliError::MalformedInput(_))));

    for (raw, value) in [("42", json!(42)), ("[70, 150]", json!([70, 150])), ("null", json!(null))] {
        let cli = Cli::parse_args(["analyze-ecg", "rec.dat", raw]).unwrap();
        assert_eq!(cli.patient().unwrap(), value);
    }
}
