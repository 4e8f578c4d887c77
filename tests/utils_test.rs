use chrono::NaiveDate;
use jamendo::ParamValue;
use jamendo::utils::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated values should be different
    assert_ne!(state, generate_state());
}

#[test]
fn test_parse_param_text() {
    let (key, value) = parse_param("artist_name=Both").unwrap();
    assert_eq!(key, "artist_name");
    assert_eq!(value, ParamValue::Text("Both".to_string()));

    // Only the first `=` splits
    let (key, value) = parse_param("namesearch=a=b").unwrap();
    assert_eq!(key, "namesearch");
    assert_eq!(value, ParamValue::Text("a=b".to_string()));
}

#[test]
fn test_parse_param_list() {
    let (key, value) = parse_param("include=musicinfo, stats").unwrap();
    assert_eq!(key, "include");
    assert_eq!(
        value,
        ParamValue::List(vec!["musicinfo".to_string(), "stats".to_string()])
    );
}

#[test]
fn test_parse_param_rejects_malformed() {
    assert!(parse_param("limit").is_err());
    assert!(parse_param("=10").is_err());
}

#[test]
fn test_parse_date_range() {
    let (from, to) = parse_date_range("2012-01-01..2012-12-31").unwrap();
    assert_eq!(from, date(2012, 1, 1));
    assert_eq!(to, date(2012, 12, 31));

    assert!(parse_date_range("2012-01-01").is_err());
    assert!(parse_date_range("2012-13-01..2012-12-31").is_err());
    assert!(parse_date_range("2013-01-01..2012-12-31").is_err());
}

#[test]
fn test_build_parameters() {
    let params = vec![
        ("limit".to_string(), ParamValue::Text("5".to_string())),
        (
            "tags".to_string(),
            ParamValue::List(vec!["rock".to_string(), "pop".to_string()]),
        ),
    ];

    let built = build_parameters(&params, Some((date(2010, 1, 1), date(2010, 6, 30))));
    assert_eq!(built.len(), 3);
    assert_eq!(built.get("limit"), Some(&ParamValue::Text("5".to_string())));
    assert_eq!(
        built.get("datebetween"),
        Some(&ParamValue::DateRange {
            from: date(2010, 1, 1),
            to: date(2010, 6, 30)
        })
    );

    let built = build_parameters(&params, None);
    assert!(!built.contains("datebetween"));
}
