use chrono::NaiveDate;
use jamendo::{JamendoError, ParamValue, Parameters};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_defaults_are_injected() {
    let pairs = Parameters::new().normalize("83039c0d").unwrap();

    assert_eq!(value(&pairs, "client_id"), Some("83039c0d"));
    assert_eq!(value(&pairs, "format"), Some("json"));
    assert_eq!(pairs.len(), 2);
}

#[test]
fn test_client_id_overrides_caller_value() {
    let pairs = Parameters::new()
        .with("client_id", "someone-else")
        .normalize("83039c0d")
        .unwrap();

    let ids: Vec<_> = pairs.iter().filter(|(k, _)| k == "client_id").collect();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].1, "83039c0d");
}

#[test]
fn test_caller_format_is_kept() {
    let pairs = Parameters::new()
        .with("format", "jsonpretty")
        .normalize("id")
        .unwrap();

    assert_eq!(value(&pairs, "format"), Some("jsonpretty"));
    assert_eq!(pairs.iter().filter(|(k, _)| k == "format").count(), 1);
}

#[test]
fn test_blank_format_falls_back_to_json() {
    let pairs = Parameters::new()
        .with("format", ParamValue::List(vec![]))
        .normalize("id")
        .unwrap();

    assert_eq!(value(&pairs, "format"), Some("json"));
    assert_eq!(pairs.iter().filter(|(k, _)| k == "format").count(), 1);
}

#[test]
fn test_scalar_encoding() {
    let pairs = Parameters::new()
        .with("id", 245)
        .with("fullcount", true)
        .with("namesearch", "Simple Exercice")
        .normalize("id")
        .unwrap();

    assert_eq!(value(&pairs, "id"), Some("245"));
    assert_eq!(value(&pairs, "fullcount"), Some("true"));
    assert_eq!(value(&pairs, "namesearch"), Some("Simple Exercice"));
}

#[test]
fn test_lists_are_space_joined() {
    let pairs = Parameters::new()
        .with("id", vec![245, 246, 247])
        .with("include", vec!["musicinfo", " stats ", ""])
        .normalize("id")
        .unwrap();

    assert_eq!(value(&pairs, "id"), Some("245 246 247"));
    assert_eq!(value(&pairs, "include"), Some("musicinfo stats"));
}

#[test]
fn test_empty_list_is_dropped() {
    let pairs = Parameters::new()
        .with("tags", Vec::<String>::new())
        .with("fuzzytags", vec!["", "  "])
        .normalize("id")
        .unwrap();

    assert_eq!(value(&pairs, "tags"), None);
    assert_eq!(value(&pairs, "fuzzytags"), None);
}

#[test]
fn test_date_range_encoding() {
    let pairs = Parameters::new()
        .date_between(date(2012, 1, 1), date(2012, 12, 31))
        .normalize("id")
        .unwrap();
    assert_eq!(value(&pairs, "datebetween"), Some("2012-01-01_2012-12-31"));

    // Same day on both ends is a valid range
    let pairs = Parameters::new()
        .with("datebetween", date(2012, 5, 5)..=date(2012, 5, 5))
        .normalize("id")
        .unwrap();
    assert_eq!(value(&pairs, "datebetween"), Some("2012-05-05_2012-05-05"));
}

#[test]
fn test_reversed_date_range_is_rejected() {
    let err = Parameters::new()
        .date_between(date(2013, 1, 1), date(2012, 1, 1))
        .normalize("id")
        .unwrap_err();

    match err {
        JamendoError::InvalidParameter { name, .. } => assert_eq!(name, "datebetween"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_keys_are_sorted_and_replaceable() {
    let mut params = Parameters::new().with("limit", 10).with("artist_id", 5);
    params.set("limit", 20);

    assert_eq!(params.get("limit"), Some(&ParamValue::Number(20)));
    assert_eq!(params.remove("artist_id"), Some(ParamValue::Number(5)));

    let pairs = Parameters::new()
        .with("order", "name")
        .with("limit", 2)
        .normalize("id")
        .unwrap();
    let keys: Vec<_> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["limit", "order", "format", "client_id"]);
}

#[test]
fn test_collect_from_pairs() {
    let params: Parameters = vec![("limit", "5"), ("order", "popularity_week")]
        .into_iter()
        .collect();

    assert_eq!(params.len(), 2);
    assert_eq!(
        params.get("order"),
        Some(&ParamValue::Text("popularity_week".to_string()))
    );
}
