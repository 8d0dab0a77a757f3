use proptest::prelude::*;
use slim_domain::config::MinifyConfig;
use slim_minify::{ContentKind, MinifyEngine, MinifyError};

const SLOPPY_JS: &str = include_str!("fixtures/sloppy.js");

#[test]
fn sloppy_script_keeps_addition_callable() {
    let engine = MinifyEngine::default();
    let minified = engine
        .process("text/javascript; charset=utf-8", SLOPPY_JS.as_bytes())
        .expect("valid script")
        .expect("smaller output");
    let minified = String::from_utf8(minified).expect("utf-8");

    assert!(minified.len() < SLOPPY_JS.len() / 2);
    assert!(minified.contains("addNumbers(5,10)"));
    assert!(minified.contains("showAlert()"));
    assert!(!minified.contains("This comment goes away"));
    assert!(!minified.contains("spanning"));
}

#[test]
fn process_skips_disabled_kinds() {
    let engine = MinifyEngine::default();
    let json = b"{ \"a\" : 1 }";
    assert!(engine.process("application/json", json).expect("parsed").is_none());

    let engine = MinifyEngine::new(&MinifyConfig::all());
    assert_eq!(
        engine.process("application/problem+json", json).expect("parsed"),
        Some(b"{\"a\":1}".to_vec())
    );
}

#[test]
fn process_rejects_bad_content_type() {
    let err = MinifyEngine::default().process("garbage", b"body").unwrap_err();
    assert!(matches!(err, MinifyError::MediaType { .. }));
    assert!(err.to_string().starts_with("Invalid media type"));
}

#[test]
fn unsupported_kind_names_the_kind() {
    let err = MinifyEngine::new(&MinifyConfig::disabled())
        .minify(ContentKind::Svg, b"<svg/>")
        .unwrap_err();
    assert_eq!(err.to_string(), "Unsupported content: svg minification is disabled");
}

#[test]
fn feed_minified_as_xml() {
    let mut config = MinifyConfig::disabled();
    config.xml = true;
    let engine = MinifyEngine::new(&config);

    let feed = "<feed>\n  <!-- x -->\n  <entry>  one   two  </entry>\n</feed>\n";
    let out = engine.process("application/atom+xml", feed.as_bytes()).expect("valid feed");
    assert_eq!(out.as_deref(), Some(b"<feed><entry> one two </entry></feed>".as_slice()));
}

fn json_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        "[ a-zA-Z0-9\"\\\\\t\n]{0,12}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::from),
            prop::collection::btree_map("[a-z ]{1,6}", inner, 0..6)
                .prop_map(|map| serde_json::Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn json_minification_matches_compact_encoding(value in json_value()) {
        let pretty = serde_json::to_string_pretty(&value).expect("serialize");
        let compact = serde_json::to_string(&value).expect("serialize");

        let engine = MinifyEngine::new(&MinifyConfig::all());
        let out = engine.minify(ContentKind::Json, pretty.as_bytes()).expect("valid json");

        prop_assert_eq!(String::from_utf8(out).expect("utf-8"), compact);
    }
}
