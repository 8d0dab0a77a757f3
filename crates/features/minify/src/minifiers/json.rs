use super::Minifier;
use crate::content::ContentKind;
use crate::error::{MinifyError, Result};
use serde::de::IgnoredAny;

/// JSON minifier.
///
/// The document is validated first, then whitespace outside string literals is
/// dropped. Nothing is re-encoded: key order, number spelling and escapes are
/// byte-for-byte what the handler produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonMinifier;

impl Minifier for JsonMinifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Json
    }

    fn minify(&self, input: &[u8]) -> Result<Vec<u8>> {
        serde_json::from_slice::<IgnoredAny>(input)
            .map_err(|err| MinifyError::syntax(err.to_string()))?;
        Ok(compact(input))
    }
}

fn compact(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for &byte in input {
        if in_string {
            out.push(byte);
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => {},
            b'"' => {
                in_string = true;
                out.push(byte);
            },
            _ => out.push(byte),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minify(input: &str) -> String {
        String::from_utf8(JsonMinifier.minify(input.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn strips_whitespace_between_tokens() {
        let out = minify("{\n  \"id\": 1,\n  \"tags\": [ \"a\", \"b\" ]\n}\n");
        assert_eq!(out, r#"{"id":1,"tags":["a","b"]}"#);
    }

    #[test]
    fn keeps_whitespace_inside_strings() {
        let out = minify(r#"{ "name" : "HTML  Minifier" }"#);
        assert_eq!(out, r#"{"name":"HTML  Minifier"}"#);
    }

    #[test]
    fn handles_escaped_quotes() {
        let out = minify(r#"{ "quote" : "say \"hi \" ", "next" : true }"#);
        assert_eq!(out, r#"{"quote":"say \"hi \" ","next":true}"#);
    }

    #[test]
    fn keeps_number_spelling() {
        assert_eq!(minify("[ 1.50 , 2e10 ]"), "[1.50,2e10]");
    }

    #[test]
    fn rejects_invalid_document() {
        let err = JsonMinifier.minify(b"{ \"open\": ").unwrap_err();
        assert!(matches!(err, MinifyError::Syntax { .. }));
    }
}
