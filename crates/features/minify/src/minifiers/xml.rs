use super::Minifier;
use crate::content::ContentKind;
use crate::error::{MinifyError, Result};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, BytesText, Event};

/// XML minifier for feeds and generic XML documents.
///
/// Comments and whitespace-only text are dropped, other whitespace runs collapse
/// to one space, and tags are rewritten with single spaces between attributes. The declaration, doctype,
/// CDATA sections and processing instructions are kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlMinifier;

impl Minifier for XmlMinifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Xml
    }

    fn minify(&self, input: &[u8]) -> Result<Vec<u8>> {
        compact(input, Prune::Comments)
    }
}

/// What beyond whitespace is removed from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Prune {
    Comments,
    /// Comments, the XML declaration, the doctype and `<metadata>` subtrees.
    SvgNoise,
}

pub(super) fn compact(input: &[u8], prune: Prune) -> Result<Vec<u8>> {
    let source = std::str::from_utf8(input)?;
    let mut reader = Reader::from_str(source);
    let mut writer = Writer::new(Vec::with_capacity(input.len()));

    // Depth inside a pruned element; zero when emitting.
    let mut skipped = 0usize;

    loop {
        let event = reader.read_event().map_err(|err| {
            MinifyError::syntax(format!("at byte {}: {err}", reader.error_position()))
        })?;

        if skipped > 0 {
            match event {
                Event::Start(_) => skipped += 1,
                Event::End(_) => skipped -= 1,
                Event::Eof => return Err(MinifyError::syntax("unexpected end of document")),
                _ => {},
            }
            continue;
        }

        let event = match event {
            Event::Eof => break,
            Event::Comment(_) => continue,
            Event::Text(text) => match collapse_whitespace(&text)? {
                Some(text) => Event::Text(text),
                None => continue,
            },
            Event::Decl(_) | Event::DocType(_) if prune == Prune::SvgNoise => continue,
            Event::Start(tag) if prune == Prune::SvgNoise && is_metadata(&tag) => {
                skipped = 1;
                continue;
            },
            Event::Empty(tag) if prune == Prune::SvgNoise && is_metadata(&tag) => continue,
            Event::Start(tag) => Event::Start(normalize_tag(&tag)?),
            Event::Empty(tag) => Event::Empty(normalize_tag(&tag)?),
            other => other,
        };

        writer.write_event(event).map_err(|err| MinifyError::from(err.to_string()))?;
    }

    Ok(writer.into_inner())
}

/// Collapses whitespace runs in escaped text to a single space.
///
/// Returns `None` for text that is whitespace only. Text next to inline
/// elements keeps one space at its edges, so `Hello <b>world</b>` stays intact.
fn collapse_whitespace(text: &BytesText<'_>) -> Result<Option<BytesText<'static>>> {
    let raw = std::str::from_utf8(text)?;
    if raw.bytes().all(|b| b.is_ascii_whitespace()) {
        return Ok(None);
    }

    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for ch in raw.chars() {
        if ch.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    Ok(Some(BytesText::from_escaped(out)))
}

fn is_metadata(tag: &BytesStart<'_>) -> bool {
    tag.local_name().as_ref() == b"metadata"
}

/// Rebuilds a start tag so attributes are separated by exactly one space.
///
/// Values containing a double quote were written with single quotes and are
/// kept verbatim, since the writer always quotes with `"`.
fn normalize_tag(tag: &BytesStart<'_>) -> Result<BytesStart<'static>> {
    let attributes = tag
        .attributes()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|err| MinifyError::syntax(err.to_string()))?;

    if attributes.iter().any(|attr| attr.value.contains(&b'"')) {
        return Ok(tag.to_owned().into_owned());
    }

    let name = std::str::from_utf8(tag.name().as_ref())?.to_owned();
    let mut normalized = BytesStart::new(name);
    normalized.extend_attributes(attributes);
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- generated -->
<rss   version="2.0">
  <channel>
    <title>  Slimline releases  </title>
    <item   id="1"    kind="minor" />
    <description><![CDATA[ keep  this ]]></description>
  </channel>
</rss>
"#;

    fn minify(input: &str) -> String {
        String::from_utf8(XmlMinifier.minify(input.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn compacts_feed() {
        let out = minify(FEED);
        assert_eq!(
            out,
            r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title> Slimline releases </title><item id="1" kind="minor"/><description><![CDATA[ keep  this ]]></description></channel></rss>"#
        );
    }

    #[test]
    fn keeps_single_quoted_values_with_double_quotes() {
        let out = minify(r#"<a  title='say "hi"'/>"#);
        assert_eq!(out, r#"<a  title='say "hi"'/>"#);
    }

    #[test]
    fn keeps_spaces_around_inline_elements() {
        assert_eq!(minify("<p>Hello <b>world</b> again</p>"), "<p>Hello <b>world</b> again</p>");
        assert_eq!(
            minify("<p>\n    Hello   <b>big\n  world</b>\n</p>"),
            "<p> Hello <b>big world</b> </p>"
        );
    }

    #[test]
    fn rejects_mismatched_tags() {
        let err = XmlMinifier.minify(b"<a><b></a>").unwrap_err();
        assert!(matches!(err, MinifyError::Syntax { .. }));
    }
}
