use crate::error::Result;
use regex::Regex;
use slim_domain::constants::{IMAGE_SVG, TEXT_CSS, TEXT_HTML};
use slim_domain::kinds::ContentKinds;
use std::fmt;
use std::sync::LazyLock;

static JS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(application|text)/(x-)?(java|ecma)script$").expect("script regex is valid")
});
static JSON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(application|text)/((.+\+)?json|json-seq|ld\+json)$")
        .expect("json regex is valid")
});
static XML_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(application|text)/(x-)?(xml|atom\+xml|rss\+xml)$")
        .expect("xml regex is valid")
});

/// The content families the middleware knows how to minify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Html,
    Css,
    Js,
    Json,
    Xml,
    Svg,
}

impl ContentKind {
    pub const ALL: [Self; 6] = [Self::Html, Self::Css, Self::Js, Self::Json, Self::Xml, Self::Svg];

    /// Maps a bare, lowercase media type to its content family.
    ///
    /// Exact types are checked first, so `image/svg+xml` is [`ContentKind::Svg`]
    /// and never falls into the XML family.
    #[must_use]
    pub fn classify(media_type: &str) -> Option<Self> {
        match media_type {
            TEXT_HTML => Some(Self::Html),
            TEXT_CSS => Some(Self::Css),
            IMAGE_SVG => Some(Self::Svg),
            m if JS_PATTERN.is_match(m) => Some(Self::Js),
            m if JSON_PATTERN.is_match(m) => Some(Self::Json),
            m if XML_PATTERN.is_match(m) => Some(Self::Xml),
            _ => None,
        }
    }

    #[must_use]
    pub const fn flag(self) -> ContentKinds {
        match self {
            Self::Html => ContentKinds::HTML,
            Self::Css => ContentKinds::CSS,
            Self::Js => ContentKinds::JS,
            Self::Json => ContentKinds::JSON,
            Self::Xml => ContentKinds::XML,
            Self::Svg => ContentKinds::SVG,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts the bare media type from a `Content-Type` value.
///
/// Parameters such as `charset` are dropped and the result is lowercased:
/// `"Text/HTML; charset=utf-8"` becomes `"text/html"`.
///
/// # Errors
/// Returns [`MinifyError::MediaType`] if the value is not a valid media type.
pub fn parse_media_type(content_type: &str) -> Result<String> {
    let mime: mime::Mime = content_type.trim().parse()?;
    Ok(mime.essence_str().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MinifyError;

    #[test]
    fn classifies_exact_types() {
        assert_eq!(ContentKind::classify("text/html"), Some(ContentKind::Html));
        assert_eq!(ContentKind::classify("text/css"), Some(ContentKind::Css));
        assert_eq!(ContentKind::classify("image/svg+xml"), Some(ContentKind::Svg));
    }

    #[test]
    fn classifies_script_family() {
        for media in [
            "application/javascript",
            "text/javascript",
            "application/x-javascript",
            "text/ecmascript",
            "application/x-ecmascript",
        ] {
            assert_eq!(ContentKind::classify(media), Some(ContentKind::Js), "{media}");
        }
        assert_eq!(ContentKind::classify("application/typescript"), None);
    }

    #[test]
    fn classifies_json_family() {
        for media in [
            "application/json",
            "text/json",
            "application/ld+json",
            "application/json-seq",
            "application/problem+json",
            "application/vnd.api+json",
        ] {
            assert_eq!(ContentKind::classify(media), Some(ContentKind::Json), "{media}");
        }
        assert_eq!(ContentKind::classify("application/jsonp"), None);
    }

    #[test]
    fn classifies_xml_family() {
        for media in [
            "application/xml",
            "text/xml",
            "application/x-xml",
            "application/atom+xml",
            "application/rss+xml",
        ] {
            assert_eq!(ContentKind::classify(media), Some(ContentKind::Xml), "{media}");
        }
        assert_eq!(ContentKind::classify("application/xhtml+xml"), None);
    }

    #[test]
    fn unknown_types_are_not_classified() {
        assert_eq!(ContentKind::classify("text/plain"), None);
        assert_eq!(ContentKind::classify("image/png"), None);
        assert_eq!(ContentKind::classify(""), None);
    }

    #[test]
    fn media_type_strips_parameters_and_case() {
        assert_eq!(parse_media_type("Text/HTML; charset=UTF-8").ok().as_deref(), Some("text/html"));
        assert_eq!(
            parse_media_type("application/json;charset=utf-8").ok().as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn malformed_media_type_is_rejected() {
        let err = parse_media_type("not a media type").unwrap_err();
        assert!(matches!(err, MinifyError::MediaType { .. }));
    }

    #[test]
    fn flags_match_kinds() {
        let all: ContentKinds = ContentKind::ALL.iter().map(|kind| kind.flag()).collect();
        assert_eq!(all, ContentKinds::ALL);
    }
}
