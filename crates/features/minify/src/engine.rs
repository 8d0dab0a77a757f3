use crate::content::{ContentKind, parse_media_type};
use crate::error::{MinifyError, Result};
use crate::minifiers::{self, Minifier};
use fxhash::FxHashMap;
use slim_domain::config::MinifyConfig;
use slim_domain::kinds::ContentKinds;
use tracing::debug;

/// Registry of the minifiers enabled by a [`MinifyConfig`].
///
/// Built once and shared through an `Arc` by every clone of the middleware.
#[derive(Debug)]
pub struct MinifyEngine {
    minifiers: FxHashMap<ContentKind, Box<dyn Minifier>>,
    suppress_warnings: bool,
    max_body_bytes: Option<usize>,
}

impl MinifyEngine {
    #[must_use]
    pub fn new(config: &MinifyConfig) -> Self {
        let enabled = config.kinds();
        let minifiers = ContentKind::ALL
            .into_iter()
            .filter(|kind| enabled.contains(kind.flag()))
            .map(|kind| minifiers::for_kind(kind, config))
            .map(|minifier| (minifier.kind(), minifier))
            .collect();

        debug!(kinds = %enabled, "Minify engine initialized");

        Self {
            minifiers,
            suppress_warnings: config.suppress_warnings,
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// The content kinds this engine minifies.
    #[must_use]
    pub fn enabled(&self) -> ContentKinds {
        self.minifiers.keys().map(|kind| kind.flag()).collect()
    }

    #[must_use]
    pub const fn suppress_warnings(&self) -> bool {
        self.suppress_warnings
    }

    #[must_use]
    pub const fn max_body_bytes(&self) -> Option<usize> {
        self.max_body_bytes
    }

    /// Classifies a bare media type, returning the kind only if it is enabled.
    #[must_use]
    pub fn kind_for(&self, media_type: &str) -> Option<ContentKind> {
        ContentKind::classify(media_type).filter(|kind| self.minifiers.contains_key(kind))
    }

    /// Resolves a raw `Content-Type` header value to an enabled kind.
    ///
    /// # Errors
    /// Returns [`MinifyError::MediaType`] if the value cannot be parsed.
    pub fn resolve(&self, content_type: &str) -> Result<Option<ContentKind>> {
        let media_type = parse_media_type(content_type)?;
        Ok(self.kind_for(&media_type))
    }

    /// Whether a bare media type would be minified by this engine.
    #[must_use]
    pub fn should_minify(&self, media_type: &str) -> bool {
        self.kind_for(media_type).is_some()
    }

    /// Runs the minifier registered for `kind`.
    ///
    /// # Errors
    /// Returns [`MinifyError::Unsupported`] if `kind` is disabled, or the
    /// minifier's own error if `input` cannot be parsed.
    pub fn minify(&self, kind: ContentKind, input: &[u8]) -> Result<Vec<u8>> {
        let minifier = self.minifiers.get(&kind).ok_or_else(|| MinifyError::Unsupported {
            message: format!("{kind} minification is disabled").into(),
            context: None,
        })?;
        minifier.minify(input)
    }

    /// Minifies `input` and keeps the result only if it is non-empty and strictly
    /// smaller than the input.
    ///
    /// # Errors
    /// Same as [`MinifyEngine::minify`].
    pub fn shrink(&self, kind: ContentKind, input: &[u8]) -> Result<Option<Vec<u8>>> {
        if input.is_empty() {
            return Ok(None);
        }
        let output = self.minify(kind, input)?;
        if output.is_empty() || output.len() >= input.len() {
            return Ok(None);
        }
        Ok(Some(output))
    }

    /// Minifies a whole body given its `Content-Type` header value.
    ///
    /// `Ok(None)` means the body should be sent as is: the kind is unknown or
    /// disabled, the body is empty, or minification did not make it smaller.
    ///
    /// # Errors
    /// Returns [`MinifyError::MediaType`] for an unparsable content type and the
    /// minifier's error for a malformed body.
    pub fn process(&self, content_type: &str, body: &[u8]) -> Result<Option<Vec<u8>>> {
        match self.resolve(content_type)? {
            Some(kind) => self.shrink(kind, body),
            None => Ok(None),
        }
    }
}

impl Default for MinifyEngine {
    fn default() -> Self {
        Self::new(&MinifyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_enables_markup_styles_and_scripts() {
        let engine = MinifyEngine::default();
        assert_eq!(engine.enabled(), ContentKinds::HTML | ContentKinds::CSS | ContentKinds::JS);
        assert!(engine.should_minify("text/html"));
        assert!(engine.should_minify("application/javascript"));
        assert!(!engine.should_minify("application/json"));
        assert!(!engine.should_minify("image/svg+xml"));
    }

    #[test]
    fn disabled_engine_minifies_nothing() {
        let engine = MinifyEngine::new(&MinifyConfig::disabled());
        assert!(engine.enabled().is_empty());
        for kind in ContentKind::ALL {
            assert!(matches!(engine.minify(kind, b"x"), Err(MinifyError::Unsupported { .. })));
        }
    }

    #[test]
    fn resolve_reports_bad_media_types() {
        let engine = MinifyEngine::default();
        assert!(matches!(engine.resolve("nonsense"), Err(MinifyError::MediaType { .. })));
        assert_eq!(engine.resolve("text/plain").ok(), Some(None));
        assert_eq!(engine.resolve("text/css; charset=utf-8").ok(), Some(Some(ContentKind::Css)));
    }

    #[test]
    fn shrink_ignores_empty_and_already_minimal_bodies() {
        let engine = MinifyEngine::new(&MinifyConfig::all());
        assert_eq!(engine.shrink(ContentKind::Json, b"").ok(), Some(None));
        assert_eq!(engine.shrink(ContentKind::Json, br#"{"a":1}"#).ok(), Some(None));
        assert_eq!(
            engine.shrink(ContentKind::Json, br#"{ "a" : 1 }"#).ok(),
            Some(Some(br#"{"a":1}"#.to_vec()))
        );
    }
}
