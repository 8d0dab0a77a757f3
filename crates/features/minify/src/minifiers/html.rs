use super::Minifier;
use crate::content::ContentKind;
use crate::error::Result;
use minify_html::Cfg;
use slim_domain::config::HtmlOptions;
use std::fmt;

/// HTML minifier backed by `minify-html`. Inline `<style>` and `<script>` blocks
/// are minified as well.
pub struct HtmlMinifier {
    options: HtmlOptions,
    cfg: Cfg,
}

impl HtmlMinifier {
    #[must_use]
    pub fn new(options: HtmlOptions) -> Self {
        let mut cfg = Cfg::new();
        cfg.keep_html_and_head_opening_tags = options.keep_document_tags;
        cfg.keep_closing_tags = options.keep_end_tags;
        cfg.keep_comments = options.keep_comments;
        cfg.minify_css = true;
        cfg.minify_js = true;
        Self { options, cfg }
    }
}

impl Default for HtmlMinifier {
    fn default() -> Self {
        Self::new(HtmlOptions::default())
    }
}

impl fmt::Debug for HtmlMinifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlMinifier").field("options", &self.options).finish_non_exhaustive()
    }
}

impl Minifier for HtmlMinifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Html
    }

    fn minify(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(minify_html::minify(input, &self.cfg))
    }
}
