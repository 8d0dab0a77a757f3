//! One [`Minifier`] per content family. Each is stateless after construction and
//! shared between requests.

mod css;
mod html;
mod js;
mod json;
mod svg;
mod xml;

pub use css::CssMinifier;
pub use html::HtmlMinifier;
pub use js::JsMinifier;
pub use json::JsonMinifier;
pub use svg::SvgMinifier;
pub use xml::XmlMinifier;

use crate::content::ContentKind;
use crate::error::Result;
use slim_domain::config::MinifyConfig;
use std::fmt::Debug;

/// Shrinks a complete document of a single content family.
pub trait Minifier: Send + Sync + Debug {
    /// The family this minifier handles.
    fn kind(&self) -> ContentKind;

    /// Returns the minified form of `input`.
    ///
    /// # Errors
    /// Returns [`crate::MinifyError`] if `input` cannot be parsed as this kind.
    fn minify(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Builds the minifier for `kind`, honouring the per-kind options in `config`.
#[must_use]
pub fn for_kind(kind: ContentKind, config: &MinifyConfig) -> Box<dyn Minifier> {
    match kind {
        ContentKind::Html => Box::new(HtmlMinifier::new(config.html_options)),
        ContentKind::Css => Box::new(CssMinifier),
        ContentKind::Js => Box::new(JsMinifier),
        ContentKind::Json => Box::new(JsonMinifier),
        ContentKind::Xml => Box::new(XmlMinifier),
        ContentKind::Svg => Box::new(SvgMinifier),
    }
}
