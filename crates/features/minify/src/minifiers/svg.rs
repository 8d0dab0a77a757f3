use super::Minifier;
use super::xml::{Prune, compact};
use crate::content::ContentKind;
use crate::error::Result;

/// SVG minifier: the XML rules plus removal of the declaration, doctype and
/// editor `<metadata>` blocks, none of which affect rendering inline or as an image.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgMinifier;

impl Minifier for SvgMinifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Svg
    }

    fn minify(&self, input: &[u8]) -> Result<Vec<u8>> {
        compact(input, Prune::SvgNoise)
    }
}
