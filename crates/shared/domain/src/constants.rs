//! Media types with a fixed spelling. Script, JSON and XML families are matched by
//! pattern in `slim-minify` instead.

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_CSS: &str = "text/css";
pub const IMAGE_SVG: &str = "image/svg+xml";
