use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Set of content families the minifier is allowed to touch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ContentKinds: u8 {
        const HTML = 1 << 0;
        const CSS = 1 << 1;
        const JS = 1 << 2;
        const JSON = 1 << 3;
        const XML = 1 << 4;
        const SVG = 1 << 5;

        const ALL = Self::HTML.bits()
            | Self::CSS.bits()
            | Self::JS.bits()
            | Self::JSON.bits()
            | Self::XML.bits()
            | Self::SVG.bits();
    }
}

impl fmt::Display for ContentKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names = self.iter_names().map(|(name, _)| name.to_ascii_lowercase());
        f.write_str(&names.collect::<Vec<_>>().join("|"))
    }
}
