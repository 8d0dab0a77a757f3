use super::Minifier;
use crate::content::ContentKind;
use crate::error::{MinifyError, Result};
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

/// Stylesheet minifier backed by `lightningcss`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CssMinifier;

impl Minifier for CssMinifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Css
    }

    fn minify(&self, input: &[u8]) -> Result<Vec<u8>> {
        let source = std::str::from_utf8(input)?;

        let mut sheet = StyleSheet::parse(source, ParserOptions::default())
            .map_err(|err| MinifyError::syntax(err.to_string()))?;
        sheet.minify(MinifyOptions::default()).map_err(|err| MinifyError::syntax(err.to_string()))?;
        let printed = sheet
            .to_css(PrinterOptions { minify: true, ..PrinterOptions::default() })
            .map_err(|err| MinifyError::from(err.to_string()))?;

        Ok(printed.code.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minify(input: &str) -> String {
        String::from_utf8(CssMinifier.minify(input.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn collapses_rules() {
        let out = minify(".data-table {\n    width: 100%;\n    border-collapse: collapse;\n}\n");
        assert!(out.starts_with(".data-table{"));
        assert!(out.contains("width:100%"));
        assert!(out.contains("border-collapse:collapse"));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn shortens_colors() {
        let out = minify("body { color: #ffffff; }");
        assert_eq!(out, "body{color:#fff}");
    }

    #[test]
    fn drops_comments() {
        let out = minify("/* header */\na { color: red; }");
        assert!(!out.contains("header"));
    }

    #[test]
    fn rejects_non_utf8() {
        let err = CssMinifier.minify(&[0xff, 0xfe, b'a']).unwrap_err();
        assert!(matches!(err, MinifyError::Encoding { .. }));
    }
}
