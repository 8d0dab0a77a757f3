use super::Minifier;
use crate::content::ContentKind;
use crate::error::{MinifyError, Result};
use minify_js::{Session, TopLevelMode};

/// JavaScript minifier backed by `minify-js`.
///
/// Scripts are treated as classic global scripts, so top-level declarations keep
/// their names and stay callable from other scripts on the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsMinifier;

impl Minifier for JsMinifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Js
    }

    fn minify(&self, input: &[u8]) -> Result<Vec<u8>> {
        let session = Session::new();
        let mut out = Vec::with_capacity(input.len());
        minify_js::minify(&session, TopLevelMode::Global, input, &mut out)
            .map_err(|err| MinifyError::syntax(format!("{err:?}")))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_comments_and_whitespace() {
        let input = b"// greeting\nfunction greet( name ) {\n    /* block */\n    return 'hi ' + name ;\n}\ngreet( 'x' );\n";
        let out = String::from_utf8(JsMinifier.minify(input).unwrap()).unwrap();
        assert!(out.len() < input.len());
        assert!(!out.contains("greeting"));
        assert!(!out.contains("block"));
        assert!(out.contains("greet("));
    }

    #[test]
    fn rejects_invalid_script() {
        let err = JsMinifier.minify(b"function ( {").unwrap_err();
        assert!(matches!(err, MinifyError::Syntax { .. }));
    }
}
