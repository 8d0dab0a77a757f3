use slim_derive::slim_error;
use std::borrow::Cow;

#[slim_error]
pub enum ParseError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: ParseError = "boom".into();
    let _ = err.to_string();
}
