use std::borrow::Cow;

/// Error types raised while classifying or minifying a response body.
#[slim_derive::slim_error]
pub enum MinifyError {
    /// The `Content-Type` header is not a valid media type.
    #[error("Invalid media type{}: {source}", format_context(.context))]
    MediaType { source: mime::FromStrError, context: Option<Cow<'static, str>> },

    /// The body could not be parsed by the minifier for its kind.
    #[error("Syntax error{}: {message}", format_context(.context))]
    Syntax { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The body is not valid UTF-8 where text is required.
    #[error("Encoding error{}: {source}", format_context(.context))]
    Encoding { source: std::str::Utf8Error, context: Option<Cow<'static, str>> },

    /// No minifier is registered for the requested kind.
    #[error("Unsupported content{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal minify error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl MinifyError {
    pub(crate) fn syntax(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Syntax { message: message.into(), context: None }
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;
