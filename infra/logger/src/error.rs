use std::borrow::Cow;

/// Reasons the global subscriber could not be installed.
#[encontra_derive::encontra_error]
pub enum LoggerError {
    /// The `[logging]` section names an unknown level, a bad filter or no output.
    #[error("Invalid logging settings{}: {message}", format_context(.context))]
    Settings { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Log directory unavailable{}: {source}", format_context(.context))]
    Directory { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rolling file appender error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// Another subscriber already owns the process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },
}
