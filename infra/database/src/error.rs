use std::borrow::Cow;

/// Failures while opening or using a [`Database`](crate::Database) session.
#[encontra_derive::encontra_error]
pub enum DatabaseError {
    /// A `[database]` setting is blank.
    #[error("Invalid database settings{}: {message}", format_context(.context))]
    Settings { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The engine could not be started or never reported healthy.
    #[error("Database unreachable{}: {message}", format_context(.context))]
    Unreachable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Root credentials were rejected.
    #[error("Database sign-in rejected{}: {message}", format_context(.context))]
    SignIn { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("SurrealDB error{}: {source}", format_context(.context))]
    Surreal {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },
}
