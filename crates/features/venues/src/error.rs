use crate::record::RecordError;
use std::borrow::Cow;

/// Failures of the read side. None of these mean "no such venue".
#[encontra_derive::encontra_error]
pub enum StoreError {
    /// The backing store could not be reached or refused the read.
    #[error("Venue store unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A stored document is not valid venue JSON.
    #[error("Malformed venue document{}: {source}", format_context(.context))]
    Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The document parsed but failed validation.
    #[error("Invalid venue record{}: {source}", format_context(.context))]
    Invalid { source: RecordError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "surreal")]
    #[error("Venue database error{}: {source}", format_context(.context))]
    Database { source: encontra_database::DatabaseError, context: Option<Cow<'static, str>> },
}
