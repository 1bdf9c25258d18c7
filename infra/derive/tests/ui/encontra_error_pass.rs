use encontra_derive::encontra_error;
use std::borrow::Cow;

#[encontra_error]
pub enum FixtureError {
    #[error("Fixture unreadable{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal fixture error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _: FixtureError = "boom".into();
}
