use composer_derive::composer_error;
use std::borrow::Cow;

#[composer_error]
pub enum ParseError {
    #[error("Bad number{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, ParseError> {
    let value = raw.parse::<u32>().context("Parsing sample")?;
    if value == 0 {
        return Err("zero is not allowed".into());
    }
    Ok(value)
}

fn main() {
    let err = parse("abc").unwrap_err();
    assert_eq!(err.to_string(), "Bad number (Parsing sample): invalid digit found in string");

    let err = parse("0").unwrap_err();
    assert!(matches!(err, ParseError::Internal { .. }));

    let err = Err::<(), _>(ParseError::from("late")).context("outer").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (outer): late");
}
