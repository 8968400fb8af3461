use crate::utils::error::{Result, SpanError};
use std::fmt;

const ARG_ERROR_DETAIL: &str = "this argument can not be None";

/// A `(name, presence)` pair describing one argument handed to
/// [`check_args_present`]. Equality is by name and presence, so the same
/// argument supplied twice collapses to one violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedArg {
    name: &'static str,
    present: bool,
}

impl NamedArg {
    pub fn of<T>(name: &'static str, value: &Option<T>) -> Self {
        Self {
            name,
            present: value.is_some(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_present(&self) -> bool {
        self.present
    }
}

impl fmt::Display for NamedArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NamedArg{{name: '{}', present: {}}}",
            self.name, self.present
        )
    }
}

/// Checks every supplied argument before failing, so the caller gets the
/// complete list of violations in one error rather than only the first.
/// Messages keep the order in which the arguments were supplied.
///
/// Panics if `args` is empty: the validator being invoked with nothing to
/// check is a defect in the calling code, not caller misuse.
pub fn check_args_present(args: &[NamedArg]) -> Result<()> {
    if args.is_empty() {
        panic!("check_args_present called with an empty argument list");
    }

    let mut messages: Vec<String> = Vec::new();
    for arg in args {
        if arg.is_present() {
            continue;
        }
        let message = format!(
            "Method argument: '{}', error message: '{}'.",
            arg.name(),
            ARG_ERROR_DETAIL
        );
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    if messages.is_empty() {
        return Ok(());
    }

    let mut joined = String::new();
    for message in &messages {
        joined.push_str(message);
        joined.push('\n');
    }
    Err(SpanError::InvalidArgument { message: joined })
}
