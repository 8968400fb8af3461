use crate::domain::model::TimePoint;
use crate::utils::error::Result;
use crate::utils::validation::{check_args_present, NamedArg};

/// Amount of full days (86 400-second units) between two time points.
///
/// The result is always non-negative: the signed span is replaced by its
/// absolute value before decomposition, so the argument order does not
/// matter. If the two points use differing representations, the second is
/// projected onto the first point's timeline before differencing.
pub fn full_days_between(
    start_inclusive: Option<&TimePoint>,
    end_exclusive: Option<&TimePoint>,
) -> Result<i64> {
    let (start, end) = require_span_args(start_inclusive, end_exclusive)?;
    Ok(start.signed_span_to(end)?.abs()?.whole_days())
}

/// Amount of full weeks (7-day units) between two time points. Same
/// validation and span computation as [`full_days_between`].
pub fn full_weeks_between(
    start_inclusive: Option<&TimePoint>,
    end_exclusive: Option<&TimePoint>,
) -> Result<i64> {
    let (start, end) = require_span_args(start_inclusive, end_exclusive)?;
    let days = start.signed_span_to(end)?.abs()?.whole_days();
    Ok(days / 7)
}

fn require_span_args<'a>(
    start_inclusive: Option<&'a TimePoint>,
    end_exclusive: Option<&'a TimePoint>,
) -> Result<(&'a TimePoint, &'a TimePoint)> {
    check_args_present(&[
        NamedArg::of("start_inclusive", &start_inclusive),
        NamedArg::of("end_exclusive", &end_exclusive),
    ])?;
    match (start_inclusive, end_exclusive) {
        (Some(start), Some(end)) => Ok((start, end)),
        // check_args_present already rejected absent arguments
        _ => unreachable!("arguments checked above"),
    }
}
