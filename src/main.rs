use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime};
use date_span::utils::logger;
use date_span::{full_days_between, full_weeks_between, TimePoint};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    tracing::info!("Starting date-span demo");

    let now = TimePoint::from(Local::now().naive_local());
    let reference = TimePoint::from(
        NaiveDateTime::parse_from_str("2021-07-14T00:00:00", "%Y-%m-%dT%H:%M:%S")
            .context("parsing the reference date-time")?,
    );
    report(&now, &reference)?;

    // Fixed pair so part of the output stays reproducible across runs.
    let start = TimePoint::from(
        NaiveDate::from_ymd_opt(2021, 11, 1).context("building the fixed start date")?,
    );
    let end = TimePoint::from(
        NaiveDate::from_ymd_opt(2022, 5, 1).context("building the fixed end date")?,
    );
    report(&start, &end)?;

    tracing::info!("Demo finished");
    Ok(())
}

fn report(start: &TimePoint, end: &TimePoint) -> anyhow::Result<()> {
    let days = full_days_between(Some(start), Some(end))?;
    let weeks = full_weeks_between(Some(start), Some(end))?;
    println!("Full days between {start} and {end}: {days}");
    println!("Full weeks between {start} and {end}: {weeks}");
    Ok(())
}
