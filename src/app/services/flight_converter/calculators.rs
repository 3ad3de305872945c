//! Derived value calculations: distance and timestamps
//!
//! MyFlightRadar24 exports only the departure date together with local
//! departure and arrival clock times. Air Travel Log wants full dates for
//! both ends, so the arrival date is derived from the departure instant, the
//! flight duration and the destination timezone.

use crate::app::models::Airport;
use crate::constants::{
    EARTH_RADIUS_KM, SOURCE_DATETIME_FORMAT, TARGET_DATE_FORMAT, TARGET_DATETIME_FORMAT,
};
use crate::{Error, Result};
use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// Great-circle distance in kilometres between two `(longitude, latitude)` points
///
/// Uses the haversine formula on a spherical Earth.
pub fn calculate_distance(origin: (f64, f64), destination: (f64, f64)) -> f64 {
    let (lon1, lat1) = origin;
    let (lon2, lat2) = destination;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Resolve an airport's IANA timezone
pub fn parse_timezone(airport: &Airport) -> Result<Tz> {
    airport
        .timezone
        .parse::<Tz>()
        .map_err(|_| Error::unknown_timezone(&airport.icao, &airport.timezone))
}

/// Parse a `H:MM:SS` duration; hours may exceed 23
pub fn parse_duration(duration: &str) -> Result<TimeDelta> {
    let malformed = || Error::malformed_field("Duration", duration);

    let parts: Vec<&str> = duration.split(':').collect();
    if parts.len() != 3 {
        return Err(malformed());
    }

    let mut values = [0i64; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part.trim().parse().map_err(|_| malformed())?;
    }
    let [hours, minutes, seconds] = values;

    hours
        .checked_mul(3600)
        .and_then(|total| total.checked_add(minutes.checked_mul(60)?))
        .and_then(|total| total.checked_add(seconds))
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(malformed)
}

/// Drop the trailing `:SS` component of a clock time or duration
///
/// `"2:30:00"` becomes `"2:30"`; strings without a colon are returned as-is.
pub fn truncate_seconds(value: &str) -> &str {
    value
        .rsplit_once(':')
        .map(|(head, _)| head)
        .unwrap_or(value)
}

/// Attach a timezone to a naive local timestamp
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times in a
/// DST gap keep the UTC offset that was in force before the gap.
fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(local) => local,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = tz
                .offset_from_utc_datetime(&(naive - TimeDelta::days(1)))
                .fix();
            let utc = naive - TimeDelta::seconds(i64::from(before.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

/// Format the departure and arrival stamps for a flight
///
/// The departure stamp is the local departure date and time. The arrival
/// stamp combines the arrival date, computed as departure instant plus
/// duration in the destination timezone, with the exported arrival clock
/// time. The computed arrival time of day is not used.
///
/// # Arguments
/// * `departure_date` - `MM/DD/YY`
/// * `departure_time` - `HH:MM:SS`, origin-local
/// * `duration` - `H:MM:SS`
/// * `arrival_time` - `HH:MM:SS`, destination-local
/// * `origin_tz` / `destination_tz` - airport timezones
///
/// # Returns
/// `(departure_stamp, arrival_stamp)`, both `YYYY-MM-DD HH:MM`
pub fn format_time(
    departure_date: &str,
    departure_time: &str,
    duration: &str,
    arrival_time: &str,
    origin_tz: Tz,
    destination_tz: Tz,
) -> Result<(String, String)> {
    let departure_local = NaiveDateTime::parse_from_str(
        &format!("{} {}", departure_date, departure_time),
        SOURCE_DATETIME_FORMAT,
    )
    .map_err(|e| {
        Error::datetime_parsing(
            format!(
                "Invalid departure date/time '{} {}'",
                departure_date, departure_time
            ),
            e,
        )
    })?;

    let departure = localize(departure_local, origin_tz);
    let flight_time = parse_duration(duration)?;

    let arrival = departure
        .checked_add_signed(flight_time)
        .ok_or_else(|| Error::malformed_field("Duration", duration))?
        .with_timezone(&destination_tz);

    let departure_stamp = departure_local.format(TARGET_DATETIME_FORMAT).to_string();
    let arrival_stamp = format!(
        "{} {}",
        arrival.format(TARGET_DATE_FORMAT),
        truncate_seconds(arrival_time)
    );

    Ok((departure_stamp, arrival_stamp))
}
