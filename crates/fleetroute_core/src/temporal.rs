use jiff::{SignedDuration, Timestamp};

use crate::{error::RouteError, segment::RouteSegment};

/// Parses an ISO 8601 / RFC 3339 timestamp carrying `Z` or a numeric offset.
pub fn parse_instant(field: &'static str, value: &str) -> Result<Timestamp, RouteError> {
    value
        .trim()
        .parse::<Timestamp>()
        .map_err(|source| RouteError::Parse {
            field,
            value: value.to_owned(),
            source,
        })
}

/// `end - start`, never negative.
pub fn duration_between(start: Timestamp, end: Timestamp) -> SignedDuration {
    let duration = end.duration_since(start);

    if duration.is_negative() {
        SignedDuration::ZERO
    } else {
        duration
    }
}

/// Driving time of one segment. `index` only feeds error messages.
pub fn segment_duration(index: usize, segment: &RouteSegment) -> Result<SignedDuration, RouteError> {
    let start = segment.start_time().ok_or(RouteError::MissingTime {
        field: "start",
        segment: index,
    })?;
    let end = segment.end_time().ok_or(RouteError::MissingTime {
        field: "end",
        segment: index,
    })?;

    let start = parse_instant("start", start)?;
    let end = parse_instant("end", end)?;

    Ok(duration_between(start, end))
}

#[cfg(test)]
mod tests {
    use crate::segment::{RouteSegmentBuilder, SegmentKind};

    use super::*;

    fn segment(start: &str, end: &str) -> RouteSegment {
        RouteSegmentBuilder::default()
            .with_kind(SegmentKind::Route)
            .with_iso_start(start)
            .with_iso_end(end)
            .build()
    }

    #[test]
    fn test_segment_duration() {
        let duration = segment_duration(0, &segment("2024-03-04T10:00:00Z", "2024-03-04T10:30:00Z"));

        assert_eq!(duration.unwrap(), SignedDuration::from_mins(30));
    }

    #[test]
    fn test_offsets_are_normalized() {
        // 10:00 in Riga (+02:00) is 08:00 UTC
        let duration =
            segment_duration(0, &segment("2024-03-04T10:00:00+02:00", "2024-03-04T08:45:00Z"));

        assert_eq!(duration.unwrap(), SignedDuration::from_mins(45));
    }

    #[test]
    fn test_fractional_seconds() {
        let duration = segment_duration(
            0,
            &segment("2024-03-04T10:00:00.250Z", "2024-03-04T10:00:01.750Z"),
        );

        assert_eq!(duration.unwrap(), SignedDuration::from_millis(1500));
    }

    #[test]
    fn test_negative_span_is_zero() {
        let duration = segment_duration(0, &segment("2024-03-04T11:00:00Z", "2024-03-04T10:00:00Z"));

        assert_eq!(duration.unwrap(), SignedDuration::ZERO);
    }

    #[test]
    fn test_unparseable_timestamp_is_an_error() {
        let error = segment_duration(3, &segment("2024-03-04T10:00:00Z", "yesterday")).unwrap_err();

        assert!(error.is_parse_error());
        assert!(matches!(error, RouteError::Parse { field: "end", .. }));
    }

    #[test]
    fn test_timestamp_without_offset_is_an_error() {
        let error = parse_instant("start", "2024-03-04T10:00:00").unwrap_err();

        assert!(error.is_parse_error());
    }

    #[test]
    fn test_missing_timestamp_is_an_error() {
        let segment = RouteSegmentBuilder::default()
            .with_kind(SegmentKind::Route)
            .with_iso_start("2024-03-04T10:00:00Z")
            .build();

        let error = segment_duration(7, &segment).unwrap_err();

        assert!(matches!(
            error,
            RouteError::MissingTime {
                field: "end",
                segment: 7
            }
        ));
    }
}
