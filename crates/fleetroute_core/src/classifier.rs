use crate::segment::{RouteSegment, SegmentKind};

pub const DRIVABLE_KIND: SegmentKind = SegmentKind::Route;

pub fn is_drivable(segment: &RouteSegment) -> bool {
    segment.kind() == DRIVABLE_KIND
}

/// Keeps driving legs in their original order. Stops, idling and any
/// unrecognised event are dropped.
pub fn drivable_segments<I>(segments: I) -> Vec<RouteSegment>
where
    I: IntoIterator<Item = RouteSegment>,
{
    segments.into_iter().filter(is_drivable).collect()
}

#[cfg(test)]
mod tests {
    use crate::{distance::Meters, segment::RouteSegmentBuilder};

    use super::*;

    fn segment(kind: SegmentKind, meters: f64) -> RouteSegment {
        RouteSegmentBuilder::default()
            .with_kind(kind)
            .with_distance(meters)
            .build()
    }

    #[test]
    fn test_keeps_only_routes_in_order() {
        let segments = vec![
            segment(SegmentKind::Stop, 1.0),
            segment(SegmentKind::Route, 2.0),
            segment(SegmentKind::Other, 3.0),
            segment(SegmentKind::Route, 4.0),
            segment(SegmentKind::Stop, 5.0),
            segment(SegmentKind::Route, 6.0),
        ];

        let drivable = drivable_segments(segments);

        assert_eq!(
            drivable.iter().map(|s| s.distance()).collect::<Vec<_>>(),
            vec![Meters::new(2.0), Meters::new(4.0), Meters::new(6.0)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(drivable_segments(Vec::new()).is_empty());
    }

    #[test]
    fn test_no_drivable_segments() {
        let segments = vec![segment(SegmentKind::Stop, 0.0), segment(SegmentKind::Other, 0.0)];

        assert!(drivable_segments(segments).is_empty());
    }
}
