use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    classifier::drivable_segments, distance::Meters, error::RouteError, segment::RouteSegment,
    temporal::segment_duration,
};

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Running sums over drivable segments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteTotals {
    pub distance: Meters,
    pub driving_time: SignedDuration,
}

impl RouteTotals {
    pub const ZERO: RouteTotals = RouteTotals {
        distance: Meters::ZERO,
        driving_time: SignedDuration::ZERO,
    };
}

impl Add for RouteTotals {
    type Output = RouteTotals;

    fn add(self, other: RouteTotals) -> RouteTotals {
        RouteTotals {
            distance: self.distance + other.distance,
            driving_time: self.driving_time + other.driving_time,
        }
    }
}

impl AddAssign for RouteTotals {
    fn add_assign(&mut self, other: RouteTotals) {
        self.distance += other.distance;
        self.driving_time += other.driving_time;
    }
}

impl Sum for RouteTotals {
    fn sum<I: Iterator<Item = RouteTotals>>(iter: I) -> RouteTotals {
        iter.fold(RouteTotals::ZERO, |acc, x| acc + x)
    }
}

/// Whole hours and remaining whole minutes. Leftover seconds are dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DrivingTime {
    pub hours: i64,
    pub minutes: i64,
}

impl DrivingTime {
    pub fn from_duration(duration: SignedDuration) -> Self {
        let seconds = duration.as_secs().max(0);

        DrivingTime {
            hours: seconds / SECONDS_PER_HOUR,
            minutes: (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        }
    }
}

impl std::fmt::Display for DrivingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Built only through [`AggregatedRoute::new`], so the km and hours/minutes
/// figures always match `totals`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AggregatedRoute {
    segments: Vec<RouteSegment>,
    totals: RouteTotals,
    total_distance_km: f64,
    total_duration: DrivingTime,
}

impl AggregatedRoute {
    pub fn new(segments: Vec<RouteSegment>, totals: RouteTotals) -> Self {
        AggregatedRoute {
            segments,
            totals,
            total_distance_km: totals.distance.to_kilometers(),
            total_duration: DrivingTime::from_duration(totals.driving_time),
        }
    }

    pub fn empty() -> Self {
        AggregatedRoute::new(Vec::new(), RouteTotals::ZERO)
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn totals(&self) -> RouteTotals {
        self.totals
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn total_duration(&self) -> DrivingTime {
        self.total_duration
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Folds segments that are already known to be drivable.
pub fn totals(segments: &[RouteSegment]) -> Result<RouteTotals, RouteError> {
    let mut totals = RouteTotals::ZERO;

    for (index, segment) in segments.iter().enumerate() {
        totals += RouteTotals {
            distance: segment.distance(),
            driving_time: segment_duration(index, segment)?,
        };
    }

    Ok(totals)
}

/// Filters the raw segments down to driving legs and sums them up.
#[instrument(skip_all, level = "debug")]
pub fn aggregate(segments: Vec<RouteSegment>) -> Result<AggregatedRoute, RouteError> {
    let raw_count = segments.len();
    let segments = drivable_segments(segments);
    let totals = totals(&segments)?;

    debug!(
        "aggregate: kept {}/{} segments, {:?} in {}",
        segments.len(),
        raw_count,
        totals.distance,
        totals.driving_time
    );

    Ok(AggregatedRoute::new(segments, totals))
}
