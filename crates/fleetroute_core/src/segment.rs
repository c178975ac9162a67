use geo::{Distance, Haversine};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::distance::Meters;

/// Reads `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> Meters {
        Meters::new(Haversine.distance(geo::Point::from(self), geo::Point::from(other)))
    }
}

impl From<&GeoPoint> for geo_types::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl From<&GeoPoint> for geo_types::Coord<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Coord {
            x: point.lng,
            y: point.lat,
        }
    }
}

/// Telemetry tag of a segment. Only [`SegmentKind::Route`] is movement.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Route,
    Stop,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteEndpoint {
    /// Raw ISO 8601 timestamp, parsed by [`crate::temporal`].
    pub time: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RouteEndpoint {
    pub fn at(time: &str, lat: f64, lng: f64) -> Self {
        RouteEndpoint {
            time: Some(time.to_owned()),
            lat: Some(lat),
            lng: Some(lng),
            address: None,
        }
    }

    pub fn coordinate(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecodedRoute {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<GeoPoint>")]
    pub points: Vec<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteSegment {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    #[schemars(with = "SegmentKind")]
    pub kind: SegmentKind,

    #[serde(default)]
    pub distance: Meters,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "RouteEndpoint")]
    pub start: RouteEndpoint,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "RouteEndpoint")]
    pub end: RouteEndpoint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoded_route: Option<DecodedRoute>,
}

impl RouteSegment {
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn start_time(&self) -> Option<&str> {
        self.start.time.as_deref()
    }

    pub fn end_time(&self) -> Option<&str> {
        self.end.time.as_deref()
    }

    pub fn decoded_points(&self) -> &[GeoPoint] {
        self.decoded_route
            .as_ref()
            .map(|route| route.points.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct RouteSegmentBuilder {
    kind: SegmentKind,
    distance: Meters,
    start: RouteEndpoint,
    end: RouteEndpoint,
    points: Option<Vec<GeoPoint>>,
}

impl RouteSegmentBuilder {
    pub fn with_kind(mut self, kind: SegmentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_distance(mut self, meters: f64) -> Self {
        self.distance = Meters::new(meters);
        self
    }

    pub fn with_start(mut self, start: RouteEndpoint) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: RouteEndpoint) -> Self {
        self.end = end;
        self
    }

    pub fn with_iso_start(mut self, time: &str) -> Self {
        self.start.time = Some(time.to_owned());
        self
    }

    pub fn with_iso_end(mut self, time: &str) -> Self {
        self.end.time = Some(time.to_owned());
        self
    }

    pub fn with_points(mut self, points: Vec<GeoPoint>) -> Self {
        self.points = Some(points);
        self
    }

    pub fn build(self) -> RouteSegment {
        RouteSegment {
            kind: self.kind,
            distance: self.distance,
            start: self.start,
            end: self.end,
            decoded_route: self.points.map(|points| DecodedRoute { points }),
        }
    }
}
