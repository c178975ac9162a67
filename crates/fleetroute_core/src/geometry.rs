use std::fmt::Display;

use geo::BoundingRect;
use geo_types::{Coord, LineString, MultiPoint, Point, Rect};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};

use crate::{
    aggregator::AggregatedRoute,
    distance::Meters,
    segment::{GeoPoint, RouteSegment},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    End,
}

impl Display for MarkerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MarkerRole::Start => "start",
                MarkerRole::End => "end",
            }
        )
    }
}

/// Display geometry of one drivable segment, x = lng and y = lat.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGeometry {
    index: usize,
    path: Option<LineString<f64>>,
    start_marker: Option<Point<f64>>,
    end_marker: Option<Point<f64>>,
    path_length: Meters,
}

impl SegmentGeometry {
    pub fn index(&self) -> usize {
        self.index
    }

    /// `None` when the segment has fewer than two decoded points.
    pub fn path(&self) -> Option<&LineString<f64>> {
        self.path.as_ref()
    }

    pub fn start_marker(&self) -> Option<Point<f64>> {
        self.start_marker
    }

    pub fn end_marker(&self) -> Option<Point<f64>> {
        self.end_marker
    }

    /// Haversine length of the decoded points. Independent of the
    /// distance reported by telemetry.
    pub fn path_length(&self) -> Meters {
        self.path_length
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    segments: Vec<SegmentGeometry>,
    bounds: Option<Rect<f64>>,
}

impl RouteGeometry {
    pub fn segments(&self) -> &[SegmentGeometry] {
        &self.segments
    }

    /// Bounding box of every path point and marker, for fitting the map view.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.bounds
    }

    pub fn center(&self) -> Option<Point<f64>> {
        self.bounds.map(|bounds| bounds.center().into())
    }
}

fn path_length(points: &[GeoPoint]) -> Meters {
    points
        .windows(2)
        .map(|pair| pair[0].haversine_distance(&pair[1]))
        .sum()
}

pub fn project_segment(index: usize, segment: &RouteSegment) -> SegmentGeometry {
    let points = segment.decoded_points();

    let path = if points.len() >= 2 {
        Some(LineString::new(points.iter().map(Coord::from).collect()))
    } else {
        None
    };

    let start_marker = points
        .first()
        .copied()
        .or_else(|| segment.start.coordinate())
        .map(|point| Point::from(&point));

    let end_marker = points
        .last()
        .copied()
        .or_else(|| segment.end.coordinate())
        .map(|point| Point::from(&point));

    SegmentGeometry {
        index,
        path,
        start_marker,
        end_marker,
        path_length: path_length(points),
    }
}

/// Read-side projection of an aggregated route. Totals are never touched.
pub fn project(route: &AggregatedRoute) -> RouteGeometry {
    let segments: Vec<SegmentGeometry> = route
        .segments()
        .iter()
        .enumerate()
        .map(|(index, segment)| project_segment(index, segment))
        .collect();

    let mut points: Vec<Point<f64>> = Vec::new();
    for segment in &segments {
        if let Some(path) = &segment.path {
            points.extend(path.points());
        }
        points.extend(segment.start_marker);
        points.extend(segment.end_marker);
    }

    let bounds = MultiPoint::new(points).bounding_rect();

    RouteGeometry { segments, bounds }
}

/// Anything that can display route paths and markers.
pub trait MapSurface {
    fn draw_path(&mut self, segment: &SegmentGeometry, path: &LineString<f64>);

    fn place_marker(&mut self, segment: &SegmentGeometry, role: MarkerRole, at: Point<f64>);
}

pub fn render<S: MapSurface>(geometry: &RouteGeometry, surface: &mut S) {
    for segment in geometry.segments() {
        if let Some(path) = segment.path() {
            surface.draw_path(segment, path);
        }

        if let Some(start) = segment.start_marker() {
            surface.place_marker(segment, MarkerRole::Start, start);
        }

        if let Some(end) = segment.end_marker() {
            surface.place_marker(segment, MarkerRole::End, end);
        }
    }
}

/// Collects the map layer as GeoJSON features.
#[derive(Default)]
pub struct GeoJsonSurface {
    features: Vec<Feature>,
}

impl GeoJsonSurface {
    fn push(&mut self, geometry: Geometry, properties: JsonObject) {
        self.features.push(Feature {
            bbox: None,
            properties: Some(properties),
            foreign_members: None,
            id: None,
            geometry: Some(geometry),
        });
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn into_feature_collection(self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.features,
            foreign_members: None,
        }
    }
}

impl MapSurface for GeoJsonSurface {
    fn draw_path(&mut self, segment: &SegmentGeometry, path: &LineString<f64>) {
        let mut properties = JsonObject::new();
        properties.insert("segment".to_string(), segment.index().into());
        properties.insert("role".to_string(), "path".into());
        properties.insert("distance_m".to_string(), segment.path_length().value().into());

        self.push(Geometry::new(geojson::Value::from(path)), properties);
    }

    fn place_marker(&mut self, segment: &SegmentGeometry, role: MarkerRole, at: Point<f64>) {
        let mut properties = JsonObject::new();
        properties.insert("segment".to_string(), segment.index().into());
        properties.insert("role".to_string(), role.to_string().into());

        self.push(Geometry::new(geojson::Value::from(&at)), properties);
    }
}

pub fn to_feature_collection(geometry: &RouteGeometry) -> FeatureCollection {
    let mut surface = GeoJsonSurface::default();
    render(geometry, &mut surface);
    surface.into_feature_collection()
}

#[cfg(test)]
mod tests {
    use crate::{
        aggregator::{AggregatedRoute, RouteTotals},
        segment::{RouteEndpoint, RouteSegmentBuilder, SegmentKind},
    };

    use super::*;

    fn route_with(points: Vec<GeoPoint>) -> RouteSegment {
        RouteSegmentBuilder::default()
            .with_kind(SegmentKind::Route)
            .with_distance(1000.0)
            .with_points(points)
            .build()
    }

    #[derive(Default)]
    struct RecordingSurface {
        paths: Vec<(usize, usize)>,
        markers: Vec<(usize, MarkerRole)>,
    }

    impl MapSurface for RecordingSurface {
        fn draw_path(&mut self, segment: &SegmentGeometry, path: &LineString<f64>) {
            self.paths.push((segment.index(), path.0.len()));
        }

        fn place_marker(&mut self, segment: &SegmentGeometry, role: MarkerRole, _at: Point<f64>) {
            self.markers.push((segment.index(), role));
        }
    }

    #[test]
    fn test_project_segment_path_and_markers() {
        let segment = route_with(vec![
            GeoPoint::new(56.95, 24.11),
            GeoPoint::new(56.96, 24.12),
            GeoPoint::new(56.97, 24.16),
        ]);

        let geometry = project_segment(0, &segment);

        let path = geometry.path().unwrap();
        assert_eq!(path.0.len(), 3);
        assert_eq!(path.0[0], Coord { x: 24.11, y: 56.95 });
        assert_eq!(geometry.start_marker(), Some(Point::new(24.11, 56.95)));
        assert_eq!(geometry.end_marker(), Some(Point::new(24.16, 56.97)));
        assert!(geometry.path_length().value() > 0.0);
    }

    #[test]
    fn test_empty_points_fall_back_to_endpoint_coordinates() {
        let segment = RouteSegmentBuilder::default()
            .with_kind(SegmentKind::Route)
            .with_start(RouteEndpoint::at("2024-03-04T10:00:00Z", 56.95, 24.11))
            .with_end(RouteEndpoint::at("2024-03-04T10:10:00Z", 57.0, 24.2))
            .build();

        let geometry = project_segment(2, &segment);

        assert!(geometry.path().is_none());
        assert_eq!(geometry.start_marker(), Some(Point::new(24.11, 56.95)));
        assert_eq!(geometry.end_marker(), Some(Point::new(24.2, 57.0)));
        assert_eq!(geometry.path_length(), Meters::ZERO);
    }

    #[test]
    fn test_no_points_and_no_coordinates_skips_markers() {
        let geometry = project_segment(0, &route_with(Vec::new()));

        assert!(geometry.path().is_none());
        assert!(geometry.start_marker().is_none());
        assert!(geometry.end_marker().is_none());
    }

    #[test]
    fn test_single_point_has_markers_but_no_line() {
        let geometry = project_segment(0, &route_with(vec![GeoPoint::new(56.95, 24.11)]));

        assert!(geometry.path().is_none());
        assert_eq!(geometry.start_marker(), geometry.end_marker());
    }

    #[test]
    fn test_project_keeps_order_and_bounds() {
        let segments = vec![
            route_with(vec![GeoPoint::new(56.0, 24.0), GeoPoint::new(56.5, 24.5)]),
            route_with(Vec::new()),
            route_with(vec![GeoPoint::new(57.0, 23.5), GeoPoint::new(56.8, 25.0)]),
        ];
        let route = AggregatedRoute::new(segments, RouteTotals::ZERO);

        let geometry = project(&route);

        assert_eq!(
            geometry.segments().iter().map(|s| s.index()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        let bounds = geometry.bounds().unwrap();
        assert_eq!(bounds.min(), Coord { x: 23.5, y: 56.0 });
        assert_eq!(bounds.max(), Coord { x: 25.0, y: 57.0 });
    }

    #[test]
    fn test_project_empty_route() {
        let geometry = project(&AggregatedRoute::empty());

        assert!(geometry.segments().is_empty());
        assert!(geometry.bounds().is_none());
        assert!(geometry.center().is_none());
    }

    #[test]
    fn test_render_skips_degenerate_paths() {
        let segments = vec![
            route_with(vec![GeoPoint::new(56.0, 24.0), GeoPoint::new(56.5, 24.5)]),
            route_with(Vec::new()),
        ];
        let geometry = project(&AggregatedRoute::new(segments, RouteTotals::ZERO));

        let mut surface = RecordingSurface::default();
        render(&geometry, &mut surface);

        assert_eq!(surface.paths, vec![(0, 2)]);
        assert_eq!(
            surface.markers,
            vec![(0, MarkerRole::Start), (0, MarkerRole::End)]
        );
    }

    #[test]
    fn test_geojson_features() {
        let segments = vec![route_with(vec![
            GeoPoint::new(56.0, 24.0),
            GeoPoint::new(56.5, 24.5),
        ])];
        let geometry = project(&AggregatedRoute::new(segments, RouteTotals::ZERO));

        let collection = to_feature_collection(&geometry);

        assert_eq!(collection.features.len(), 3);
        let path = &collection.features[0];
        assert_eq!(path.property("role").unwrap(), "path");
        assert_eq!(path.property("segment").unwrap(), 0);
        assert!(matches!(
            path.geometry.as_ref().unwrap().value,
            geojson::Value::LineString(_)
        ));
        assert_eq!(collection.features[2].property("role").unwrap(), "end");
    }
}
