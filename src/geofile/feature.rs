use geojson::{JsonObject, JsonValue};

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(geo::Coord),
    LineString(geo::LineString),
    /// Outer ring only, kept exactly as parsed (not closed, not reoriented).
    Polygon(geo::LineString),
}

impl Geometry {
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
        }
    }
}

fn positions(line: &geo::LineString) -> Vec<geojson::Position> {
    line.coords().map(|coord| vec![coord.x, coord.y]).collect()
}

impl From<&Geometry> for geojson::Value {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(coord) => geojson::Value::Point(vec![coord.x, coord.y]),
            Geometry::LineString(line) => geojson::Value::LineString(positions(line)),
            Geometry::Polygon(ring) => geojson::Value::Polygon(vec![positions(ring)]),
        }
    }
}

/// One converted placemark.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub description: String,
    /// CSS hex color, `#rrggbb`.
    pub marker_color: String,
    pub geometry: Geometry,
}

impl From<&Feature> for geojson::Feature {
    fn from(feature: &Feature) -> Self {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), JsonValue::from(feature.name.as_str()));
        properties.insert(
            "description".to_string(),
            JsonValue::from(feature.description.as_str()),
        );
        properties.insert(
            "marker_color".to_string(),
            JsonValue::from(feature.marker_color.as_str()),
        );
        Self {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(
                &feature.geometry,
            ))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}
