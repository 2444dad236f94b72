use crate::{
    error::{ConvertError, CoordinateError, ParseError},
    geofile::feature::{Feature, Geometry},
};

use super::{
    coordinates::{parse_coordinate_list, parse_point},
    diagnostic::Diagnostic,
    document::{KmlDocument, KmlNode},
    styles::StyleColors,
};

pub const DEFAULT_NAME: &str = "名称なし";
/// Marker color for placemarks whose style reference is absent or unresolved.
pub const DEFAULT_MARKER_COLOR: &str = "#007bff";

type GeometryExtractor = fn(KmlNode<'_, '_>) -> Result<Option<Geometry>, CoordinateError>;

/// Tried in order, the first geometry found is used.
const GEOMETRY_EXTRACTORS: [GeometryExtractor; 3] =
    [extract_point, extract_line_string, extract_polygon];

fn coordinates_text<'a>(
    geometry: KmlNode<'a, '_>,
    geometry_name: &'static str,
) -> Result<&'a str, CoordinateError> {
    geometry
        .child("coordinates")
        .map(|coordinates| coordinates.text().unwrap_or_default())
        .ok_or(CoordinateError::MissingElement(geometry_name))
}

fn extract_point(placemark: KmlNode<'_, '_>) -> Result<Option<Geometry>, CoordinateError> {
    let Some(point) = placemark.child("Point") else {
        return Ok(None);
    };
    let coord = parse_point(coordinates_text(point, "Point")?)?;
    Ok(Some(Geometry::Point(coord)))
}

fn extract_line_string(placemark: KmlNode<'_, '_>) -> Result<Option<Geometry>, CoordinateError> {
    let Some(line) = placemark.child("LineString") else {
        return Ok(None);
    };
    let line = parse_coordinate_list(coordinates_text(line, "LineString")?)?;
    Ok(Some(Geometry::LineString(line)))
}

/// Inner boundaries are ignored. A Polygon without outer coordinates yields no geometry.
fn extract_polygon(placemark: KmlNode<'_, '_>) -> Result<Option<Geometry>, CoordinateError> {
    let outer = placemark
        .child("Polygon")
        .and_then(|polygon| polygon.descendant("outerBoundaryIs"))
        .and_then(|boundary| boundary.descendant("coordinates"));
    match outer {
        Some(coordinates) => {
            let ring = parse_coordinate_list(coordinates.text().unwrap_or_default())?;
            Ok(Some(Geometry::Polygon(ring)))
        }
        None => Ok(None),
    }
}

fn extract_geometry(placemark: KmlNode<'_, '_>) -> Result<Option<Geometry>, CoordinateError> {
    for extractor in GEOMETRY_EXTRACTORS {
        if let Some(geometry) = extractor(placemark)? {
            return Ok(Some(geometry));
        }
    }
    Ok(None)
}

fn extract_feature(
    placemark: KmlNode<'_, '_>,
    styles: &StyleColors,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Option<Feature>, ConvertError> {
    let name = placemark
        .child("name")
        .map(|name| name.text().unwrap_or_default())
        .unwrap_or(DEFAULT_NAME)
        .to_string();
    let description = placemark
        .child("description")
        .and_then(|description| description.text())
        .unwrap_or_default()
        .to_string();

    let style_url = placemark
        .child("styleUrl")
        .and_then(|style_url| style_url.text())
        .map(str::trim);
    let marker_color = match style_url {
        Some(style_url) => match styles.get(style_url) {
            Some(color) => color,
            None => {
                diagnostics.push(Diagnostic::UnresolvedStyleUrl {
                    placemark: name.clone(),
                    style_url: style_url.to_string(),
                });
                DEFAULT_MARKER_COLOR
            }
        },
        None => DEFAULT_MARKER_COLOR,
    }
    .to_string();

    let geometry = extract_geometry(placemark).map_err(|reason| ParseError::Coordinates {
        placemark: name.clone(),
        reason,
    })?;
    let Some(geometry) = geometry else {
        diagnostics.push(Diagnostic::MissingGeometry { placemark: name });
        return Ok(None);
    };

    Ok(Some(Feature {
        name,
        description,
        marker_color,
        geometry,
    }))
}

/// Extract every placemark with a recognized geometry, in document order.
pub fn extract_features(
    document: &KmlDocument,
    styles: &StyleColors,
) -> Result<Vec<Feature>, ConvertError> {
    extract_features_with_diagnostics(document, styles, &mut Vec::new())
}

/// Like `extract_features`, additionally collecting the data quality issues that were papered over.
pub fn extract_features_with_diagnostics(
    document: &KmlDocument,
    styles: &StyleColors,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<Feature>, ConvertError> {
    let mut features = Vec::new();
    for placemark in document.elements("Placemark") {
        if let Some(feature) = extract_feature(placemark, styles, diagnostics)? {
            features.push(feature);
        }
    }
    Ok(features)
}
