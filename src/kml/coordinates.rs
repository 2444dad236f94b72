use crate::error::CoordinateError;

fn parse_component(token: &str) -> Result<f64, CoordinateError> {
    let token = token.trim();
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoordinateError::InvalidNumber(token.to_string())),
    }
}

/// Parse the `lon,lat[,alt]` text of a KML Point. Every component must be numeric, the altitude is dropped.
pub fn parse_point(text: &str) -> Result<geo::Coord, CoordinateError> {
    let text = text.trim();
    let components = text
        .split(',')
        .map(parse_component)
        .collect::<Result<Vec<f64>, _>>()?;
    match components[..] {
        [x, y, ..] => Ok(geo::Coord { x, y }),
        _ => Err(CoordinateError::IncompleteTuple(text.to_string())),
    }
}

/// Parse whitespace separated `lon,lat[,alt]` tuples, keeping their order. Only longitude and latitude are read.
pub fn parse_coordinate_list(text: &str) -> Result<geo::LineString, CoordinateError> {
    text.split_whitespace()
        .map(|tuple| {
            let mut components = tuple.split(',');
            match (components.next(), components.next()) {
                (Some(x), Some(y)) => Ok(geo::Coord {
                    x: parse_component(x)?,
                    y: parse_component(y)?,
                }),
                _ => Err(CoordinateError::IncompleteTuple(tuple.to_string())),
            }
        })
        .collect::<Result<Vec<geo::Coord>, _>>()
        .map(geo::LineString::new)
}
