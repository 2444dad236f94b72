use std::{fs, path::Path};

use crate::error::ConvertError;

use super::feature::Feature;

/// Serialize the features as a pretty-printed GeoJSON FeatureCollection.
pub fn features_to_geojson_string(features: &[Feature]) -> Result<String, ConvertError> {
    let feature_collection: geojson::FeatureCollection =
        features.iter().map(geojson::Feature::from).collect();
    Ok(serde_json::to_string_pretty(&feature_collection)?)
}

/// Write the features to `output_filepath`, replacing any existing file. Returns the number of features written.
pub fn write_features_to_geojson(
    features: &[Feature],
    output_filepath: &Path,
) -> Result<usize, ConvertError> {
    let geojson_contents = features_to_geojson_string(features)?;
    log::debug!(
        "Writing {} bytes of GeoJSON to {:?}",
        geojson_contents.len(),
        output_filepath
    );
    fs::write(output_filepath, geojson_contents).map_err(|source| ConvertError::Write {
        path: output_filepath.to_path_buf(),
        source,
    })?;
    Ok(features.len())
}
