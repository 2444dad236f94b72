use std::path::Path;

use crate::{
    error::ConvertError,
    geofile::{feature::Feature, geojson::write_features_to_geojson},
    kml::{
        diagnostic::Diagnostic,
        document::{read_kml_file, KmlDocument},
        placemark::extract_features_with_diagnostics,
        styles::resolve_styles,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Surface skipped placemarks and broken style links as warnings.
    pub strict: bool,
}

/// Result of converting a KML document in memory.
#[derive(Debug)]
pub struct Conversion {
    pub features: Vec<Feature>,
    /// Always empty unless running in strict mode.
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug)]
pub struct ConversionReport {
    pub features_written: usize,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn convert_kml_str(kml: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let document = KmlDocument::parse(kml)?;
    let styles = resolve_styles(&document);
    log::info!("Resolved {} style references", styles.len());

    let mut diagnostics = styles.diagnostics().to_vec();
    let features = extract_features_with_diagnostics(&document, &styles, &mut diagnostics)?;

    if options.strict {
        for diagnostic in &diagnostics {
            log::warn!("{}", diagnostic);
        }
    } else {
        diagnostics.clear();
    }
    Ok(Conversion {
        features,
        diagnostics,
    })
}

/// Convert the KML file at `input_filepath` into a GeoJSON file at `output_filepath`.
///
/// Nothing is written unless the whole input converts, so a failed run leaves a previous output in place.
pub fn convert_kml_to_geojson(
    input_filepath: &Path,
    output_filepath: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    log::info!("Parsing {:?}", input_filepath);
    let kml = read_kml_file(input_filepath)?;
    let conversion = convert_kml_str(&kml, options)?;

    log::info!(
        "Writing {} features to {:?}",
        conversion.features.len(),
        output_filepath
    );
    let features_written = write_features_to_geojson(&conversion.features, output_filepath)?;
    Ok(ConversionReport {
        features_written,
        diagnostics: conversion.diagnostics,
    })
}
