pub mod color;
pub mod coordinates;
pub mod diagnostic;
pub mod document;
pub mod placemark;
pub mod styles;
