pub mod svg;

#[cfg(feature = "png")]
pub mod png;
