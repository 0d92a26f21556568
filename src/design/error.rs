use thiserror::Error;

use super::table::{MAX_ORDER, MIN_ORDER};

/// Everything that can go wrong while denormalizing a filter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("filter order {0} is outside the supported range {}..={}", MIN_ORDER, MAX_ORDER)]
    InvalidOrder(usize),
    #[error("unsupported filter response '{0}' (only 'bessel' is available)")]
    UnsupportedResponse(String),
    #[error("unsupported filter type '{0}' (expected lowpass, highpass or bandpass)")]
    UnsupportedFilterType(String),
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("{parameter} must be positive and finite, got {value}")]
    Domain { parameter: &'static str, value: f64 },
    #[error("'{0}' is not a valid reference designator")]
    InvalidDesignator(String),
}
