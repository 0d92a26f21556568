use serde::{Deserialize, Serialize};

use crate::design::builder::{build_bandpass, build_highpass, build_lowpass};
use crate::design::{CoefficientPair, FilterError, FilterResult, FilterType, Response};

/// Conversion factor from the user-facing MHz to Hz.
pub const HZ_PER_MHZ: f64 = 1e6;

/// Port resistance used when none is given.
pub const DEFAULT_LOAD_OHMS: f64 = 50.0;

fn default_load() -> f64 {
    DEFAULT_LOAD_OHMS
}

// ---------------------------------------------------------------------------
// FilterSpec – one filter request
// ---------------------------------------------------------------------------

/// A complete filter request as read from a batch file.
///
/// ```json
/// { "response": "bessel", "type": "bandpass", "order": 3,
///   "frequency": 100.0, "bandwidth": 10.0, "load": 50.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub response: Response,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub order: usize,
    /// Cutoff (or bandpass centre) frequency in MHz.
    #[serde(rename = "frequency")]
    pub frequency_mhz: f64,
    /// Bandpass width in MHz.
    #[serde(rename = "bandwidth", default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_mhz: Option<f64>,
    /// Load resistance in ohms.
    #[serde(default = "default_load")]
    pub load: f64,
}

impl FilterSpec {
    /// Compute component values for this request.
    pub fn values(&self) -> Result<FilterResult, FilterError> {
        let pair = self.response.split(self.order)?;
        denormalize(
            self.filter_type,
            &pair,
            self.frequency_mhz * HZ_PER_MHZ,
            self.bandwidth_mhz.map(|bw| bw * HZ_PER_MHZ),
            self.load,
        )
    }

    /// Short human label, e.g. `bessel lowpass n=3 @ 10 MHz, 50 Ω`.
    pub fn label(&self) -> String {
        let mut label = format!(
            "{} {} n={} @ {} MHz",
            self.response, self.filter_type, self.order, self.frequency_mhz
        );
        if let Some(bw) = self.bandwidth_mhz {
            label.push_str(&format!(" (bw {bw} MHz)"));
        }
        label.push_str(&format!(", {} Ω", self.load));
        label
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Component values for a filter described by plain strings and MHz values.
///
/// Checks run in this order: response name, order, filter type, then the
/// numeric domain of frequency, bandwidth and load.
pub fn get_values(
    response: &str,
    filter_type: &str,
    order: usize,
    frequency_mhz: f64,
    bandwidth_mhz: Option<f64>,
    load: f64,
) -> Result<FilterResult, FilterError> {
    let response: Response = response.parse()?;
    let pair = response.split(order)?;
    let frequency = frequency_mhz * HZ_PER_MHZ;
    let bandwidth = bandwidth_mhz.map(|bw| bw * HZ_PER_MHZ);
    let filter_type: FilterType = filter_type.parse()?;
    denormalize(filter_type, &pair, frequency, bandwidth, load)
}

/// Dispatch to the builder for `filter_type`. Frequencies in Hz.
fn denormalize(
    filter_type: FilterType,
    pair: &CoefficientPair,
    frequency: f64,
    bandwidth: Option<f64>,
    load: f64,
) -> Result<FilterResult, FilterError> {
    log::debug!(
        "{filter_type} order {} at {frequency:e} Hz into {load} Ω",
        pair.order()
    );
    match filter_type {
        FilterType::Lowpass => build_lowpass(frequency, load, &pair.cn, &pair.ln),
        FilterType::Highpass => build_highpass(frequency, load, &pair.cn, &pair.ln),
        FilterType::Bandpass => {
            let bandwidth = bandwidth.ok_or(FilterError::MissingParameter("bandwidth"))?;
            build_bandpass(frequency, bandwidth, load, &pair.cn, &pair.ln)
        }
    }
}
