//! Frequency and impedance scaling of normalized ladder elements.
//!
//! Every function takes frequencies in Hz and resistance in ohms and returns
//! Farads or Henries. Inputs that would divide by zero (or scale by a
//! non-positive quantity) are rejected with [`FilterError::Domain`].

use std::f64::consts::TAU;

use super::error::FilterError;
use super::model::LcPair;

fn positive(parameter: &'static str, value: f64) -> Result<f64, FilterError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(FilterError::Domain { parameter, value })
    }
}

/// Lowpass series inductor: `L·R / 2πF`.
pub fn lowpass_inductor(l_norm: f64, r: f64, f: f64) -> Result<f64, FilterError> {
    let l_norm = positive("coefficient", l_norm)?;
    let r = positive("load resistance", r)?;
    let f = positive("frequency", f)?;
    Ok((l_norm * r) / (TAU * f))
}

/// Lowpass shunt capacitor: `C / 2πFR`.
pub fn lowpass_capacitor(c_norm: f64, r: f64, f: f64) -> Result<f64, FilterError> {
    let c_norm = positive("coefficient", c_norm)?;
    let r = positive("load resistance", r)?;
    let f = positive("frequency", f)?;
    Ok(c_norm / (TAU * f * r))
}

/// Highpass inductor from a capacitor-role coefficient: `R / 2πFC`.
pub fn highpass_inductor(c_norm: f64, r: f64, f: f64) -> Result<f64, FilterError> {
    let c_norm = positive("coefficient", c_norm)?;
    let r = positive("load resistance", r)?;
    let f = positive("frequency", f)?;
    Ok(r / (TAU * f * c_norm))
}

/// Highpass capacitor from an inductor-role coefficient: `1 / 2πFRL`.
pub fn highpass_capacitor(l_norm: f64, r: f64, f: f64) -> Result<f64, FilterError> {
    let l_norm = positive("coefficient", l_norm)?;
    let r = positive("load resistance", r)?;
    let f = positive("frequency", f)?;
    Ok(1.0 / (TAU * f * r * l_norm))
}

/// Band edges and their difference, checked once for both bandpass transforms.
fn band(fh: f64, fl: f64) -> Result<(f64, f64, f64), FilterError> {
    let fh = positive("upper band edge", fh)?;
    let fl = positive("lower band edge", fl)?;
    let width = positive("bandwidth", fh - fl)?;
    Ok((fh, fl, width))
}

/// Parallel resonator replacing an inductor-role element.
pub fn bandpass_parallel(fh: f64, fl: f64, r: f64, l_norm: f64) -> Result<LcPair, FilterError> {
    let (fh, fl, width) = band(fh, fl)?;
    let r = positive("load resistance", r)?;
    let l_norm = positive("coefficient", l_norm)?;
    Ok(LcPair {
        capacitance: width / (TAU * fh * fl * r * l_norm),
        inductance: (r * l_norm) / (TAU * width),
    })
}

/// Series resonator replacing a capacitor-role element.
pub fn bandpass_series(fh: f64, fl: f64, r: f64, c_norm: f64) -> Result<LcPair, FilterError> {
    let (fh, fl, width) = band(fh, fl)?;
    let r = positive("load resistance", r)?;
    let c_norm = positive("coefficient", c_norm)?;
    Ok(LcPair {
        capacitance: c_norm / (TAU * width * r),
        inductance: (width * r) / (TAU * fh * fl * c_norm),
    })
}
