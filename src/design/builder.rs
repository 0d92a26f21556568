use super::error::FilterError;
use super::model::{Designator, FilterResult, Role};
use super::transform::{
    bandpass_parallel, bandpass_series, highpass_capacitor, highpass_inductor, lowpass_capacitor,
    lowpass_inductor,
};

// ---------------------------------------------------------------------------
// Ladder builders
// ---------------------------------------------------------------------------
//
// `cn` / `ln` are the capacitor- and inductor-prototype halves of a table row
// (see `table::split`). Frequencies are in Hz, `load` in ohms.

/// Scale each coefficient of `coeffs` and file it under `role`.
fn place(
    result: &mut FilterResult,
    role: Role,
    coeffs: &[f64],
    scale: impl Fn(f64) -> Result<f64, FilterError>,
) -> Result<(), FilterError> {
    for (i, coeff) in coeffs.iter().enumerate() {
        let designator = Designator::nth(role, i);
        let value = scale(*coeff)?;
        log::trace!("{designator}: {coeff} -> {value:e}");
        result.insert(designator, value);
    }
    Ok(())
}

/// Lowpass ladder: inductor-role elements become `L1..`, capacitor-role `C1..`.
pub fn build_lowpass(
    frequency: f64,
    load: f64,
    cn: &[f64],
    ln: &[f64],
) -> Result<FilterResult, FilterError> {
    let mut result = FilterResult::default();
    place(&mut result, Role::Inductor, ln, |l| {
        lowpass_inductor(l, load, frequency)
    })?;
    place(&mut result, Role::Capacitor, cn, |c| {
        lowpass_capacitor(c, load, frequency)
    })?;
    Ok(result)
}

/// Highpass ladder. Each shunt capacitor of the prototype becomes a shunt
/// inductor and each series inductor a series capacitor: `L{i}` comes from
/// `cn[i]`, `C{i}` from `ln[i]`.
pub fn build_highpass(
    frequency: f64,
    load: f64,
    cn: &[f64],
    ln: &[f64],
) -> Result<FilterResult, FilterError> {
    let mut result = FilterResult::default();
    place(&mut result, Role::Inductor, cn, |c| {
        highpass_inductor(c, load, frequency)
    })?;
    place(&mut result, Role::Capacitor, ln, |l| {
        highpass_capacitor(l, load, frequency)
    })?;
    Ok(result)
}

/// Bandpass ladder around `centre` with total width `bandwidth`.
///
/// Inductor-role elements become parallel resonators `Cp{i}`/`Lp{i}`,
/// capacitor-role elements series resonators `Cs{i}`/`Ls{i}`.
pub fn build_bandpass(
    centre: f64,
    bandwidth: f64,
    load: f64,
    cn: &[f64],
    ln: &[f64],
) -> Result<FilterResult, FilterError> {
    if !(bandwidth > 0.0 && bandwidth.is_finite()) {
        return Err(FilterError::Domain {
            parameter: "bandwidth",
            value: bandwidth,
        });
    }
    let fl = centre - bandwidth / 2.0;
    let fh = centre + bandwidth / 2.0;
    log::trace!("bandpass edges: {fl:e} Hz .. {fh:e} Hz");

    let mut result = FilterResult::default();
    for (i, l) in ln.iter().enumerate() {
        let pair = bandpass_parallel(fh, fl, load, *l)?;
        result.insert(Designator::nth(Role::ParallelCapacitor, i), pair.capacitance);
        result.insert(Designator::nth(Role::ParallelInductor, i), pair.inductance);
    }
    for (i, c) in cn.iter().enumerate() {
        let pair = bandpass_series(fh, fl, load, *c)?;
        result.insert(Designator::nth(Role::SeriesCapacitor, i), pair.capacitance);
        result.insert(Designator::nth(Role::SeriesInductor, i), pair.inductance);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::table::{split, MAX_ORDER, MIN_ORDER};
    use approx::assert_relative_eq;

    fn expected_ladder(inductors: usize, capacitors: usize) -> Vec<String> {
        let mut names: Vec<String> = (1..=inductors).map(|i| format!("L{i}")).collect();
        names.extend((1..=capacitors).map(|i| format!("C{i}")));
        names
    }

    #[test]
    fn lowpass_and_highpass_cover_every_element() {
        for order in MIN_ORDER..=MAX_ORDER {
            let pair = split(order).unwrap();
            let lp = build_lowpass(1e6, 50.0, &pair.cn, &pair.ln).unwrap();
            let hp = build_highpass(1e6, 50.0, &pair.cn, &pair.ln).unwrap();
            assert_eq!(lp.len(), order);
            assert_eq!(hp.len(), order);
            assert_eq!(lp.designators(), expected_ladder(pair.ln.len(), pair.cn.len()));
            assert_eq!(hp.designators(), expected_ladder(pair.cn.len(), pair.ln.len()));
        }
    }

    #[test]
    fn bandpass_has_two_parts_per_element() {
        for order in MIN_ORDER..=MAX_ORDER {
            let pair = split(order).unwrap();
            let bp = build_bandpass(100e6, 10e6, 50.0, &pair.cn, &pair.ln).unwrap();
            assert_eq!(bp.len(), 2 * order);
            for i in 1..=pair.ln.len() {
                assert!(bp.get(&format!("Cp{i}")).is_some());
                assert!(bp.get(&format!("Lp{i}")).is_some());
            }
            for i in 1..=pair.cn.len() {
                assert!(bp.get(&format!("Cs{i}")).is_some());
                assert!(bp.get(&format!("Ls{i}")).is_some());
            }
        }
    }

    #[test]
    fn bandpass_numbering_is_dense() {
        let pair = split(5).unwrap();
        let bp = build_bandpass(100e6, 10e6, 50.0, &pair.cn, &pair.ln).unwrap();
        assert_eq!(
            bp.designators(),
            vec!["Cp1", "Cp2", "Lp1", "Lp2", "Cs1", "Cs2", "Cs3", "Ls1", "Ls2", "Ls3"]
        );
    }

    #[test]
    fn highpass_swaps_roles() {
        let hp = build_highpass(1e7, 75.0, &[0.576], &[2.148]).unwrap();
        assert_relative_eq!(
            hp.get("L1").unwrap(),
            highpass_inductor(0.576, 75.0, 1e7).unwrap()
        );
        assert_relative_eq!(
            hp.get("C1").unwrap(),
            highpass_capacitor(2.148, 75.0, 1e7).unwrap()
        );
    }

    #[test]
    fn bandpass_rejects_degenerate_band() {
        let pair = split(3).unwrap();
        assert!(matches!(
            build_bandpass(100e6, 0.0, 50.0, &pair.cn, &pair.ln),
            Err(FilterError::Domain { parameter: "bandwidth", .. })
        ));
        assert!(matches!(
            build_bandpass(1e6, 2e6, 50.0, &pair.cn, &pair.ln),
            Err(FilterError::Domain { parameter: "lower band edge", .. })
        ));
    }

    #[test]
    fn failure_returns_no_partial_result() {
        let pair = split(4).unwrap();
        assert!(build_lowpass(1e6, 0.0, &pair.cn, &pair.ln).is_err());
    }
}
