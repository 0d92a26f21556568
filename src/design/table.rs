use super::error::FilterError;

/// Lowest filter order with a table entry.
pub const MIN_ORDER: usize = 1;
/// Highest filter order with a table entry.
pub const MAX_ORDER: usize = 10;

// ---------------------------------------------------------------------------
// Normalized Bessel coefficients
// ---------------------------------------------------------------------------

/// Bessel ladder element values normalized to 1 Ω and 1 rad/s.
/// Row `n - 1` holds the `n` elements of an order-`n` ladder, starting at the
/// source-side shunt element.
static BESSEL: [&[f64]; MAX_ORDER] = [
    &[2.00],
    &[0.5760, 2.148],
    &[0.3374, 0.9705, 2.2034],
    &[0.2334, 0.6725, 1.0815, 2.2404],
    &[0.1743, 0.5072, 0.8040, 1.1110, 2.2582],
    &[0.1365, 0.4002, 0.6392, 0.8538, 1.1126, 2.2645],
    &[0.1106, 0.3259, 0.5249, 0.7020, 0.8690, 1.1052, 2.2659],
    &[0.0919, 0.2719, 0.4409, 0.5936, 0.7303, 0.8695, 1.0956, 2.2656],
    &[0.0780, 0.2313, 0.3770, 0.5108, 0.6306, 0.7407, 0.8639, 1.0863, 2.2649],
    &[0.0672, 0.1998, 0.3270, 0.4454, 0.5528, 0.6493, 0.7420, 0.8561, 1.0781, 2.2641],
];

/// Return the normalized coefficient row for `order`.
pub fn coefficients_for_order(order: usize) -> Result<&'static [f64], FilterError> {
    if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
        return Err(FilterError::InvalidOrder(order));
    }
    Ok(BESSEL[order - 1])
}

// ---------------------------------------------------------------------------
// CoefficientPair – the two ladder roles of one table row
// ---------------------------------------------------------------------------

/// A table row split by ladder role.
///
/// `cn` holds the capacitor-prototype elements (even positions) and `ln`
/// the inductor-prototype elements (odd positions), each in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientPair {
    pub cn: Vec<f64>,
    pub ln: Vec<f64>,
}

impl CoefficientPair {
    /// Filter order this pair was split from.
    pub fn order(&self) -> usize {
        self.cn.len() + self.ln.len()
    }

    /// Rebuild the original table row by alternating `cn` and `ln`.
    pub fn interleave(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.order());
        for (i, c) in self.cn.iter().enumerate() {
            row.push(*c);
            if let Some(l) = self.ln.get(i) {
                row.push(*l);
            }
        }
        row
    }
}

/// Split the row for `order` into its capacitor and inductor roles.
pub fn split(order: usize) -> Result<CoefficientPair, FilterError> {
    let coeffs = coefficients_for_order(order)?;
    let cn = coeffs.iter().step_by(2).copied().collect();
    let ln = coeffs.iter().skip(1).step_by(2).copied().collect();
    Ok(CoefficientPair { cn, ln })
}

/// Iterate over every order in the table together with its row.
pub fn rows() -> impl Iterator<Item = (usize, &'static [f64])> {
    BESSEL
        .iter()
        .enumerate()
        .map(|(i, row)| (i + MIN_ORDER, *row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_length_matches_order() {
        for (order, row) in rows() {
            assert_eq!(row.len(), order);
            assert!(row.iter().all(|c| *c > 0.0));
        }
    }

    #[test]
    fn out_of_range_orders_are_rejected() {
        assert_eq!(coefficients_for_order(0), Err(FilterError::InvalidOrder(0)));
        assert_eq!(coefficients_for_order(11), Err(FilterError::InvalidOrder(11)));
        assert_eq!(split(11), Err(FilterError::InvalidOrder(11)));
    }

    #[test]
    fn split_sizes_follow_parity() {
        for order in MIN_ORDER..=MAX_ORDER {
            let pair = split(order).unwrap();
            assert_eq!(pair.cn.len(), order.div_ceil(2));
            assert_eq!(pair.ln.len(), order / 2);
            assert_eq!(pair.order(), order);
        }
    }

    #[test]
    fn interleave_restores_row() {
        for (order, row) in rows() {
            assert_eq!(split(order).unwrap().interleave(), row);
        }
    }

    #[test]
    fn third_order_split() {
        let pair = split(3).unwrap();
        assert_eq!(pair.cn, vec![0.3374, 2.2034]);
        assert_eq!(pair.ln, vec![0.9705]);
    }

    #[test]
    fn first_order_has_no_inductors() {
        let pair = split(1).unwrap();
        assert_eq!(pair.cn, vec![2.00]);
        assert!(pair.ln.is_empty());
    }
}
