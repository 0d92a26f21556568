use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::error::FilterError;
use super::table::{self, CoefficientPair};

// ---------------------------------------------------------------------------
// Response – which coefficient family a filter is drawn from
// ---------------------------------------------------------------------------

/// Filter response family. Each family owns one coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Bessel,
}

impl Response {
    pub fn as_str(self) -> &'static str {
        match self {
            Response::Bessel => "bessel",
        }
    }

    /// Split this response's row for `order` into ladder roles.
    pub fn split(self, order: usize) -> Result<CoefficientPair, FilterError> {
        match self {
            Response::Bessel => table::split(order),
        }
    }
}

impl FromStr for Response {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bessel" => Ok(Response::Bessel),
            other => Err(FilterError::UnsupportedResponse(other.to_string())),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FilterType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Lowpass,
    Highpass,
    Bandpass,
}

impl FilterType {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::Lowpass => "lowpass",
            FilterType::Highpass => "highpass",
            FilterType::Bandpass => "bandpass",
        }
    }
}

impl FromStr for FilterType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowpass" => Ok(FilterType::Lowpass),
            "highpass" => Ok(FilterType::Highpass),
            "bandpass" => Ok(FilterType::Bandpass),
            other => Err(FilterError::UnsupportedFilterType(other.to_string())),
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Designators
// ---------------------------------------------------------------------------

/// Physical kind of a component, decided by the first letter of its designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Capacitor,
    Inductor,
}

impl ComponentKind {
    /// SI unit symbol: Farads or Henries.
    pub fn unit(self) -> &'static str {
        match self {
            ComponentKind::Capacitor => "F",
            ComponentKind::Inductor => "H",
        }
    }

    pub fn from_designator(designator: &str) -> Option<Self> {
        match designator.chars().next()? {
            'C' => Some(ComponentKind::Capacitor),
            'L' => Some(ComponentKind::Inductor),
            _ => None,
        }
    }
}

/// Position of a component in the ladder network.
///
/// Variant order is the listing order of a [`FilterResult`]: plain ladder
/// elements first, then bandpass parallel resonators, then series resonators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Inductor,
    Capacitor,
    ParallelCapacitor,
    ParallelInductor,
    SeriesCapacitor,
    SeriesInductor,
}

impl Role {
    const ALL: [Role; 6] = [
        Role::Inductor,
        Role::Capacitor,
        Role::ParallelCapacitor,
        Role::ParallelInductor,
        Role::SeriesCapacitor,
        Role::SeriesInductor,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Role::Inductor => "L",
            Role::Capacitor => "C",
            Role::ParallelCapacitor => "Cp",
            Role::ParallelInductor => "Lp",
            Role::SeriesCapacitor => "Cs",
            Role::SeriesInductor => "Ls",
        }
    }

    pub fn kind(self) -> ComponentKind {
        match self {
            Role::Capacitor | Role::ParallelCapacitor | Role::SeriesCapacitor => {
                ComponentKind::Capacitor
            }
            Role::Inductor | Role::ParallelInductor | Role::SeriesInductor => {
                ComponentKind::Inductor
            }
        }
    }
}

/// Schematic reference designator such as `C1` or `Lp2`.
///
/// Ordering is by role, then numerically by index, so `C2` sorts before `C10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Designator {
    pub role: Role,
    /// 1-based position within the role's coefficient sub-sequence.
    pub index: usize,
}

impl Designator {
    /// Designator for the element at 0-based `position` of a role's sub-sequence.
    pub fn nth(role: Role, position: usize) -> Self {
        Designator {
            role,
            index: position + 1,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.role.kind()
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.role.prefix(), self.index)
    }
}

impl FromStr for Designator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FilterError::InvalidDesignator(s.to_string());
        let split_at = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (prefix, digits) = s.split_at(split_at);
        let role = Role::ALL
            .into_iter()
            .find(|r| r.prefix() == prefix)
            .ok_or_else(invalid)?;
        let index: usize = digits.parse().map_err(|_| invalid())?;
        if index == 0 {
            return Err(invalid());
        }
        Ok(Designator { role, index })
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One denormalized component: designator plus value in Farads or Henries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentValue {
    pub designator: Designator,
    pub value: f64,
}

impl ComponentValue {
    pub fn kind(&self) -> ComponentKind {
        self.designator.kind()
    }
}

/// A capacitor/inductor pair produced by one bandpass resonator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LcPair {
    /// Farads.
    pub capacitance: f64,
    /// Henries.
    pub inductance: f64,
}

/// Component values of one designed filter, keyed by designator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterResult {
    values: BTreeMap<Designator, f64>,
}

impl FilterResult {
    pub(crate) fn insert(&mut self, designator: Designator, value: f64) {
        let previous = self.values.insert(designator, value);
        debug_assert!(previous.is_none(), "duplicate designator {designator}");
    }

    /// Look up a value by its designator text, e.g. `"Cp1"`.
    pub fn get(&self, designator: &str) -> Option<f64> {
        let key: Designator = designator.parse().ok()?;
        self.values.get(&key).copied()
    }

    /// Components in listing order.
    pub fn iter(&self) -> impl Iterator<Item = ComponentValue> + '_ {
        self.values.iter().map(|(designator, value)| ComponentValue {
            designator: *designator,
            value: *value,
        })
    }

    /// Designator strings in listing order.
    pub fn designators(&self) -> Vec<String> {
        self.values.keys().map(|d| d.to_string()).collect()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the result holds no components.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FilterResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter().map(|(d, v)| (d.to_string(), v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_only_bessel() {
        assert_eq!("bessel".parse::<Response>(), Ok(Response::Bessel));
        assert_eq!(
            "chebyshev".parse::<Response>(),
            Err(FilterError::UnsupportedResponse("chebyshev".into()))
        );
    }

    #[test]
    fn filter_type_names_are_exact() {
        assert_eq!("highpass".parse::<FilterType>(), Ok(FilterType::Highpass));
        assert!(matches!(
            "lp".parse::<FilterType>(),
            Err(FilterError::UnsupportedFilterType(_))
        ));
        assert!("Bandpass".parse::<FilterType>().is_err());
    }

    #[test]
    fn designator_display_and_parse() {
        for text in ["L1", "C3", "Cp1", "Lp2", "Cs10", "Ls4"] {
            let d: Designator = text.parse().unwrap();
            assert_eq!(d.to_string(), text);
        }
        assert_eq!(
            "Cs2".parse::<Designator>().unwrap(),
            Designator::nth(Role::SeriesCapacitor, 1)
        );
    }

    #[test]
    fn designator_rejects_garbage() {
        for text in ["", "C", "X1", "C0", "Cx1", "1C", "C1a"] {
            assert!(text.parse::<Designator>().is_err(), "{text} parsed");
        }
    }

    #[test]
    fn designators_sort_numerically() {
        let mut result = FilterResult::default();
        result.insert(Designator::nth(Role::Capacitor, 9), 1.0);
        result.insert(Designator::nth(Role::Capacitor, 1), 1.0);
        result.insert(Designator::nth(Role::Inductor, 0), 1.0);
        assert_eq!(result.designators(), vec!["L1", "C2", "C10"]);
    }

    #[test]
    fn kind_follows_first_letter() {
        for role in Role::ALL {
            let d = Designator::nth(role, 0).to_string();
            assert_eq!(ComponentKind::from_designator(&d), Some(role.kind()));
        }
        assert_eq!(ComponentKind::from_designator("R1"), None);
    }

    #[test]
    fn result_serializes_as_map() {
        let mut result = FilterResult::default();
        result.insert(Designator::nth(Role::Capacitor, 0), 0.5);
        result.insert(Designator::nth(Role::Inductor, 0), 2.0);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"L1":2.0,"C1":0.5}"#);
    }
}
