//! Component values for passive Bessel LC ladder filters.
//!
//! ```
//! use bessel_ladder::service::get_values;
//!
//! // 3rd order lowpass, 10 MHz cutoff, 50 Ω ports.
//! let result = get_values("bessel", "lowpass", 3, 10.0, None, 50.0).unwrap();
//! assert_eq!(result.designators(), vec!["L1", "C1", "C2"]);
//! ```

pub mod design;
pub mod display;
pub mod export;
pub mod service;

pub use design::{FilterError, FilterResult};
pub use service::{get_values, FilterSpec};
