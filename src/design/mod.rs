//! Design layer: coefficient table, scaling transforms and ladder builders.
//!
//! Architecture:
//! ```text
//!   order
//!     │
//!     ▼
//!   ┌──────────┐
//!   │  table    │  normalized row → CoefficientPair (cn, ln)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ builder   │  walk cn / ln, name each part (L1, Cp2, …)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ transform  │  scale to Hz / Ω → Farads, Henries
//!   └───────────┘
//!        │
//!        ▼
//!   FilterResult
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod table;
pub mod transform;

pub use error::FilterError;
pub use model::{
    ComponentKind, ComponentValue, Designator, FilterResult, FilterType, LcPair, Response, Role,
};
pub use table::CoefficientPair;
