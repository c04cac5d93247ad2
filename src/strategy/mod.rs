//! Strategy documents
//!
//! Form settings, the saved configuration document, save validation, and the
//! quick-builder template

mod draft;
mod quick;
mod types;

pub use draft::{build_strategy, validate_new_strategy, validate_patch, validate_settings};
pub use quick::{MovingAverageKind, QuickBuildError, QuickIndicator, QuickStrategy};
pub use types::{
    NewStrategy, StrategyConfiguration, StrategyKind, StrategyPatch, StrategySettings,
    StrategyStatus, ValidationError,
};
