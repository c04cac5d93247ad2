//! Strategy editor
//!
//! Application layer over the graph: places catalog components, applies the
//! connection policy, validates parameter writes, and packages saves

mod session;
mod types;

pub use session::StrategyEditor;
pub use types::{ConnectOutcome, ConnectionPolicy, EditorError};
