//! Describe Rust functions as JSON function schemas.
//!

pub use callschema_core::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use callschema_core::prelude::*;
}
