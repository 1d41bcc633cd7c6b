//! A pluggable registry for AI media-generation providers.
//!

pub use medley_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use medley_internal::prelude::*;
}
