//! # nuwe-core - Core Domain Types
//!
//! Foundation crate for the NUWE marketing site. Provides the product
//! catalog, the navigation and overlay state machines, and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing) -- and compiles for both the
//! native server and the wasm frontend.
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`Product`] - One sellable product: display strings, asset path, spec lines
//! - [`catalog()`] - The fixed, ordered catalog (compiled in, never mutated)
//!
//! ### Navigation (`nav`)
//! - [`NavState`] - Navbar state machine: `scrolled` flag and mobile menu flag
//! - [`NavLink`], [`NAV_LINKS`] - The anchor links the navbar understands
//! - [`SCROLL_THRESHOLD`] - Offset above which the navbar turns opaque
//!
//! ### Detail Overlays (`overlay`)
//! - [`OverlayState`] - Two-state machine for one overlay (closed/open)
//! - [`DetailOverlay`], [`DetailEntryPoint`] - Per-entry-point overlay flags
//! - [`DetailContent`] - The single content definition both entry points render
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Startup fault taxonomy (configuration, database)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nuwe_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod nav;
pub mod overlay;

/// Prelude for common imports used throughout the NUWE crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{catalog, Product, CATALOG};
pub use error::{Error, Result};
pub use nav::{NavLink, NavState, NAV_LINKS, SCROLL_THRESHOLD, SHOP_ANCHOR};
pub use overlay::{DetailContent, DetailEntryPoint, DetailOverlay, OverlayState};
