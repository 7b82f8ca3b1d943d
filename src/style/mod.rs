//! Style sheets and the shared color cycle.
//!
//! This module provides:
//!
//! - [`StyleSheet`]: a fixed table of formatting options, one complete set
//!   per display mode
//! - [`GridSpec`]: grid line color and width
//! - [`palette`]: the 7-color cycle shared by both sheets
//!
//! The two built-in sheets are static inline data, not computed and not
//! loaded from files: `dusk` (web: dark background, light foreground) and
//! `dawn` (slide: light background, dark foreground).

pub mod palette;
mod sheet;

pub use sheet::{GridSpec, StyleSheet};
