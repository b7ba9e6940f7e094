//! Pure presentation helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules hold the tag-to-class lookup tables, icon markup, and
//! timeline placement rules so they can be tested without rendering.

pub mod icons;
pub mod palette;
pub mod timeline;
