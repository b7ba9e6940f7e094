//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages pull the shared catalog from context and hand the relevant section
//! to `components`. They own no state of their own.

pub mod home;
pub mod section;
