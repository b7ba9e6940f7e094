//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog sections into Tailwind-styled markup. Class
//! lookups and placement rules come from `util`; components only assemble.

pub mod directory;
pub mod legend;
pub mod search_bar;
pub mod section_header;
pub mod site_header;
pub mod svg_icon;
pub mod timeline;
