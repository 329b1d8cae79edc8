//! Table rendering properties.

mod properties;
