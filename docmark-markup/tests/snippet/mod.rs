//! Snippet resolution against real directory trees.

mod search;
