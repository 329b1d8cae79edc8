//! Smart-quote passes over documents loaded from disk.

mod passes;
