//! Embedded association table
//!
//! Pairs compiled into the binary at build time.

// Include generated association pairs from build script
include!(concat!(env!("OUT_DIR"), "/associations.rs"));
