//! Embedded word banks
//!
//! Word banks compiled into the binary at build time.

// Include generated word banks from build script
include!(concat!(env!("OUT_DIR"), "/classic.rs"));
include!(concat!(env!("OUT_DIR"), "/casual.rs"));
