//! Embedded word pools
//!
//! Word pools compiled into the binary at build time.

// Include generated word pools from build script
include!(concat!(env!("OUT_DIR"), "/animals.rs"));
include!(concat!(env!("OUT_DIR"), "/sports.rs"));
include!(concat!(env!("OUT_DIR"), "/languages.rs"));
include!(concat!(env!("OUT_DIR"), "/default.rs"));
