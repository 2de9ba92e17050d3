//! C API for the frame bridge.
//!
//! Every entry point is prefixed `hf_`. Handles are opaque
//! `*mut HfDenoiser` pointers; `NULL` stands for "no handle" and is
//! accepted by every function.
//!
//! The header is generated by the `hushframe-ffi` crate.

pub(crate) mod conversions;
pub mod functions;
pub mod types;
