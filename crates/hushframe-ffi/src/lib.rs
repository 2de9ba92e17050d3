#![doc = include_str!("../README.md")]

pub use hushframe::ffi::functions::*;
pub use hushframe::ffi::types::*;
