//! Runtime requirement checking.
//!
//! # Modules
//!
//! - [`probe`] - PATH lookup for interpreter candidates
//! - [`runtime`] - Python interpreter discovery and version parsing

pub mod probe;
pub mod runtime;

pub use runtime::{
    PythonVersion, RuntimeChecker, RuntimeInfo, DEFAULT_INTERPRETERS, DOWNLOAD_URL,
};
