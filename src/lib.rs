//! model-deletedir: structure-checked removal of model directories
//!
//! A directory is deleted only when its shape matches a model directory
//! (timestamp-named versions) or a single model version directory.
//! Anything else is refused without touching the filesystem.

pub mod cli;
pub mod deleter;
pub mod error;
pub mod layout;
pub mod target;
pub mod tree;
