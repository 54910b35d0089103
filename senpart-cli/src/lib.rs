//! senpart CLI library
//!
//! Command-line front-end for the senpart clause segmentation engine.

pub mod commands;
pub mod output;
