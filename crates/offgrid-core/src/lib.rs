//! offgrid — inventory installed Steam titles and estimate how likely each
//! one is to need a network connection to be playable.
//!
//! The pipeline: [`steam`] finds the library and enumerates appmanifest
//! files, [`manifest`] turns each file into an [`models::AppRecord`],
//! [`classify`] separates real games from runtime/support artifacts, and
//! [`risk`] scores the games. [`scan`] ties the steps together.

pub mod classify;
pub mod config;
pub mod keywords;
pub mod manifest;
pub mod models;
pub mod risk;
pub mod scan;
pub mod steam;
