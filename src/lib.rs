//! Clear-sky solar radiation estimates for a fixed site (ASCE astronomical method).
//!
//! The estimation core lives in [`calendar`], [`solar`] and [`radiation`];
//! [`config`], [`date_gen`] and [`output`] drive it to produce tables.

pub mod calendar;
pub mod config;
pub mod date_gen;
pub mod error;
pub mod output;
pub mod radiation;
pub mod site;
pub mod solar;

pub use error::{RadestError, Result};
pub use radiation::{RadiationSample, extraterrestrial_radiation, global_radiation};
pub use site::{AveragingWindow, SiteParameters};
