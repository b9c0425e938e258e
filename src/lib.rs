//! Crime Trends - Trend details for the crime rate explorer
//!
//! This crate renders the narrative sentence, data table and year picker
//! shown beneath a crime rate trend chart, for the nation or for a place
//! compared against it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
