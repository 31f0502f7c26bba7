//! Data models for the seasoncast core
//!
//! This module contains the core domain types organized by concern:
//! - City: catalog record and display metadata
//! - Region / Season: closed enums keying the temperature range table
//! - Unit: presentation-time temperature unit
//! - Icon: the fixed symbol set the display picks from

pub mod city;
pub mod icon;
pub mod region;
pub mod season;
pub mod unit;

// Re-export all public types for convenient access
pub use city::City;
pub use icon::WeatherIcon;
pub use region::Region;
pub use season::Season;
pub use unit::Unit;
