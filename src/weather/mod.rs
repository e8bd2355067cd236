//! WeatherAPI.com forecast client

pub mod client;

pub use client::{WeatherClient, WeatherError};
