//! Station lookup and realtime measurements from the AirKorea open API.

mod client;
mod grade;
mod measurement;
mod response;
mod station;

pub use client::*;
pub use grade::*;
pub use measurement::*;
pub use station::*;
