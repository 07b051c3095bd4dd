//! Coordinate translation through the Kakao Local API.

mod client;
mod response;

pub use client::*;
