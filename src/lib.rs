//! ascii-buddy library crate.
//!
//! Fetches a random post from a content feed and renders its image as
//! character art sized to the terminal. The rendering pipeline lives in
//! [`ascii`]; [`feed`], [`cli`] and [`config`] are the glue around it.

pub mod app;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
