#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

pub mod cmark;
pub mod config;
pub mod i18n;
pub mod journey;
pub mod tzolkin;

pub mod error {
    pub use anyhow::{Error, Result};
}
