//! Integration tests loading `.ADW` containers through the public `adw-rs` API

mod fixture;
mod scenarios;
