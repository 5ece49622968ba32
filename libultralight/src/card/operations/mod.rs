// libultralight/src/card/operations/mod.rs

//! Tag commands as methods on `Ultralight`, grouped by concern.

mod activation;
mod config;
mod counter;
mod memory;
mod security;
