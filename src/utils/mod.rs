// src/utils/mod.rs

pub mod format;
pub mod textarea;
