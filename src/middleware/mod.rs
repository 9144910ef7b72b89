// src/middleware/mod.rs

pub mod capability;
pub mod session;
