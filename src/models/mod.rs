// src/models/mod.rs

pub mod assistant;
pub mod dashboard;
pub mod finance;
pub mod legal;
pub mod tasks;
pub mod users;
