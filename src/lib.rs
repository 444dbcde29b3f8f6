// src/lib.rs

//! Lectern Library

pub mod config;
pub mod error;
pub mod filter;
pub mod flows;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;
pub mod utils;
