//! stratgraph: visual trading strategy builder
//!
//! This library provides the core components for:
//! - A catalog of indicator, signal, filter and logic components
//! - The strategy graph of placed nodes and directed connections
//! - Category compatibility rules for connections
//! - An editing session with selection and connection gestures
//! - Strategy documents, save validation and the quick builder
//! - In-memory storage with per-user authorization
//! - Password login and expiring sessions
//! - Structured logging and Prometheus counters

pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod editor;
pub mod graph;
pub mod storage;
pub mod strategy;
pub mod telemetry;
