//! Feedback port

pub mod ports;
