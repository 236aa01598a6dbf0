//! Screening Engine - Screening lifecycle and seat inventory
//!
//! This crate schedules movies into rooms, derives each screening's status
//! from its display window, and arbitrates seat bookings against the room's
//! seat layout.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
