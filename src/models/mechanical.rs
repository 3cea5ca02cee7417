//! Mechanical systems models.
//!
//! This module contains models for power transmission components such as
//! belt-and-pulley drivetrains.

pub mod treadmill;
