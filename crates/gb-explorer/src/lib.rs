//! GB Explorer: console, report and chart front end for the García-Barbosa sequence.
//!
//! Everything here consumes [`gb_sequence::SequenceCalculator`]; no sequence
//! or level constants are duplicated.

pub mod charts;
pub mod config;
pub mod display;
pub mod report;
