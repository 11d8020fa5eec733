//! Config module tests
//!
//! Settings file loading and atomic saving
