//! Settings module tests
//!
//! Contains test suites for the settings model:
//! - Info equality and chaining helpers
//! - Observable value property
//! - Boolean, string and file settings (widgets, commit, JSON)
//! - Registry rendering and loading

#[cfg(test)]
mod mock_toolkit;

#[cfg(test)]
mod boolean_tests;
#[cfg(test)]
mod info_tests;
#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod string_tests;
