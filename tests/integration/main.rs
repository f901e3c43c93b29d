//! Host-side integration tests for the monitor-and-control loop.
//!
//! These run on x86_64 and drive the full cycle — acquisition, debounced
//! input, card selection, rendering, irrigation — against mock adapters,
//! with virtual time standing in for the device clock.

mod mock_hw;
mod station_tests;
