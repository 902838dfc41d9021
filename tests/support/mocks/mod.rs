// tests/support/mocks/mod.rs
//! In-memory stand-ins for the store and the clock.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod store;
pub mod time;

pub use store::{BrokenAuthorRepo, InMemoryStore};
pub use time::{FixedClock, fixed_now};
