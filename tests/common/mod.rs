//! Common test utilities shared across integration tests

pub mod fixture;
pub mod helpers;

pub use fixture::TestFixture;
pub use helpers::drive;
