//! Card fixture utilities.
//!
//! `factory` holds pure functions returning in-memory models; `data` inserts them into
//! the test database through [`CardFixtures`].

use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    /// Access card fixture helpers for this context's database.
    pub fn card(&self) -> CardFixtures<'_> {
        CardFixtures { setup: self }
    }
}

pub struct CardFixtures<'a> {
    pub setup: &'a TestContext,
}
