//! Wait on many operations at once
//!
//! [`parallel_for_each`] fans one action out over a sequence and joins the
//! results. [`when_all`] joins a fixed tuple of handles of different types and
//! hands every outcome back.

mod join;
mod parallel;

pub use join::{when_all, WhenAll};
pub use parallel::parallel_for_each;
