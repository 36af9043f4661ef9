//! Test helpers module
//!
//! Mock backend, test context and row fixtures shared by the integration
//! tests.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_context;
pub mod test_data;

#[allow(unused_imports)]
pub use backend_mock::*;
#[allow(unused_imports)]
pub use test_context::*;
#[allow(unused_imports)]
pub use test_data::*;
