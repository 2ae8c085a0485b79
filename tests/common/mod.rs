//! Shared fixtures: maps, legends and user records, plus the presenter
//! classes declared over them.

#![allow(dead_code)] // Not every test binary uses every fixture

pub mod domain;
pub mod presenters;
pub mod strategies;

#[allow(unused_imports)]
pub use domain::*;
#[allow(unused_imports)]
pub use presenters::*;
