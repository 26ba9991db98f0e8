#![allow(dead_code)]
pub mod stubs;

pub use fixtures::{names, TestDomains};
pub use stubs::{CollectingSink, ScriptedResolver, ScriptedSource};
