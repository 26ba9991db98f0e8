#![allow(dead_code)]


pub use mock_ports::*;

use subwatch_domain::{SubdomainName, SubdomainSet};

pub fn names(raw: &[&str]) -> SubdomainSet {
    raw.iter().filter_map(|n| SubdomainName::new(n)).collect()
}

pub fn name(raw: &str) -> SubdomainName {
    SubdomainName::new(raw).expect("non-empty name")
}
