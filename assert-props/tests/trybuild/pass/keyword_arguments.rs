#![allow(dead_code)]
use assert_props::{Described, Properties};

// `virtual` is a reserved word but is accepted as an attribute argument.
#[derive(Properties)]
struct Entity {
    #[property(virtual)]
    #[property(read_only)]
    pub r#ref: u64,
    #[property(skip)]
    cache: Vec<u8>,
}

fn main() {
    let props = Entity::properties();
    assert_eq!(props.len(), 1);
    assert_eq!(props[0].name(), "ref");
    assert!(props[0].is_virtual());
    assert!(!props[0].is_writable());
}
