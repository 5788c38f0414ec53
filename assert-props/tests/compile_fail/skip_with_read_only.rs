#![allow(dead_code)]
use assert_props::Properties;

#[derive(Properties)]
struct Person {
    #[property(skip, read_only)]
    cache: Vec<u8>,
}

fn main() {}
