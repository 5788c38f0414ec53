#![allow(dead_code)]
use assert_props::Properties;

#[derive(Properties)]
struct Person {
    #[property(decorated_with(Missing))]
    name: String,
}

fn main() {}
