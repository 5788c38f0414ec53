#![allow(dead_code)]
use assert_props::Properties;

#[derive(Properties)]
struct Person {
    #[property(lazy)]
    name: String,
}

fn main() {}
