#![allow(dead_code)]
use assert_props::Properties;

#[derive(Properties)]
enum Status {
    Active,
    Archived,
}

fn main() {}
