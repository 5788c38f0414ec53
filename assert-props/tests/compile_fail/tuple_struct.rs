#![allow(dead_code)]
use assert_props::Properties;

#[derive(Properties)]
struct Point(u32, u32);

fn main() {}
