#![allow(dead_code)]
use assert_props::{Described, Properties};
use std::fmt::Debug;

#[derive(Properties)]
struct Wrapper<'a, T, const N: usize>
where
    T: Debug,
{
    pub items: [T; N],
    pub label: &'a str,
}

fn main() {
    let props = Wrapper::<'static, u8, 4>::properties();
    assert_eq!(props[0].declared_type(), "[T; N]");
    assert_eq!(props[1].declared_type(), "&'a str");
    assert_eq!(Wrapper::<'static, u8, 4>::type_info().name(), "Wrapper");
}
