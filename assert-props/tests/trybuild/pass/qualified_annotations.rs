#![allow(dead_code)]
use assert_props::{Properties, properties_of};

mod rules {
    pub struct NotBlank;

    pub mod numeric {
        pub struct Positive;
    }
}

#[derive(Properties)]
pub struct Order {
    #[property(decorated_with(rules::NotBlank))]
    pub customer: String,
    #[property(decorated_with(rules::numeric::Positive, ::std::marker::PhantomData<u8>))]
    pub quantity: u32,
}

fn main() {
    properties_of::<Order>()
        .of_type("u32")
        .should()
        .be_decorated_with::<rules::numeric::Positive>()
        .and()
        .be_decorated_with::<::std::marker::PhantomData<u8>>();
}
