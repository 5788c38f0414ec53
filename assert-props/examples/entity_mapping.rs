//! Checks the conventions an object mapper expects from entity types.
//!
//! Run with `cargo run --example entity_mapping`.

#![allow(dead_code)]
use assert_props::{AssertionScope, Properties, properties_of};

/// Marks the primary key.
struct Key;
/// Marks a column that must not be null.
struct Required;

#[derive(Properties)]
pub struct Customer {
    #[property(virtual, read_only, decorated_with(Key, Required))]
    pub id: u64,
    #[property(virtual, decorated_with(Required))]
    pub name: String,
    #[property(virtual)]
    pub email: Option<String>,
    #[property(skip)]
    dirty: bool,
}

#[derive(Properties)]
pub struct Order {
    #[property(virtual, read_only, decorated_with(Key))]
    pub id: u64,
    pub customer_id: u64,
    #[property(virtual)]
    pub(crate) total_cents: i64,
}

fn main() {
    // Customer follows every convention.
    properties_of::<Customer>()
        .that_are_public_or_crate()
        .should()
        .be_virtual_because("the mapper generates lazy-loading proxies", &[]);

    properties_of::<Customer>()
        .that_are_decorated_with::<Key>()
        .should()
        .not_be_writable()
        .and()
        .be_decorated_with::<Required>();

    // Order does not: collect the failures and print them instead of panicking.
    let scope = AssertionScope::new();
    let order = properties_of::<Order>().should();
    order
        .be_virtual()
        .and()
        .be_decorated_with_because::<Required>("{0} columns are NOT NULL", &[&"mapped"]);

    for failure in scope.discard() {
        println!("{}\n", failure);
    }
}
