#![allow(dead_code)]
use assert_props::{Properties, PropertyAssertions, PropertyInfo, TypeInfo, properties_of};

mod util;

#[derive(Properties)]
struct Person {
    #[property(virtual)]
    pub name: String,
    pub age: u32,
}

#[derive(Properties)]
struct Proxyable {
    #[property(virtual)]
    pub name: String,
    #[property(virtual, read_only)]
    pub age: u32,
}

#[derive(Properties)]
struct Empty {}

#[test]
fn all_virtual_passes() {
    properties_of::<Proxyable>().should().be_virtual();
}

#[test]
fn empty_selection_passes() {
    properties_of::<Empty>().should().be_virtual();
    properties_of::<Person>()
        .of_type("bool")
        .should()
        .be_virtual()
        .and()
        .not_be_virtual();
}

#[test]
fn filtered_selection_passes() {
    properties_of::<Person>()
        .that_are_virtual()
        .should()
        .be_virtual();
}

#[test]
fn non_virtual_property_is_listed() {
    let message = util::capture_panic_message(|| {
        properties_of::<Person>().should().be_virtual();
    });

    insta::assert_snapshot!(message, @r"
    Expected all selected properties of Person to be virtual, but the following properties are not:
    u32 age
    ");
}

#[test]
fn every_offender_is_listed_in_order() {
    let assertions = PropertyAssertions::new(
        TypeInfo::new("Account", "bank"),
        vec![
            PropertyInfo::new("balance", "i64"),
            PropertyInfo::new("owner", "String").with_virtual(true),
            PropertyInfo::new("history", "Vec<Entry>"),
        ],
    );

    let message = util::capture_panic_message(|| {
        assertions.be_virtual();
    });

    insta::assert_snapshot!(message, @r"
    Expected all selected properties of Account to be virtual, but the following properties are not:
    i64 balance
    Vec<Entry> history
    ");
}

#[test]
fn property_without_getter_is_not_virtual() {
    let assertions = PropertyAssertions::new(
        TypeInfo::new("Credentials", "auth"),
        vec![PropertyInfo::new("password", "String").with_virtual(true).write_only()],
    );

    let message = util::capture_panic_message(|| {
        assertions.be_virtual();
    });

    assert!(message.ends_with("\nString password"), "{}", message);
}

#[test]
fn reason_is_included() {
    let message = util::capture_panic_message(|| {
        properties_of::<Person>()
            .should()
            .be_virtual_because("{0} proxies every entity", &[&"the mapper"]);
    });

    insta::assert_snapshot!(message, @r"
    Expected all selected properties of Person to be virtual because the mapper proxies every entity, but the following properties are not:
    u32 age
    ");
}

#[test]
fn reason_starting_with_because_is_not_prefixed_again() {
    let message = util::capture_panic_message(|| {
        properties_of::<Person>()
            .should()
            .be_virtual_because("because lazy loading needs it", &[]);
    });

    assert!(
        message.starts_with(
            "Expected all selected properties of Person to be virtual because lazy loading needs it, "
        ),
        "{}",
        message
    );
}

#[test]
fn not_be_virtual_lists_virtual_properties() {
    let message = util::capture_panic_message(|| {
        properties_of::<Person>().should().not_be_virtual();
    });

    insta::assert_snapshot!(message, @r"
    Expected all selected properties of Person not to be virtual, but the following properties are:
    String name
    ");
}

#[test]
fn outcome_is_the_same_on_every_call() {
    let person = properties_of::<Person>().should();

    let first = util::capture_panic_message(|| {
        person.be_virtual();
    });
    let second = util::capture_panic_message(|| {
        person.be_virtual();
    });
    assert_eq!(first, second);

    let proxyable = properties_of::<Proxyable>().should();
    proxyable.be_virtual();
    proxyable.be_virtual();
}
