#![allow(dead_code)]
use assert_props::{
    AnnotationInfo, Described, Properties, PropertyInfo, Visibility, properties_of,
};
use std::collections::HashMap;

struct Required;
struct Indexed;

mod model {
    use assert_props::Properties;

    #[derive(Properties)]
    pub struct Invoice {
        pub number: String,
    }
}

#[derive(Properties)]
struct Catalog<'a, T: Clone> {
    #[property(virtual, decorated_with(Required))]
    pub title: &'a str,
    #[property(read_only, decorated_with(Indexed, Required))]
    pub(crate) items: Vec<T>,
    #[property(skip)]
    lookup: HashMap<String, usize>,
    r#type: (u8, bool),
}

type StringCatalog = Catalog<'static, String>;

#[test]
fn type_info_names_the_struct() {
    let info = StringCatalog::type_info();
    assert_eq!(info.name(), "Catalog");
    assert_eq!(info.module_path(), "derive");

    let info = model::Invoice::type_info();
    assert_eq!(info.name(), "Invoice");
    assert_eq!(info.full_name(), "derive::model::Invoice");
}

#[test]
fn fields_become_properties_in_order() {
    let props = StringCatalog::properties();
    let listing: Vec<String> = props.iter().map(PropertyInfo::to_string).collect();
    assert_eq!(listing, ["&'a str title", "Vec<T> items", "(u8, bool) type"]);
}

#[test]
fn attributes_shape_the_descriptor() {
    let props = StringCatalog::properties();

    let title = &props[0];
    assert!(title.is_virtual());
    assert!(title.is_writable());
    assert_eq!(title.visibility(), Some(Visibility::Public));
    assert_eq!(title.annotations(), [AnnotationInfo::of::<Required>()]);

    let items = &props[1];
    assert!(!items.is_virtual());
    assert!(!items.is_writable());
    assert_eq!(items.visibility(), Some(Visibility::Crate));
    assert_eq!(
        items.annotations(),
        [AnnotationInfo::of::<Indexed>(), AnnotationInfo::of::<Required>()]
    );

    let kind = &props[2];
    assert!(kind.getter().is_some());
    assert_eq!(kind.visibility(), Some(Visibility::Private));
    assert!(kind.annotations().is_empty());
}

#[test]
fn descriptors_are_stable() {
    assert_eq!(StringCatalog::properties(), StringCatalog::properties());
}

#[test]
fn selector_over_derived_type() {
    let selected = properties_of::<StringCatalog>()
        .that_are_public_or_crate()
        .that_are_decorated_with::<Required>();
    assert_eq!(selected.len(), 2);

    selected.should().be_decorated_with::<Required>();
}
