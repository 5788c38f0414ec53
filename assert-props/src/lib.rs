//! # assert-props: Fluent Assertions over Type Properties
//!
//! `assert-props` lets tests assert structural facts about the properties of a
//! type: that they are virtual, that they carry a marker annotation, that they
//! are writable. Assertions are chained fluently, and failures name the type
//! and list every offending property.
//!
//! Rust has no runtime reflection, so properties are described statically.
//! `#[derive(Properties)]` generates the description from a struct definition.
//!
//! # Table of Contents
//!
//! - [Quick Start](#quick-start)
//! - [Describing Properties](#describing-properties)
//! - [Selecting Properties](#selecting-properties)
//! - [Assertions](#assertions)
//! - [Reasons](#reasons)
//! - [Error Messages](#error-messages)
//! - [Collecting Failures](#collecting-failures)
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! assert-props = "0.1"
//! ```
//!
//! Basic example:
//!
//! ```rust
//! use assert_props::{Properties, properties_of};
//!
//! // Marker annotations are plain types.
//! struct Required;
//!
//! #[derive(Properties)]
//! struct Person {
//!     #[property(virtual, decorated_with(Required))]
//!     pub name: String,
//!     #[property(virtual, decorated_with(Required))]
//!     pub age: u32,
//! }
//!
//! properties_of::<Person>()
//!     .should()
//!     .be_virtual()
//!     .and()
//!     .be_decorated_with::<Required>();
//! ```
//!
//! # Describing Properties
//!
//! Every named field of a struct deriving `Properties` becomes a property. Its
//! declared type is the field type as written, and its accessors take the
//! field's visibility. The `#[property(...)]` attribute refines the
//! description:
//!
//! | argument                   | effect                                   |
//! |----------------------------|------------------------------------------|
//! | `virtual`                  | getter and setter are virtual            |
//! | `read_only`                | the property has no setter               |
//! | `decorated_with(A, B, ..)` | applies marker annotations `A`, `B`, ... |
//! | `skip`                     | the field is not a property              |
//!
//! Types that cannot use the derive implement [`Described`] by hand, building
//! descriptors with [`PropertyInfo`]'s builder methods:
//!
//! ```rust
//! use assert_props::{Described, PropertyInfo, TypeInfo, properties_of};
//!
//! struct Required;
//! struct Legacy;
//!
//! impl Described for Legacy {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::of::<Legacy>()
//!     }
//!
//!     fn properties() -> Vec<PropertyInfo> {
//!         vec![
//!             PropertyInfo::new("id", "u64")
//!                 .read_only()
//!                 .decorated_with::<Required>(),
//!         ]
//!     }
//! }
//!
//! properties_of::<Legacy>().should().not_be_writable();
//! ```
//!
//! # Selecting Properties
//!
//! [`properties_of`] returns a [`PropertySelector`] that narrows the set before
//! asserting:
//!
//! ```rust
//! # use assert_props::{Properties, properties_of};
//! # struct Key;
//! #[derive(Properties)]
//! struct Order {
//!     #[property(read_only, decorated_with(Key))]
//!     pub id: u64,
//!     #[property(virtual)]
//!     pub customer: String,
//!     internal_revision: u32,
//! }
//!
//! properties_of::<Order>()
//!     .that_are_public_or_crate()
//!     .that_are_not_decorated_with::<Key>()
//!     .should()
//!     .be_virtual();
//! ```
//!
//! Available filters: `that_are_public_or_crate`, `that_are_virtual`,
//! `that_are_not_virtual`, `that_are_decorated_with`,
//! `that_are_not_decorated_with`, `of_type`, and `with_name_matching`
//! (requires the `regex` feature, enabled by default).
//!
//! # Assertions
//!
//! [`PropertyAssertions`] offers:
//!
//! - `be_virtual` / `not_be_virtual`
//! - `be_decorated_with::<A>` / `not_be_decorated_with::<A>`
//! - `be_writable` / `not_be_writable`
//!
//! An empty selection satisfies every assertion. Annotation kinds match
//! exactly: a property decorated with `A` is not decorated with any other
//! type, however related.
//!
//! # Reasons
//!
//! Each assertion has a `_because` variant taking a reason and positional
//! arguments. The reason is inserted into the failure message and prefixed
//! with "because" unless it already starts with it:
//!
//! ```rust,should_panic
//! # use assert_props::{Properties, properties_of};
//! #[derive(Properties)]
//! struct Person {
//!     pub age: u32,
//! }
//!
//! properties_of::<Person>()
//!     .should()
//!     .be_virtual_because("{0} creates proxies for every entity", &[&"the ORM"]);
//! // Expected all selected properties of Person to be virtual because the ORM
//! // creates proxies for every entity, but the following properties are not:
//! // u32 age
//! ```
//!
//! # Error Messages
//!
//! A failed assertion panics with a message naming the type and listing each
//! offending property as `<declared-type> <name>`, one per line:
//!
//! ```text
//! Expected all selected properties of Person to be decorated with Required, but the following properties are not:
//! u32 age
//! Option<String> nickname
//! ```
//!
//! # Collecting Failures
//!
//! An [`AssertionScope`] collects failures on the current thread and reports
//! them together when it is dropped:
//!
//! ```rust
//! # use assert_props::{AssertionScope, Properties, properties_of};
//! #[derive(Properties)]
//! struct Person {
//!     pub age: u32,
//! }
//!
//! let scope = AssertionScope::new();
//! let person = properties_of::<Person>().should();
//! person.be_virtual().and().not_be_writable();
//!
//! assert_eq!(scope.discard().len(), 2);
//! ```

// Lets the derive output resolve `::assert_props` inside this crate's tests.
extern crate self as assert_props;

/// Implements [`Described`] for a struct with named fields.
///
/// See the [crate-level documentation](crate#describing-properties) for the
/// `#[property(...)]` arguments.
pub use assert_props_macros::Properties;

mod assertions;
pub use assertions::{AndConstraint, PropertyAssertions};

mod descriptor;
pub use descriptor::{
    Accessor, AnnotationInfo, Described, PropertyInfo, TypeInfo, Visibility,
};

mod execution;
pub use execution::{AssertionScope, Verification};

mod selector;
pub use selector::{PropertySelector, properties_of};
