use crate::descriptor::{PropertyInfo, TypeInfo};
use crate::execution::Verification;

use std::fmt::{self, Display};

/// Assertions over a set of properties selected from a type.
///
/// Construct it with [`PropertyAssertions::new`] or, more commonly, through
/// [`PropertySelector::should`](crate::PropertySelector::should). The
/// properties are stored as given and never modified, so every assertion is
/// a pure read and can be repeated with the same outcome.
///
/// Each assertion returns an [`AndConstraint`] for chaining:
///
/// ```
/// use assert_props::{Properties, properties_of};
///
/// struct Required;
///
/// #[derive(Properties)]
/// struct Person {
///     #[property(virtual, decorated_with(Required))]
///     pub name: String,
///     #[property(virtual, decorated_with(Required))]
///     pub age: u32,
/// }
///
/// properties_of::<Person>()
///     .should()
///     .be_virtual()
///     .and()
///     .be_decorated_with::<Required>();
/// ```
#[derive(Debug, Clone)]
pub struct PropertyAssertions {
    subject: TypeInfo,
    properties: Vec<PropertyInfo>,
}

/// Result of an assertion, allowing further assertions on the same subject.
#[derive(Debug)]
pub struct AndConstraint<'a, T> {
    parent: &'a T,
}

impl<'a, T> AndConstraint<'a, T> {
    pub fn new(parent: &'a T) -> Self {
        AndConstraint { parent }
    }

    /// The assertions the constraint was produced by.
    pub fn and(&self) -> &'a T {
        self.parent
    }
}

impl<T> Clone for AndConstraint<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AndConstraint<'_, T> {}

impl PropertyAssertions {
    pub fn new(subject: TypeInfo, properties: Vec<PropertyInfo>) -> Self {
        PropertyAssertions {
            subject,
            properties,
        }
    }

    pub fn subject_type(&self) -> TypeInfo {
        self.subject
    }

    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Asserts that every selected property has a virtual getter.
    ///
    /// A property without a getter is reported as not virtual.
    pub fn be_virtual(&self) -> AndConstraint<'_, Self> {
        self.be_virtual_because("", &[])
    }

    pub fn be_virtual_because(
        &self,
        reason: &str,
        args: &[&dyn Display],
    ) -> AndConstraint<'_, Self> {
        self.verify_all(
            |prop| prop.is_virtual(),
            reason,
            args,
            "Expected all selected properties of {0} to be virtual{reason}, \
             but the following properties are not:\n{1}",
            None,
        )
    }

    /// Asserts that no selected property has a virtual getter.
    pub fn not_be_virtual(&self) -> AndConstraint<'_, Self> {
        self.not_be_virtual_because("", &[])
    }

    pub fn not_be_virtual_because(
        &self,
        reason: &str,
        args: &[&dyn Display],
    ) -> AndConstraint<'_, Self> {
        self.verify_all(
            |prop| !prop.is_virtual(),
            reason,
            args,
            "Expected all selected properties of {0} not to be virtual{reason}, \
             but the following properties are:\n{1}",
            None,
        )
    }

    /// Asserts that every selected property carries an annotation of exactly
    /// kind `A`.
    pub fn be_decorated_with<A: ?Sized + 'static>(&self) -> AndConstraint<'_, Self> {
        self.be_decorated_with_because::<A>("", &[])
    }

    pub fn be_decorated_with_because<A: ?Sized + 'static>(
        &self,
        reason: &str,
        args: &[&dyn Display],
    ) -> AndConstraint<'_, Self> {
        self.verify_all(
            |prop| prop.is_decorated_with::<A>(),
            reason,
            args,
            "Expected all selected properties of {0} to be decorated with {2}{reason}, \
             but the following properties are not:\n{1}",
            Some(annotation_name::<A>()),
        )
    }

    /// Asserts that no selected property carries an annotation of kind `A`.
    pub fn not_be_decorated_with<A: ?Sized + 'static>(&self) -> AndConstraint<'_, Self> {
        self.not_be_decorated_with_because::<A>("", &[])
    }

    pub fn not_be_decorated_with_because<A: ?Sized + 'static>(
        &self,
        reason: &str,
        args: &[&dyn Display],
    ) -> AndConstraint<'_, Self> {
        self.verify_all(
            |prop| !prop.is_decorated_with::<A>(),
            reason,
            args,
            "Expected all selected properties of {0} not to be decorated with {2}{reason}, \
             but the following properties are:\n{1}",
            Some(annotation_name::<A>()),
        )
    }

    /// Asserts that every selected property has a setter.
    pub fn be_writable(&self) -> AndConstraint<'_, Self> {
        self.be_writable_because("", &[])
    }

    pub fn be_writable_because(
        &self,
        reason: &str,
        args: &[&dyn Display],
    ) -> AndConstraint<'_, Self> {
        self.verify_all(
            |prop| prop.is_writable(),
            reason,
            args,
            "Expected all selected properties of {0} to be writable{reason}, \
             but the following properties are not:\n{1}",
            None,
        )
    }

    /// Asserts that no selected property has a setter.
    pub fn not_be_writable(&self) -> AndConstraint<'_, Self> {
        self.not_be_writable_because("", &[])
    }

    pub fn not_be_writable_because(
        &self,
        reason: &str,
        args: &[&dyn Display],
    ) -> AndConstraint<'_, Self> {
        self.verify_all(
            |prop| !prop.is_writable(),
            reason,
            args,
            "Expected all selected properties of {0} not to be writable{reason}, \
             but the following properties are:\n{1}",
            None,
        )
    }

    // `{0}` is the subject type, `{1}` the offending properties, `{2}` the
    // optional extra argument.
    fn verify_all(
        &self,
        satisfies: impl Fn(&PropertyInfo) -> bool,
        reason: &str,
        args: &[&dyn Display],
        template: &str,
        extra: Option<&str>,
    ) -> AndConstraint<'_, Self> {
        let offending: Vec<&PropertyInfo> = self
            .properties
            .iter()
            .filter(|prop| !satisfies(*prop))
            .collect();

        let listing = Listing(&offending);
        let mut template_args: Vec<&dyn Display> = Vec::with_capacity(3);
        template_args.push(&self.subject);
        template_args.push(&listing);
        if let Some(extra) = &extra {
            template_args.push(extra);
        }

        Verification::begin()
            .for_condition(offending.is_empty())
            .because(reason, args)
            .fail_with(template, &template_args);

        AndConstraint::new(self)
    }
}

fn annotation_name<A: ?Sized + 'static>() -> &'static str {
    crate::descriptor::AnnotationInfo::of::<A>().name()
}

/// One `<declared-type> <name>` per line.
struct Listing<'a>(&'a [&'a PropertyInfo]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, prop) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", prop)?;
        }
        Ok(())
    }
}
