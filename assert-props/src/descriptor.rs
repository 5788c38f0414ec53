//! Static descriptors for the properties of a type.
//!
//! Rust has no runtime reflection, so everything the assertions inspect is
//! described up front: the subject type ([`TypeInfo`]), each of its
//! properties ([`PropertyInfo`]) and the marker annotations applied to them
//! ([`AnnotationInfo`]). Descriptors are normally emitted by
//! `#[derive(Properties)]`, but the builder methods make it easy to write
//! them by hand for types that cannot use the derive.

use std::any::{self, TypeId};
use std::fmt;

/// Types that expose descriptors for their properties.
///
/// Implemented by `#[derive(Properties)]`. A manual implementation only has
/// to return the same values on every call.
pub trait Described {
    /// The descriptor of the implementing type.
    fn type_info() -> TypeInfo;

    /// The properties of the implementing type, in declaration order.
    fn properties() -> Vec<PropertyInfo>;
}

/// Identifies the type whose properties are being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    name: &'static str,
    module_path: &'static str,
}

impl TypeInfo {
    /// Creates a descriptor from a short type name and the module it lives in.
    pub const fn new(name: &'static str, module_path: &'static str) -> Self {
        TypeInfo { name, module_path }
    }

    /// Derives a descriptor from [`std::any::type_name`].
    ///
    /// ```
    /// use assert_props::TypeInfo;
    ///
    /// struct Person;
    ///
    /// let info = TypeInfo::of::<Person>();
    /// assert_eq!(info.name(), "Person");
    /// ```
    pub fn of<T: ?Sized>() -> Self {
        let (module_path, name) = split_type_name(any::type_name::<T>());
        TypeInfo { name, module_path }
    }

    /// The short type name, e.g. `Person`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The module path the type was declared in. May be empty.
    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// `module_path::Name`, or just the name when the module path is empty.
    pub fn full_name(&self) -> String {
        if self.module_path.is_empty() {
            self.name.to_string()
        } else {
            format!("{}::{}", self.module_path, self.name)
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The kind of a marker annotation applied to a property.
///
/// Kinds are Rust types (usually unit structs) and are compared by exact
/// [`TypeId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationInfo {
    type_id: TypeId,
    name: &'static str,
}

impl AnnotationInfo {
    /// The annotation kind represented by the marker type `A`.
    pub fn of<A: ?Sized + 'static>() -> Self {
        AnnotationInfo {
            type_id: TypeId::of::<A>(),
            name: short_type_name::<A>(),
        }
    }

    /// Returns `true` if this annotation is exactly of kind `A`.
    pub fn is<A: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<A>()
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Short name of the marker type, used in failure messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for AnnotationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Visibility of a property accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in path)`
    Crate,
    /// No visibility modifier.
    Private,
}

/// A read or write accessor of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accessor {
    pub visibility: Visibility,
    /// Whether the accessor can be overridden.
    pub is_virtual: bool,
}

impl Accessor {
    pub const fn new(visibility: Visibility, is_virtual: bool) -> Self {
        Accessor {
            visibility,
            is_virtual,
        }
    }
}

/// Describes one property of a type.
///
/// ```
/// use assert_props::{PropertyInfo, Visibility};
///
/// struct Required;
///
/// let name = PropertyInfo::new("name", "String")
///     .with_virtual(true)
///     .decorated_with::<Required>();
///
/// assert!(name.is_virtual());
/// assert!(name.is_decorated_with::<Required>());
/// assert_eq!(name.visibility(), Some(Visibility::Public));
/// assert_eq!(name.to_string(), "String name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    name: &'static str,
    declared_type: &'static str,
    getter: Option<Accessor>,
    setter: Option<Accessor>,
    annotations: Vec<AnnotationInfo>,
}

impl PropertyInfo {
    /// A public, non-virtual, read-write property without annotations.
    pub fn new(name: &'static str, declared_type: &'static str) -> Self {
        let accessor = Accessor::new(Visibility::Public, false);
        PropertyInfo {
            name,
            declared_type,
            getter: Some(accessor),
            setter: Some(accessor),
            annotations: Vec::new(),
        }
    }

    /// Sets the visibility of both accessors.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        for accessor in [&mut self.getter, &mut self.setter].into_iter().flatten() {
            accessor.visibility = visibility;
        }
        self
    }

    /// Marks both accessors as virtual or not.
    pub fn with_virtual(mut self, is_virtual: bool) -> Self {
        for accessor in [&mut self.getter, &mut self.setter].into_iter().flatten() {
            accessor.is_virtual = is_virtual;
        }
        self
    }

    /// Removes the setter.
    pub fn read_only(mut self) -> Self {
        self.setter = None;
        self
    }

    /// Removes the getter, leaving a write-only property.
    pub fn write_only(mut self) -> Self {
        self.getter = None;
        self
    }

    /// Applies a marker annotation of kind `A`.
    pub fn decorated_with<A: ?Sized + 'static>(self) -> Self {
        self.with_annotation(AnnotationInfo::of::<A>())
    }

    pub fn with_annotation(mut self, annotation: AnnotationInfo) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn declared_type(&self) -> &'static str {
        self.declared_type
    }

    pub fn getter(&self) -> Option<&Accessor> {
        self.getter.as_ref()
    }

    pub fn setter(&self) -> Option<&Accessor> {
        self.setter.as_ref()
    }

    pub fn annotations(&self) -> &[AnnotationInfo] {
        &self.annotations
    }

    /// Returns `true` if the property has a getter and it is virtual.
    ///
    /// A property without a getter is never virtual.
    pub fn is_virtual(&self) -> bool {
        self.getter.is_some_and(|getter| getter.is_virtual)
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    /// Visibility of the getter, falling back to the setter.
    pub fn visibility(&self) -> Option<Visibility> {
        self.getter
            .or(self.setter)
            .map(|accessor| accessor.visibility)
    }

    /// Returns `true` if at least one applied annotation is exactly of kind `A`.
    pub fn is_decorated_with<A: ?Sized + 'static>(&self) -> bool {
        self.annotations.iter().any(AnnotationInfo::is::<A>)
    }
}

/// Formats as `<declared-type> <name>`, the form used in failure listings.
impl fmt::Display for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.declared_type, self.name)
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    split_type_name(any::type_name::<T>()).1
}

// Splits `a::b::Name<c::D>` into (`a::b`, `Name<c::D>`). Generic arguments
// are left untouched so their own paths do not confuse the split. Types that
// are not plain paths (`&a::T`, `[a::T]`, `(a::A, b::B)`) are kept whole.
fn split_type_name(full: &'static str) -> (&'static str, &'static str) {
    let head = &full[..full.find('<').unwrap_or(full.len())];
    let is_path = !head.is_empty()
        && head
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '_' || ch == ':');
    if !is_path {
        return ("", full);
    }

    match head.rfind("::") {
        Some(sep) => (&full[..sep], &full[sep + 2..]),
        None => ("", full),
    }
}
