use crate::assertions::PropertyAssertions;
use crate::descriptor::{Described, PropertyInfo, TypeInfo, Visibility};

/// Selects the properties of `T` for filtering and assertions.
///
/// ```
/// use assert_props::{Properties, properties_of};
///
/// struct Audited;
///
/// #[derive(Properties)]
/// pub struct Invoice {
///     #[property(virtual, decorated_with(Audited))]
///     pub total: u64,
///     #[property(decorated_with(Audited))]
///     pub(crate) lines: Vec<String>,
///     cache_key: String,
/// }
///
/// let audited = properties_of::<Invoice>().that_are_decorated_with::<Audited>();
/// assert_eq!(audited.len(), 2);
///
/// audited.that_are_public_or_crate().should().be_writable();
/// ```
pub fn properties_of<T: Described>() -> PropertySelector {
    PropertySelector::new(T::type_info(), T::properties())
}

/// An ordered selection of properties of one type.
///
/// Every filter keeps the relative order of the properties it retains.
#[derive(Debug, Clone)]
pub struct PropertySelector {
    subject: TypeInfo,
    properties: Vec<PropertyInfo>,
}

impl PropertySelector {
    pub fn new(subject: TypeInfo, properties: Vec<PropertyInfo>) -> Self {
        PropertySelector {
            subject,
            properties,
        }
    }

    /// Keeps properties whose getter (or setter, if write-only) is `pub` or
    /// restricted-`pub`.
    pub fn that_are_public_or_crate(self) -> Self {
        self.retain(|prop| {
            matches!(
                prop.visibility(),
                Some(Visibility::Public | Visibility::Crate)
            )
        })
    }

    pub fn that_are_virtual(self) -> Self {
        self.retain(PropertyInfo::is_virtual)
    }

    pub fn that_are_not_virtual(self) -> Self {
        self.retain(|prop| !prop.is_virtual())
    }

    pub fn that_are_decorated_with<A: ?Sized + 'static>(self) -> Self {
        self.retain(PropertyInfo::is_decorated_with::<A>)
    }

    pub fn that_are_not_decorated_with<A: ?Sized + 'static>(self) -> Self {
        self.retain(|prop| !prop.is_decorated_with::<A>())
    }

    /// Keeps properties whose declared type is spelled exactly `type_name`.
    pub fn of_type(self, type_name: &str) -> Self {
        self.retain(|prop| prop.declared_type() == type_name)
    }

    /// Keeps properties whose name matches the regular expression `pattern`.
    ///
    /// An invalid pattern selects nothing.
    #[cfg(feature = "regex")]
    pub fn with_name_matching(self, pattern: &str) -> Self {
        match regex::Regex::new(pattern) {
            Ok(re) => self.retain(|prop| re.is_match(prop.name())),
            Err(_) => self.retain(|_| false),
        }
    }

    pub fn subject_type(&self) -> TypeInfo {
        self.subject
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyInfo> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Starts asserting on the selected properties.
    pub fn should(self) -> PropertyAssertions {
        PropertyAssertions::new(self.subject, self.properties)
    }

    fn retain(mut self, keep: impl Fn(&PropertyInfo) -> bool) -> Self {
        self.properties.retain(|prop| keep(prop));
        self
    }
}

impl<'a> IntoIterator for &'a PropertySelector {
    type Item = &'a PropertyInfo;
    type IntoIter = std::slice::Iter<'a, PropertyInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PropertySelector {
    type Item = PropertyInfo;
    type IntoIter = std::vec::IntoIter<PropertyInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}
