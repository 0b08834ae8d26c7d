use std::any::Any;
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// Opaque identifier naming a logical screen.
///
/// Names are compared case-sensitively by their exact string form. Each name
/// maps to exactly one page type in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageName(String);

impl PageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for PageName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a host-rendered page.
///
/// The controller never looks inside a page. It constructs handles through
/// the registry, compares them by identity and passes them to the host
/// surface; the concrete value is whatever view object the host renders.
/// Cloning a handle clones the reference, not the page.
#[derive(Clone)]
pub struct Page {
    inner: Arc<dyn Any + Send + Sync>,
}

impl Page {
    /// Wrap a concrete page value into an opaque handle.
    pub fn new<T: Any + Send + Sync>(page: T) -> Self {
        Self {
            inner: Arc::new(page),
        }
    }

    /// Borrow the concrete page value, if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// `TypeId` of the concrete page value. Reverse name lookup matches on this.
    pub fn type_id(&self) -> TypeId {
        Any::type_id(self.inner.as_ref())
    }

    /// Identity comparison: true when both handles refer to the same page.
    pub fn same(&self, other: &Page) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Page {}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("type_id", &self.type_id())
            .finish()
    }
}
