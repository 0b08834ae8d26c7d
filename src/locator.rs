use std::any::{Any, TypeId};

use crate::error::NavigationError;
use crate::page::{Page, PageName};
use crate::params::NavigationParams;

/// Resolves page names to live pages and back.
pub trait PageLocator: Send + Sync {
    /// Construct the page registered under `name`.
    ///
    /// The parameter bag for the navigation in progress is already populated
    /// when this is called, so the new page can read its own parameters while
    /// it is being built.
    fn get_page(
        &self,
        name: &PageName,
        params: &NavigationParams,
    ) -> Result<Page, NavigationError>;

    /// Name of the entry whose registered type matches `page`, if any.
    fn get_page_name(&self, page: &Page) -> Option<PageName>;
}

type PageFactory = Box<dyn Fn(&NavigationParams) -> Page + Send + Sync>;

struct Entry {
    name: PageName,
    type_id: TypeId,
    factory: PageFactory,
}

/// Name-to-factory table, fixed once built.
///
/// Reverse lookup scans entries in registration order and returns the first
/// name whose registered type matches the page. Two names mapping to the same
/// page type make reverse lookup ambiguous; the registry does not guard
/// against it, the first registration wins.
pub struct PageRegistry {
    entries: Vec<Entry>,
}

impl PageRegistry {
    pub fn builder() -> PageRegistryBuilder {
        PageRegistryBuilder {
            entries: Vec::new(),
        }
    }
}

impl PageLocator for PageRegistry {
    fn get_page(
        &self,
        name: &PageName,
        params: &NavigationParams,
    ) -> Result<Page, NavigationError> {
        self.entries
            .iter()
            .find(|entry| entry.name == *name)
            .map(|entry| (entry.factory)(params))
            .ok_or_else(|| NavigationError::UnknownPage { name: name.clone() })
    }

    fn get_page_name(&self, page: &Page) -> Option<PageName> {
        let type_id = page.type_id();
        self.entries
            .iter()
            .find(|entry| entry.type_id == type_id)
            .map(|entry| entry.name.clone())
    }
}

/// Populates a [`PageRegistry`] at startup.
pub struct PageRegistryBuilder {
    entries: Vec<Entry>,
}

impl PageRegistryBuilder {
    /// Register `name` as producing pages of type `T`.
    ///
    /// The factory runs on every navigation that targets `name` and receives
    /// the freshly replaced parameter bag.
    pub fn register<T, F>(mut self, name: impl Into<PageName>, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&NavigationParams) -> T + Send + Sync + 'static,
    {
        self.entries.push(Entry {
            name: name.into(),
            type_id: TypeId::of::<T>(),
            factory: Box::new(move |params| Page::new(factory(params))),
        });
        self
    }

    pub fn build(self) -> PageRegistry {
        PageRegistry {
            entries: self.entries,
        }
    }
}
