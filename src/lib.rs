//! A host-agnostic navigation-stack controller for page-based UIs.
//!
//! The [`NavigationService`] tracks a stack of logical pages, resolves names
//! to concrete pages through a [`PageRegistry`], carries typed parameters to
//! the page being navigated to, runs pre-push/pre-pop strategies, and renews
//! a cancellation token whenever the visible page is superseded. The actual
//! rendering surface is abstracted behind the [`Navigation`] trait, so the
//! controller works against anything that can push, pop and insert pages.

pub mod error;
pub mod locator;
pub mod navigation;
pub mod page;
pub mod params;
pub mod service;
pub mod strategy;

pub use error::NavigationError;
pub use locator::{PageLocator, PageRegistry, PageRegistryBuilder};
pub use navigation::Navigation;
pub use page::{Page, PageName};
pub use params::{NavigationParams, Param, param};
pub use service::{NavigateOptions, NavigationService};
pub use strategy::{DoNothingStrategy, PopStrategy, PushStrategy};
pub use tokio_util::sync::CancellationToken;
