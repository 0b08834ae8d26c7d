use async_trait::async_trait;

use crate::page::Page;

/// The host surface the controller drives.
///
/// Implementations map these calls onto a GUI toolkit's live page stack; the
/// async methods may suspend for as long as the host animates the transition.
/// The controller treats this trait as its only way to observe or mutate
/// what is on screen, and it relies on `stack()` never being empty once a
/// root page exists.
///
/// Failures are opaque to the controller: they are wrapped into
/// [`NavigationError::Host`](crate::NavigationError::Host) and handed to the
/// caller unchanged, with no retry and no rollback of earlier steps.
#[async_trait]
pub trait Navigation: Send {
    /// Push `page` on top of the navigation stack, making it visible.
    async fn push(&mut self, page: Page, animated: bool) -> anyhow::Result<()>;

    /// Pop the visible page off the stack, returning it.
    async fn pop(&mut self, animated: bool) -> anyhow::Result<Page>;

    /// Pop every page above the root in one host-driven transition.
    ///
    /// The controller removes intermediate pages itself so the pop strategy
    /// runs once per page; this primitive is part of the host surface for
    /// implementations and callers that bypass the controller.
    async fn pop_to_root(&mut self, animated: bool) -> anyhow::Result<()>;

    /// Remove `page` from anywhere in the stack without a visual transition.
    fn remove_page(&mut self, page: &Page) -> anyhow::Result<()>;

    /// Insert `page` directly below `before`.
    fn insert_page_before(&mut self, page: Page, before: &Page) -> anyhow::Result<()>;

    /// The navigation stack, root first, visible page last.
    fn stack(&self) -> &[Page];

    /// Pages presented modally, outside the navigation stack. While this is
    /// non-empty the controller refuses to mutate the navigation stack.
    fn modal_stack(&self) -> &[Page];
}
