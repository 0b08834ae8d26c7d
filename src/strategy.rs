use async_trait::async_trait;

use crate::error::NavigationError;
use crate::page::Page;

/// Invoked every time before a page is pushed on top of the navigation stack.
///
/// Errors propagate to the caller and abort the navigation; the controller
/// neither retries nor suppresses them.
#[async_trait]
pub trait PushStrategy: Send + Sync {
    async fn before_push(&self, page_to_push: &Page) -> Result<(), NavigationError>;
}

/// Invoked every time before a page is taken off the navigation stack.
#[async_trait]
pub trait PopStrategy: Send + Sync {
    async fn before_pop(&self, page_to_pop: &Page) -> Result<(), NavigationError>;
}

/// The default strategy: does nothing on either side of a transition.
pub struct DoNothingStrategy;

#[async_trait]
impl PushStrategy for DoNothingStrategy {
    async fn before_push(&self, _page_to_push: &Page) -> Result<(), NavigationError> {
        Ok(())
    }
}

#[async_trait]
impl PopStrategy for DoNothingStrategy {
    async fn before_pop(&self, _page_to_pop: &Page) -> Result<(), NavigationError> {
        Ok(())
    }
}
