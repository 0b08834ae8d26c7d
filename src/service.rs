use std::any::Any;
use std::sync::Arc;

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::error::NavigationError;
use crate::locator::PageLocator;
use crate::navigation::Navigation;
use crate::page::{Page, PageName};
use crate::params::{self, NavigationParams, Param, param};
use crate::strategy::{DoNothingStrategy, PopStrategy, PushStrategy};

/// Per-call configuration for the navigation verbs.
#[derive(Default)]
pub struct NavigateOptions {
    /// Ask the host to animate the transition.
    pub animated: bool,
    /// Parameters the destination pages will see; the bag is fully replaced.
    pub parameters: Vec<Param>,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Add one navigation parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Any + Send + Sync) -> Self {
        self.parameters.push(param(key, value));
        self
    }
}

/// Navigation-stack controller: validates operations against the current
/// stack depth, orchestrates multi-page pop/push/replace sequences against
/// the host surface, and renews a cancellation token on every transition.
///
/// One logical owner at a time: every operation takes `&mut self` and there
/// is no internal locking. Operations suspend exactly while the host performs
/// the visual transition.
pub struct NavigationService<N: Navigation> {
    navigation: N,
    locator: Arc<dyn PageLocator>,
    params: NavigationParams,
    pop_strategy: Arc<dyn PopStrategy>,
    push_strategy: Arc<dyn PushStrategy>,
    token: CancellationToken,
}

impl<N: Navigation> NavigationService<N> {
    /// Controller with the default no-op strategies.
    pub fn new(navigation: N, locator: Arc<dyn PageLocator>) -> Self {
        Self::with_strategies(
            navigation,
            locator,
            Arc::new(DoNothingStrategy),
            Arc::new(DoNothingStrategy),
        )
    }

    /// Controller with caller-supplied pre-pop and pre-push strategies.
    pub fn with_strategies(
        navigation: N,
        locator: Arc<dyn PageLocator>,
        pop_strategy: Arc<dyn PopStrategy>,
        push_strategy: Arc<dyn PushStrategy>,
    ) -> Self {
        Self {
            navigation,
            locator,
            params: NavigationParams::new(),
            pop_strategy,
            push_strategy,
            token: CancellationToken::new(),
        }
    }

    /// Read-only access to the host surface, mainly for inspecting the stacks.
    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    /// Parameter passed by the navigation that constructed the visible page.
    pub fn parameter<T: Any>(&self, key: &str) -> Result<&T, NavigationError> {
        self.params.get(key)
    }

    /// Like [`parameter`](Self::parameter), but a missing key is `Ok(None)`.
    pub fn try_parameter<T: Any>(&self, key: &str) -> Result<Option<&T>, NavigationError> {
        self.params.try_get(key)
    }

    /// Whether the most recent navigation carried a parameter under `key`.
    pub fn contains_parameter_key(&self, key: &str) -> Result<bool, NavigationError> {
        self.params.contains_key(key)
    }

    /// Token that is cancelled the next time the visible page is superseded.
    ///
    /// Background work keyed to the visible page should observe this token;
    /// cancellation is cooperative and never aborts the transition itself.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Name of the currently visible page, when its type is registered.
    pub fn peek_page_name(&self) -> Option<PageName> {
        self.navigation
            .stack()
            .last()
            .and_then(|page| self.locator.get_page_name(page))
    }

    /// Push the page registered under `name`. Stack depth grows by one.
    pub async fn go_to(
        &mut self,
        name: &PageName,
        options: NavigateOptions,
    ) -> Result<(), NavigationError> {
        self.params.replace(options.parameters)?;
        let page = self.locator.get_page(name, &self.params)?;
        self.push_strategy.before_push(&page).await?;
        debug!("navigating to {name}");
        self.renew_token();
        self.navigation.push(page, options.animated).await?;
        Ok(())
    }

    /// Push every named page; the last name ends up visible, the earlier ones
    /// sit below it in the order given.
    ///
    /// The final destination is pushed first so the host shows it
    /// immediately, then the remaining pages are inserted underneath it.
    /// All pages are constructed against the same freshly replaced
    /// parameter bag.
    pub async fn go_to_many(
        &mut self,
        names: &[PageName],
        options: NavigateOptions,
    ) -> Result<(), NavigationError> {
        let (destination, below) = names.split_last().ok_or(NavigationError::NoPagesGiven)?;
        if !below.is_empty() {
            self.ensure_no_modal()?;
        }
        self.params.replace(options.parameters)?;
        let top = self.locator.get_page(destination, &self.params)?;
        self.push_strategy.before_push(&top).await?;
        debug!("navigating to {destination} with {} pages underneath", below.len());
        self.renew_token();
        self.navigation.push(top.clone(), options.animated).await?;
        for name in below {
            let page = self.locator.get_page(name, &self.params)?;
            self.push_strategy.before_push(&page).await?;
            self.navigation.insert_page_before(page, &top)?;
        }
        Ok(())
    }

    /// Remove every page above the root. A single-page stack is a strict
    /// no-op: no strategy calls, and the cancellation token stays live.
    pub async fn pop_to_root(&mut self, animated: bool) -> Result<(), NavigationError> {
        let depth = self.navigation.stack().len();
        if depth <= 1 {
            return Ok(());
        }
        self.ensure_no_modal()?;
        debug!("popping {} pages back to root", depth - 1);
        self.remove_pages_below_top(depth - 2).await?;
        self.pop_top(animated).await
    }

    /// Remove `amount` pages from the top of the stack.
    ///
    /// Legal for `1 <= amount <= depth - 1`, plus the degenerate case of
    /// popping the only page on the stack.
    pub async fn pop(&mut self, amount: usize, animated: bool) -> Result<(), NavigationError> {
        let depth = self.navigation.stack().len();
        if amount == 0 {
            return Err(NavigationError::PopZero);
        }
        self.ensure_no_modal()?;
        let only_page_on_the_stack = amount == 1 && depth == 1;
        if amount > depth.saturating_sub(1) && !only_page_on_the_stack {
            return Err(NavigationError::PopTooMany {
                requested: amount,
                depth,
            });
        }
        debug!("popping {amount} pages");
        self.remove_pages_below_top(amount - 1).await?;
        self.pop_top(animated).await
    }

    /// Pop `amount` pages and put the named pages in their place.
    ///
    /// Validated like [`pop`](Self::pop), except that `amount == depth` is
    /// always legal: replacing the whole stack, root included, is a full
    /// replacement rather than an over-pop. The last name ends up visible.
    pub async fn pop_and_go_to(
        &mut self,
        amount: usize,
        names: &[PageName],
        options: NavigateOptions,
    ) -> Result<(), NavigationError> {
        let depth = self.navigation.stack().len();
        if names.is_empty() {
            return Err(NavigationError::NoPagesGiven);
        }
        if amount == 0 {
            return Err(NavigationError::PopZero);
        }
        self.ensure_no_modal()?;
        params::ensure_unique_keys(&options.parameters)?;
        let full_replacement = amount == depth;
        if amount > depth.saturating_sub(1) && !full_replacement {
            return Err(NavigationError::PopTooMany {
                requested: amount,
                depth,
            });
        }
        debug!("replacing top {amount} pages with {} new ones", names.len());
        self.remove_pages_below_top(amount - 1).await?;
        let top = self.visible_page()?;
        self.params.replace(options.parameters)?;
        for name in names {
            let page = self.locator.get_page(name, &self.params)?;
            self.push_strategy.before_push(&page).await?;
            self.navigation.insert_page_before(page, &top)?;
        }
        self.pop_top(options.animated).await
    }

    /// Replace the entire stack, root included, with the named pages.
    ///
    /// The new pages are inserted below the old root before anything at the
    /// bottom is removed, so exactly one page is on screen at every moment of
    /// the swap.
    pub async fn pop_all_and_go_to(
        &mut self,
        names: &[PageName],
        options: NavigateOptions,
    ) -> Result<(), NavigationError> {
        let depth = self.navigation.stack().len();
        if names.is_empty() {
            return Err(NavigationError::NoPagesGiven);
        }
        self.ensure_no_modal()?;
        params::ensure_unique_keys(&options.parameters)?;
        debug!("replacing all {depth} pages with {} new ones", names.len());
        self.remove_pages_below_top(depth.saturating_sub(2)).await?;
        let root = self.visible_root()?;
        self.params.replace(options.parameters)?;
        for name in names {
            let page = self.locator.get_page(name, &self.params)?;
            self.push_strategy.before_push(&page).await?;
            self.navigation.insert_page_before(page, &root)?;
        }
        if depth > 1 {
            // At depth 1 the root is the page the terminal pop removes.
            self.pop_strategy.before_pop(&root).await?;
            self.navigation.remove_page(&root)?;
        }
        self.pop_top(options.animated).await
    }

    /// Pop-hook and remove `count` pages directly below the visible top,
    /// most recently pushed first. The visible page never changes here.
    async fn remove_pages_below_top(&mut self, count: usize) -> Result<(), NavigationError> {
        for _ in 0..count {
            let stack = self.navigation.stack();
            let Some(page) = stack.len().checked_sub(2).map(|i| stack[i].clone()) else {
                break;
            };
            self.pop_strategy.before_pop(&page).await?;
            self.navigation.remove_page(&page)?;
        }
        Ok(())
    }

    /// Pop-hook the visible page, renew the token, and ask the host to pop.
    async fn pop_top(&mut self, animated: bool) -> Result<(), NavigationError> {
        let top = self.visible_page()?;
        self.pop_strategy.before_pop(&top).await?;
        self.renew_token();
        self.navigation.pop(animated).await?;
        Ok(())
    }

    fn visible_page(&self) -> Result<Page, NavigationError> {
        self.navigation
            .stack()
            .last()
            .cloned()
            .ok_or_else(|| NavigationError::Host(anyhow::anyhow!("host navigation stack is empty")))
    }

    fn visible_root(&self) -> Result<Page, NavigationError> {
        self.navigation
            .stack()
            .first()
            .cloned()
            .ok_or_else(|| NavigationError::Host(anyhow::anyhow!("host navigation stack is empty")))
    }

    fn ensure_no_modal(&self) -> Result<(), NavigationError> {
        if self.navigation.modal_stack().is_empty() {
            Ok(())
        } else {
            Err(NavigationError::ModalStackNotEmpty)
        }
    }

    /// Cancel the token handed out for the page being superseded and install
    /// a fresh one. Runs exactly once per stack-mutating operation, right
    /// before the terminal host call; no-op operations skip it.
    fn renew_token(&mut self) {
        self.token.cancel();
        self.token = CancellationToken::new();
    }
}
