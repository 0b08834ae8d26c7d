#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use better_navigation::{
    Navigation, NavigationError, NavigationService, Page, PageRegistry, PopStrategy, PushStrategy,
};

/// In-memory stand-in for a GUI toolkit's page stack.
///
/// Beyond the two stacks it records the smallest depth the navigation stack
/// ever reached, so tests can assert that full-stack replacement never left
/// the screen empty.
pub struct FakeNavigation {
    pub stack: Vec<Page>,
    pub modal: Vec<Page>,
    pub min_depth_seen: usize,
    pub fail_next_push: bool,
}

impl FakeNavigation {
    /// Host with a single root page on the stack, like a freshly created
    /// navigation page.
    pub fn with_root() -> Self {
        let stack = vec![Page::new(MainPage)];
        Self {
            min_depth_seen: stack.len(),
            stack,
            modal: Vec::new(),
            fail_next_push: false,
        }
    }

    pub fn present_modal(&mut self) {
        self.modal.push(Page::new(ModalPage));
    }

    fn note_depth(&mut self) {
        self.min_depth_seen = self.min_depth_seen.min(self.stack.len());
    }
}

#[async_trait]
impl Navigation for FakeNavigation {
    async fn push(&mut self, page: Page, _animated: bool) -> anyhow::Result<()> {
        if self.fail_next_push {
            self.fail_next_push = false;
            anyhow::bail!("push rejected by host");
        }
        self.stack.push(page);
        self.note_depth();
        Ok(())
    }

    async fn pop(&mut self, _animated: bool) -> anyhow::Result<Page> {
        let page = self
            .stack
            .pop()
            .ok_or_else(|| anyhow::anyhow!("navigation stack is empty"))?;
        self.note_depth();
        Ok(page)
    }

    async fn pop_to_root(&mut self, _animated: bool) -> anyhow::Result<()> {
        self.stack.truncate(1);
        self.note_depth();
        Ok(())
    }

    fn remove_page(&mut self, page: &Page) -> anyhow::Result<()> {
        let index = self
            .stack
            .iter()
            .position(|candidate| candidate.same(page))
            .ok_or_else(|| anyhow::anyhow!("page is not on the navigation stack"))?;
        self.stack.remove(index);
        self.note_depth();
        Ok(())
    }

    fn insert_page_before(&mut self, page: Page, before: &Page) -> anyhow::Result<()> {
        let index = self
            .stack
            .iter()
            .position(|candidate| candidate.same(before))
            .ok_or_else(|| anyhow::anyhow!("page is not on the navigation stack"))?;
        self.stack.insert(index, page);
        self.note_depth();
        Ok(())
    }

    fn stack(&self) -> &[Page] {
        &self.stack
    }

    fn modal_stack(&self) -> &[Page] {
        &self.modal
    }
}

pub struct MainPage;
pub struct LoginPage;
pub struct ListViewPage;
pub struct MainMenuPage;
pub struct ModalPage;

/// Page that reads its greeting parameter while it is constructed.
pub struct GreetingPage {
    pub greeting: String,
}

/// Second parameter-reading page type, for multi-page replacements.
pub struct FarewellPage {
    pub greeting: String,
}

pub fn registry() -> Arc<PageRegistry> {
    Arc::new(
        PageRegistry::builder()
            .register("MainPage", |_| MainPage)
            .register("LoginPage", |_| LoginPage)
            .register("ListViewPage", |_| ListViewPage)
            .register("MainMenuPage", |_| MainMenuPage)
            .register("GreetingPage", |params| GreetingPage {
                greeting: read_greeting(params),
            })
            .register("FarewellPage", |params| FarewellPage {
                greeting: read_greeting(params),
            })
            .build(),
    )
}

fn read_greeting(params: &better_navigation::NavigationParams) -> String {
    params
        .try_get::<String>("greeting")
        .ok()
        .flatten()
        .cloned()
        .unwrap_or_default()
}

/// Human-readable label for a test page, for recording hook order.
pub fn label(page: &Page) -> &'static str {
    if page.downcast_ref::<MainPage>().is_some() {
        "MainPage"
    } else if page.downcast_ref::<LoginPage>().is_some() {
        "LoginPage"
    } else if page.downcast_ref::<ListViewPage>().is_some() {
        "ListViewPage"
    } else if page.downcast_ref::<MainMenuPage>().is_some() {
        "MainMenuPage"
    } else if page.downcast_ref::<GreetingPage>().is_some() {
        "GreetingPage"
    } else if page.downcast_ref::<FarewellPage>().is_some() {
        "FarewellPage"
    } else {
        "Unknown"
    }
}

/// Strategy that records every hook invocation in order.
#[derive(Clone, Default)]
pub struct RecordingStrategy {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn pop_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| event.starts_with("pop:"))
            .count()
    }

    fn record(&self, action: &str, page: &Page) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{action}:{}", label(page)));
    }
}

#[async_trait]
impl PushStrategy for RecordingStrategy {
    async fn before_push(&self, page_to_push: &Page) -> Result<(), NavigationError> {
        self.record("push", page_to_push);
        Ok(())
    }
}

#[async_trait]
impl PopStrategy for RecordingStrategy {
    async fn before_pop(&self, page_to_pop: &Page) -> Result<(), NavigationError> {
        self.record("pop", page_to_pop);
        Ok(())
    }
}

/// Strategy that fails every hook, for error-propagation tests.
pub struct FailingStrategy;

#[async_trait]
impl PushStrategy for FailingStrategy {
    async fn before_push(&self, _page_to_push: &Page) -> Result<(), NavigationError> {
        Err(NavigationError::Strategy(anyhow::anyhow!(
            "push strategy refused"
        )))
    }
}

#[async_trait]
impl PopStrategy for FailingStrategy {
    async fn before_pop(&self, _page_to_pop: &Page) -> Result<(), NavigationError> {
        Err(NavigationError::Strategy(anyhow::anyhow!(
            "pop strategy refused"
        )))
    }
}

/// Service over a fresh fake host with a root page and no-op strategies.
pub fn service() -> NavigationService<FakeNavigation> {
    init_logging();
    NavigationService::new(FakeNavigation::with_root(), registry())
}

/// Service wired to one [`RecordingStrategy`] on both the push and pop side.
pub fn recording_service() -> (NavigationService<FakeNavigation>, RecordingStrategy) {
    init_logging();
    let strategy = RecordingStrategy::new();
    let service = NavigationService::with_strategies(
        FakeNavigation::with_root(),
        registry(),
        Arc::new(strategy.clone()),
        Arc::new(strategy.clone()),
    );
    (service, strategy)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Type labels of the fake host's stack, root first.
pub fn stack_labels(service: &NavigationService<FakeNavigation>) -> Vec<&'static str> {
    service.navigation().stack().iter().map(label).collect()
}
