use crate::page::PageName;

/// Everything that can go wrong while driving the navigation stack.
///
/// Validation variants are raised synchronously, before the host surface is
/// touched, so a failed call leaves both stacks unchanged. `Strategy` and
/// `Host` wrap collaborator failures and propagate them unchanged; the
/// controller never retries them, and a failure in the middle of a multi-page
/// sequence leaves the stack in whatever state the host produced.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The requested page name is not present in the registry.
    #[error("page {name} is not registered")]
    UnknownPage {
        /// The name that missed.
        name: PageName,
    },

    /// The requested key is not present in the navigation parameters.
    #[error("parameter key {key:?} was not found in navigation parameters")]
    KeyNotFound {
        /// The key that missed.
        key: String,
    },

    /// A parameter exists under this key but holds a different type.
    #[error("parameter key {key:?} is not a value of type {expected}")]
    InvalidCast {
        /// The key that was looked up.
        key: String,
        /// The type the caller asked for.
        expected: &'static str,
    },

    /// An empty key was passed to a key-based lookup.
    #[error("parameter key must not be empty")]
    EmptyKey,

    /// The same key appeared twice in one set of navigation parameters.
    #[error("parameter key {key:?} was given more than once")]
    DuplicateParameterKey {
        /// The repeated key.
        key: String,
    },

    /// A pop was asked to remove zero pages.
    #[error("you want to remove 0 pages from the navigation stack")]
    PopZero,

    /// A pop was asked to remove more pages than the stack can give up.
    #[error(
        "you want to remove too many pages from the navigation stack ({requested} requested, depth {depth})"
    )]
    PopTooMany {
        /// How many pages the caller asked to remove.
        requested: usize,
        /// Stack depth at the time of the call.
        depth: usize,
    },

    /// A stack-mutating operation was attempted while a modal page is presented.
    #[error("cannot mutate the navigation stack while the modal stack is not empty")]
    ModalStackNotEmpty,

    /// A multi-page operation was given an empty list of destinations.
    #[error("no destination pages were given")]
    NoPagesGiven,

    /// A push or pop strategy failed.
    #[error("navigation strategy failed")]
    Strategy(#[source] anyhow::Error),

    /// The host navigation surface rejected a push, pop, removal or insert.
    #[error("host navigation surface failed")]
    Host(#[from] anyhow::Error),
}
