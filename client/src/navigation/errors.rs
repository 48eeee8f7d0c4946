//! Errors raised by the navigation router.
//!
//! Menu computation never fails; only explicit screen transitions can be
//! refused, when the target is not part of the mounted screen tree.

use super::router::RootTree;
use super::screens::ScreenId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("screen {screen:?} is not registered in the {tree:?} tree")]
    UnknownScreen { screen: ScreenId, tree: RootTree },
    #[error("screen {0:?} needs parameters to be opened")]
    MissingParameters(ScreenId),
    #[error("no session is mounted")]
    NotAuthenticated,
}

pub type NavigationResult<T> = Result<T, NavigationError>;
