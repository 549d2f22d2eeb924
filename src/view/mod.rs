pub mod controller;

pub use controller::ViewController;

/// What a page renders. `Ready` holds the fetched payload, which may be
/// empty; `Error` renders an inert placeholder, never a crash.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, ViewState::Ready(_) | ViewState::Error(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}
