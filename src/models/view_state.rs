use serde::Serialize;

/// Display state of a list or detail view. Exactly one applies at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ViewState {
    /// A fetch is in flight and there is nothing to show yet.
    Loading,
    /// Loading finished with nothing to show.
    Empty,
    /// There is content to show.
    Populated,
}

impl ViewState {
    pub fn of(is_loading: bool, has_content: bool) -> Self {
        if has_content {
            ViewState::Populated
        } else if is_loading {
            ViewState::Loading
        } else {
            ViewState::Empty
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, ViewState::Populated)
    }
}
