use crate::cpi::{ContentPackage, IntegrationArtifact};

// Dataset rows shown in a pane, below its title
pub const DEFAULT_LIST_HEIGHT: usize = 20;

/// Display adapter over one record.
pub trait ListItem {
    /// Text shown in the list and used for filtering.
    fn label(&self) -> &str;
}

impl ListItem for ContentPackage {
    fn label(&self) -> &str {
        &self.name
    }
}

impl ListItem for IntegrationArtifact {
    fn label(&self) -> &str {
        &self.name
    }
}

/// Scrollable, selectable list with wrap-around navigation.
#[derive(Clone, Debug)]
pub struct ListWidget<T> {
    items: Vec<T>,
    selected: usize,
    // index of the first visible row
    offset: usize,
    height: usize,
}

impl<T> Default for ListWidget<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_HEIGHT)
    }
}

impl<T> ListWidget<T> {
    pub fn new(height: usize) -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            offset: 0,
            height: height.max(1),
        }
    }

    /// Replaces the items. The visible window always goes back to the top;
    /// the selection is kept (clamped) unless `reset_selection` is set.
    pub fn set_items(&mut self, items: Vec<T>, reset_selection: bool) {
        self.items = items;
        self.offset = 0;
        if reset_selection || self.items.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.items.len() - 1);
        }
        self.keep_selection_visible();
    }

    /// Drops all items and returns to the initial state.
    pub fn reset(&mut self) {
        self.items.clear();
        self.selected = 0;
        self.offset = 0;
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
        self.keep_selection_visible();
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.items.len() - 1
        } else {
            self.selected - 1
        };
        self.keep_selection_visible();
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.selected)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rows inside the current window, with their absolute index.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.height)
    }

    fn keep_selection_visible(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.height {
            self.offset = self.selected + 1 - self.height;
        }
    }
}
