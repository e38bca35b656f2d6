use crate::suggestion::{RenderedOption, SuggestionList};

/// Suggestion list shown under a field
///
/// Becomes visible when options are appended and hides itself when cleared.
#[derive(Debug, Clone, Default)]
pub struct OptionList {
    id: String,
    options: Vec<RenderedOption>,
    selected_index: usize,
    visible: bool,
}

impl OptionList {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[RenderedOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.options.is_empty()
    }

    /// Hide without discarding the options
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Show again, if there is anything to show
    pub fn show(&mut self) {
        self.visible = !self.options.is_empty();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&RenderedOption> {
        if self.is_visible() {
            self.options.get(self.selected_index)
        } else {
            None
        }
    }

    /// Move selection down, wrapping to the top
    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.options.len();
        }
    }

    /// Move selection up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.options.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }
}

impl SuggestionList for OptionList {
    fn clear(&mut self) {
        self.options.clear();
        self.selected_index = 0;
        self.visible = false;
    }

    fn append(&mut self, option: RenderedOption) {
        self.options.push(option);
        self.visible = true;
    }
}

#[cfg(test)]
#[path = "option_list_tests.rs"]
mod option_list_tests;
