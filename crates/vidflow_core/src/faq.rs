/// Exclusive-open disclosure list: at most one item is open at a time.
///
/// Not persisted; every page load starts with all items closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Clicking a closed item's header closes all others and opens it;
    /// clicking the open item's header closes it, leaving all closed.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }
}
