//! Shared navigation trait for tab states with selectable rows.

/// Navigation trait for tab states that track a selected row.
///
/// Movement only adjusts the index; clamping to the visible row count
/// happens in each tab's `resolve_selection()` during render.
pub trait NavigableList {
    fn selected(&self) -> usize;
    fn selected_mut(&mut self) -> &mut usize;

    fn select_up(&mut self) {
        *self.selected_mut() = self.selected().saturating_sub(1);
    }

    fn select_down(&mut self) {
        *self.selected_mut() = self.selected().saturating_add(1);
    }

    fn page_up(&mut self, n: usize) {
        *self.selected_mut() = self.selected().saturating_sub(n);
    }

    fn page_down(&mut self, n: usize) {
        *self.selected_mut() = self.selected().saturating_add(n);
    }

    fn home(&mut self) {
        *self.selected_mut() = 0;
    }

    fn end(&mut self) {
        *self.selected_mut() = usize::MAX;
    }
}
