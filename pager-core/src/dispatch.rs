//! Event dispatcher forwarding selected pages to an optional host callback.
use crate::error::PagerError;
use crate::pager::{Navigation, Pager};

/// Wires a [`Pager`] to the host's page-changed callback.
///
/// A missing callback turns every dispatch into a silent no-op.
#[derive(Clone)]
pub struct Dispatcher<F> {
    pager: Pager,
    on_page_changed: Option<F>,
}

impl<F> Dispatcher<F>
where
    F: Fn(u32),
{
    #[must_use]
    pub const fn new(pager: Pager, on_page_changed: Option<F>) -> Self {
        Self {
            pager,
            on_page_changed,
        }
    }

    #[must_use]
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    #[must_use]
    pub const fn has_callback(&self) -> bool {
        self.on_page_changed.is_some()
    }

    /// Jump to page 1 unless already there.
    pub fn on_first_page(&self) -> Option<u32> {
        let page = self.pager.first_page_target()?;
        self.emit(page);
        Some(page)
    }

    pub fn on_prev_block(&self) -> u32 {
        let page = self.pager.prev_block_target();
        self.emit(page);
        page
    }

    pub fn on_next_block(&self) -> u32 {
        let page = self.pager.next_block_target();
        self.emit(page);
        page
    }

    /// Forward a click on a numbered button.
    ///
    /// # Errors
    /// Returns [`PagerError::PageNotRendered`] if `page` has no numbered button.
    pub fn on_page_selected(&self, page: u32) -> Result<u32, PagerError> {
        if !self.pager.renders_page(page) {
            return Err(PagerError::PageNotRendered { page });
        }
        self.emit(page);
        Ok(page)
    }

    /// Run the handler for `nav`, returning the page handed to the callback.
    ///
    /// # Errors
    /// Returns [`PagerError::PageNotRendered`] for a numbered page that is not drawn.
    pub fn dispatch(&self, nav: Navigation) -> Result<Option<u32>, PagerError> {
        match nav {
            Navigation::FirstPage => Ok(self.on_first_page()),
            Navigation::PrevBlock => Ok(Some(self.on_prev_block())),
            Navigation::NextBlock => Ok(Some(self.on_next_block())),
            Navigation::Page(page) => self.on_page_selected(page).map(Some),
        }
    }

    fn emit(&self, page: u32) {
        match &self.on_page_changed {
            Some(callback) => {
                log::debug!("pager: page {} -> {page}", self.pager.current());
                callback(page);
            }
            None => log::debug!("pager: no page-changed callback, dropping page {page}"),
        }
    }
}
