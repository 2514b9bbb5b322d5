//! Tree description of the navigation list, independent of any renderer.
use serde::{Deserialize, Serialize};

use crate::constants::{ELLIPSIS, FIRST_PAGE};
use crate::pager::{Navigation, Pager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    FirstPage,
    PrevBlock,
    Page,
    NextBlock,
}

impl ItemKind {
    const fn base_class(self) -> Option<&'static str> {
        match self {
            Self::FirstPage => Some("btn-first-page"),
            Self::Page => Some("btn-numbered-page"),
            Self::PrevBlock | Self::NextBlock => None,
        }
    }
}

/// One clickable entry in the pager list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerItem {
    pub kind: ItemKind,
    pub label: String,
    pub active: bool,
    pub disabled: bool,
    pub action: Navigation,
}

impl PagerItem {
    /// Class tokens in render order: base class, then `active`, then `disabled`.
    #[must_use]
    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(3);
        classes.extend(self.kind.base_class());
        if self.active {
            classes.push("active");
        }
        if self.disabled {
            classes.push("disabled");
        }
        classes
    }

    #[must_use]
    pub fn css_class(&self) -> String {
        self.css_classes().join(" ")
    }

    /// Page number for numbered items.
    #[must_use]
    pub const fn page(&self) -> Option<u32> {
        match self.action {
            Navigation::Page(page) => Some(page),
            _ => None,
        }
    }
}

pub(crate) fn build(pager: &Pager) -> Vec<PagerItem> {
    let range = pager.visible_range();
    let mut items = Vec::with_capacity(range.len() as usize + 3);

    items.push(PagerItem {
        kind: ItemKind::FirstPage,
        label: FIRST_PAGE.to_string(),
        active: pager.current() == FIRST_PAGE,
        disabled: pager.is_first_page_disabled(),
        action: Navigation::FirstPage,
    });

    if !pager.is_prev_block_hidden() {
        items.push(ellipsis(ItemKind::PrevBlock, Navigation::PrevBlock));
    }

    items.extend(
        range
            .pages()
            .filter(|&page| page != FIRST_PAGE)
            .map(|page| PagerItem {
                kind: ItemKind::Page,
                label: page.to_string(),
                active: pager.current() == page,
                disabled: false,
                action: Navigation::Page(page),
            }),
    );

    if !pager.is_next_block_hidden() {
        items.push(ellipsis(ItemKind::NextBlock, Navigation::NextBlock));
    }

    items
}

fn ellipsis(kind: ItemKind, action: Navigation) -> PagerItem {
    PagerItem {
        kind,
        label: ELLIPSIS.to_string(),
        active: false,
        disabled: false,
        action,
    }
}
