//! Pager Core
//!
//! Platform-agnostic block pagination arithmetic for the Pager widget.
//! Given the current page, the page count and the number of visible page
//! slots, it resolves which numbered buttons to draw, which block-jump
//! controls to show, and which page each click should dispatch.

pub mod blocks;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod layout;
pub mod pager;
pub mod range;

pub use blocks::{Blocks, calc_blocks};
pub use constants::{BASE_SHIFT, ELLIPSIS, FIRST_PAGE};
pub use dispatch::Dispatcher;
pub use error::{PagerError, validate_inputs};
pub use layout::{ItemKind, PagerItem};
pub use pager::{Navigation, Pager, PagerInput};
pub use range::{VisibleRange, visible_range};
