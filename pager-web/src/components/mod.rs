pub mod demo;
pub mod foundation;
pub mod page_button;
pub mod pager;

pub use demo::{PagerDemo, PagerDemoProps};
pub use page_button::{PageButton, PageButtonProps};
pub use pager::{Pager, PagerProps};
