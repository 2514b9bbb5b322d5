//! Stateless block pager.
//!
//! ```text
//! 1 | ... | 6 | 7 | 8 | 9 | 10 | ...
//! ```
//!
//! The host owns the current page: `on_page_changed` reports the page a
//! click asks for, and the host re-renders with the new `current`.
use pager_core::{Dispatcher, Navigation, Pager as PagerState, PagerItem};

use crate::components::foundation as f;
use crate::components::page_button::PageButton;

#[derive(f::Properties, PartialEq, Clone)]
pub struct PagerProps {
    pub current: u32,
    pub total: u32,
    pub visible_pages: u32,
    #[prop_or_default]
    pub on_page_changed: Option<f::Callback<u32>>,
    /// Accepted for hosts that wire page-size pickers; the pager never emits it.
    #[prop_or_default]
    pub on_page_size_changed: Option<f::Callback<u32>>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Pager)]
pub fn pager(props: &PagerProps) -> f::Html {
    let state = match PagerState::new(props.current, props.total, props.visible_pages) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Pager props rejected: {err}");
            return f::Html::default();
        }
    };

    let dispatcher = Dispatcher::new(state, props.on_page_changed.clone().map(emitter));
    let class = f::class_list(&["pagination"], &props.class);

    f::html! {
        <nav>
            <ul class={class}>
                { for state.layout().into_iter().map(|item| render_item(&dispatcher, item)) }
            </ul>
        </nav>
    }
}

fn emitter(callback: f::Callback<u32>) -> impl Fn(u32) + Clone + 'static {
    move |page| callback.emit(page)
}

fn render_item<F>(dispatcher: &Dispatcher<F>, item: PagerItem) -> f::Html
where
    F: Fn(u32) + Clone + 'static,
{
    let key = item_key(item.action);
    let onclick = {
        let dispatcher = dispatcher.clone();
        let action = item.action;
        f::Callback::from(move |_: f::MouseEvent| {
            if let Err(err) = dispatcher.dispatch(action) {
                log::warn!("Pager ignored click: {err}");
            }
        })
    };
    let class: f::Classes = item.css_classes().into_iter().collect();
    f::html! {
        <PageButton key={key} label={item.label} class={class} onclick={onclick} />
    }
}

fn item_key(action: Navigation) -> String {
    match action {
        Navigation::FirstPage => "first".to_string(),
        Navigation::PrevBlock => "prev-block".to_string(),
        Navigation::NextBlock => "next-block".to_string(),
        Navigation::Page(page) => format!("page-{page}"),
    }
}
