use crate::components::foundation as f;
use crate::components::pager::Pager;

const DEMO_INITIAL_PAGE: u32 = 3;
const DEMO_TOTAL: u32 = 20;
const DEMO_VISIBLE_PAGES: u32 = 5;

#[derive(f::Properties, PartialEq, Clone)]
pub struct PagerDemoProps {
    #[prop_or(DEMO_INITIAL_PAGE)]
    pub initial_page: u32,
    #[prop_or(DEMO_TOTAL)]
    pub total: u32,
    #[prop_or(DEMO_VISIBLE_PAGES)]
    pub visible_pages: u32,
}

impl Default for PagerDemoProps {
    fn default() -> Self {
        Self {
            initial_page: DEMO_INITIAL_PAGE,
            total: DEMO_TOTAL,
            visible_pages: DEMO_VISIBLE_PAGES,
        }
    }
}

/// Host that owns the current page and feeds clicks back into the pager.
#[f::function_component(PagerDemo)]
pub fn pager_demo(props: &PagerDemoProps) -> f::Html {
    let current = f::use_state(|| props.initial_page);
    let on_page_changed = {
        let current = current.clone();
        f::Callback::from(move |page: u32| current.set(page))
    };
    let status = format!("Page {} of {}", *current, props.total);
    f::html! {
        <section class="pager-demo">
            <p class="pager-demo-status" aria-live="polite">{ status }</p>
            <Pager
                current={*current}
                total={props.total}
                visible_pages={props.visible_pages}
                on_page_changed={on_page_changed}
            />
        </section>
    }
}
