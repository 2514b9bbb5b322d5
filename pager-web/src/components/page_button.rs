use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct PageButtonProps {
    pub label: f::AttrValue,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub onclick: f::Callback<f::MouseEvent>,
}

/// A single `<li><a>` entry of the pager list.
#[f::function_component(PageButton)]
pub fn page_button(props: &PageButtonProps) -> f::Html {
    let class = props.class.clone();
    let onclick = props.onclick.clone();
    f::html! {
        <li class={class}>
            <a {onclick}>{ props.label.clone() }</a>
        </li>
    }
}
