pub use yew::classes;
pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Classes, Html, MouseEvent, Properties, html};
pub use yew::use_state;

/// Base classes followed by whatever the host passed in.
#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[cfg(test)]
mod tests {
    use super::class_list;
    use yew::Classes;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("pagination-sm");
        let rendered = class_list(&["pagination"], &extra).to_string();
        assert_eq!(rendered, "pagination pagination-sm");
    }

    #[test]
    fn class_list_without_extra_keeps_base() {
        let rendered = class_list(&["pagination"], &Classes::new()).to_string();
        assert_eq!(rendered, "pagination");
    }
}
