use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Booking call to action. Not wired to any booking flow yet.
#[function_component(BookButton)]
pub fn book_button(props: &BookButtonProps) -> Html {
    html! {
        <button type="button" class={classes!("book-button", props.class.clone())}>
            { props.label.clone() }
            { for props.children.iter() }
        </button>
    }
}
