use crate::theme::ButtonTheme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub theme: ButtonTheme,
    #[prop_or_default]
    pub children: Children,
    pub onclick: Callback<web_sys::MouseEvent>,
}

#[function_component(Button)]
pub fn button(props: &Props) -> Html {
    let Props {
        theme,
        children,
        onclick,
    } = props;

    html! {
        <button class="button" style={theme.style()} onclick={onclick.clone()}>
            {for children.iter()}
        </button>
    }
}
