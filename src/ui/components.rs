/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResponseAreaProps {
    pub markup: AttrValue,
}

/// Renders agent markup as-is. Answers are not sanitized.
#[function_component(ResponseArea)]
pub fn response_area(props: &ResponseAreaProps) -> Html {
    html! {
        <div id="response" class="response-area">
            {Html::from_html_unchecked(props.markup.clone())}
        </div>
    }
}
