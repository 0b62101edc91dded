/// Popup UI for the YT Ask extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::browser::BrowserTabs;
use crate::client::AgentClient;
use crate::config::AgentConfig;
use crate::interaction::{ask_about_active_video, ResponseView};
use crate::ui::components::ResponseArea;

#[function_component(App)]
pub fn app() -> Html {
    let question_ref = use_node_ref();
    let view = use_state(ResponseView::default);

    // Ask handler. Clicks are not serialized: every click starts its own
    // request and whichever finishes last owns the response area.
    let on_ask = {
        let question_ref = question_ref.clone();
        let view = view.clone();

        Callback::from(move |_: MouseEvent| {
            let question = question_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            let view = view.clone();
            view.set(ResponseView::Thinking);

            spawn_local(async move {
                let agent = AgentClient::new(AgentConfig::default());
                let result = ask_about_active_video(&question, &BrowserTabs, &agent).await;
                view.set(result);
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Ask this video"}</h1>

            <div class="flex-column-gap">
                <input
                    id="question"
                    class="pf-v5-c-form-control"
                    type="text"
                    placeholder="What is this video about?"
                    ref={question_ref}
                />
                <Button onclick={on_ask} variant={ButtonVariant::Primary} block={true}>
                    {"Ask"}
                </Button>
            </div>

            <ResponseArea markup={AttrValue::from(view.markup())} />

            <p class="footer-popup">
                {"YT Ask v0.1.0"}
            </p>
        </div>
    }
}
