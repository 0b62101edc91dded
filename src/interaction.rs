/// The popup's ask interaction: active tab → video ID → agent → markup

use crate::ask::{AskRequest, AskResponse};
use crate::error::PopupError;
use crate::format::format_answer;
use crate::video::extract_video_id;

/// Source of the active tab URL
#[allow(async_fn_in_trait)]
pub trait TabSource {
    async fn active_tab_url(&self) -> Result<String, PopupError>;
}

/// Something that answers questions about a video
#[allow(async_fn_in_trait)]
pub trait Agent {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, PopupError>;
}

/// What the response area currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseView {
    #[default]
    Idle,
    Thinking,
    Answer(String),
    NotAVideo,
    AgentUnavailable,
}

impl ResponseView {
    /// Markup written into the response area
    pub fn markup(&self) -> String {
        match self {
            ResponseView::Idle => String::new(),
            ResponseView::Thinking => "<em>Thinking...</em>".to_string(),
            ResponseView::Answer(html) => html.clone(),
            ResponseView::NotAVideo => {
                "<strong>Error:</strong> Not a YouTube video URL.".to_string()
            }
            ResponseView::AgentUnavailable => {
                "<strong>Error:</strong> Could not talk to the agent.".to_string()
            }
        }
    }
}

/// Run one ask interaction to completion. Never fails: errors become a
/// view, and anything but a missing video ID is logged. The question is
/// trimmed before it is sent.
pub async fn ask_about_active_video<T, A>(
    question: &str,
    tabs: &T,
    agent: &A,
) -> ResponseView
where
    T: TabSource,
    A: Agent,
{
    match answer_for_active_video(question, tabs, agent).await {
        Ok(html) => ResponseView::Answer(html),
        Err(err) => {
            if !err.is_not_a_video() {
                log::error!("Error: {}", err);
            }
            err.response_view()
        }
    }
}

async fn answer_for_active_video<T, A>(
    question: &str,
    tabs: &T,
    agent: &A,
) -> Result<String, PopupError>
where
    T: TabSource,
    A: Agent,
{
    let url = tabs.active_tab_url().await?;
    let video_id = extract_video_id(&url)?.ok_or(PopupError::NotAVideo)?;

    let request = AskRequest::new(video_id, question.trim());
    let response = agent.ask(&request).await?;

    Ok(format_answer(&response.answer_text()?))
}
