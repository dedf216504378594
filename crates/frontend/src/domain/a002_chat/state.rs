//! Chat history reducer.
//!
//! All chat mutations go through [`ChatState`], so concurrent responses can
//! only ever replace whole messages, never tear them.

use crate::domain::a002_chat::links::file_action_groups;
use crate::domain::a003_preview::audio::{self, AudioCommand, AudioEvent, InlineAudio};
use crate::domain::a003_preview::strategy::FileActionGroup;
use crate::shared::error::ApiError;
use contracts::domain::a002_chat_query::aggregate::QueryOutcome;
use uuid::Uuid;

pub const THINKING_TEXT: &str = "Thinking...";
pub const REQUEST_FAILED_TEXT: &str = "Request failed. Check console for details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub actions: Vec<FileActionGroup>,
    pub audio: Option<InlineAudio>,
    pub placeholder: bool,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            actions: Vec::new(),
            audio: None,
            placeholder: false,
        }
    }

    pub fn dom_id(&self) -> String {
        format!("msg-{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    /// Placeholder of the query in flight.
    pending: Option<Uuid>,
}

impl ChatState {
    /// History holding only the welcome message.
    pub fn welcome(text: &str) -> Self {
        let mut state = Self::default();
        state.reset(text);
        state
    }

    pub fn reset(&mut self, welcome: &str) {
        self.messages = vec![ChatMessage::new(Sender::Bot, welcome)];
        self.pending = None;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn message(&self, id: Uuid) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push_user(&mut self, text: &str) -> Uuid {
        let msg = ChatMessage::new(Sender::User, text);
        let id = msg.id;
        self.messages.push(msg);
        id
    }

    /// Bot message with action groups for every generated file it links to.
    pub fn push_bot(&mut self, text: &str, outputs_path: &str) -> Uuid {
        let mut msg = ChatMessage::new(Sender::Bot, text);
        msg.actions = file_action_groups(text, outputs_path);
        let id = msg.id;
        self.messages.push(msg);
        id
    }

    /// Start a query: user message plus "Thinking..." placeholder.
    ///
    /// Returns the placeholder id, or `None` for an empty query or while
    /// another query is in flight.
    pub fn begin_query(&mut self, query: &str) -> Option<Uuid> {
        if query.is_empty() || self.pending.is_some() {
            return None;
        }
        self.push_user(query);
        let mut placeholder = ChatMessage::new(Sender::Bot, THINKING_TEXT);
        placeholder.placeholder = true;
        let id = placeholder.id;
        self.messages.push(placeholder);
        self.pending = Some(id);
        Some(id)
    }

    /// Replace the placeholder with the rendered outcome.
    pub fn finish_query(
        &mut self,
        placeholder: Uuid,
        result: Result<QueryOutcome, ApiError>,
        outputs_path: &str,
    ) -> Uuid {
        self.messages.retain(|m| m.id != placeholder);
        if self.pending == Some(placeholder) {
            self.pending = None;
        }

        match result {
            Ok(QueryOutcome::Failed(err)) | Err(ApiError::Server(err)) => {
                self.push_bot(&format!("Error: {}", err), outputs_path)
            }
            Ok(QueryOutcome::Answer(answer)) => self.push_bot(&answer, outputs_path),
            Ok(QueryOutcome::AnswerWithFile {
                answer,
                file_url,
                download_url,
            }) => {
                let id = self.push_bot(&answer, outputs_path);
                if let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) {
                    msg.actions.push(FileActionGroup::new(file_url, download_url));
                }
                id
            }
            Err(e) => {
                log::error!("Query failed: {}", e);
                self.push_bot(REQUEST_FAILED_TEXT, outputs_path)
            }
        }
    }

    /// Play/Pause control of `message` for `src`.
    pub fn toggle_audio(&mut self, message: Uuid, src: &str) -> Option<AudioCommand> {
        let msg = self.messages.iter_mut().find(|m| m.id == message)?;
        Some(audio::toggle(&mut msg.audio, src))
    }

    pub fn audio_event(&mut self, message: Uuid, src: &str, event: AudioEvent) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.id == message) {
            audio::on_event(&mut msg.audio, src, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::FileKind;

    const OUTPUTS: &str = "/static/outputs/";
    const WELCOME: &str = "Welcome - Upload your sources then ask Questions";

    #[test]
    fn test_reset_leaves_exactly_one_welcome() {
        let mut state = ChatState::welcome(WELCOME);
        state.begin_query("hello");
        state.push_bot("older answer", OUTPUTS);
        state.reset(WELCOME);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].text, WELCOME);
        assert_eq!(state.messages()[0].sender, Sender::Bot);
        assert!(!state.is_pending());
    }

    #[test]
    fn test_empty_query_is_ignored() {
        let mut state = ChatState::welcome(WELCOME);
        assert_eq!(state.begin_query(""), None);
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn test_query_lifecycle() {
        let mut state = ChatState::welcome(WELCOME);
        let placeholder = state.begin_query("What is in the report?").unwrap();
        assert!(state.is_pending());
        assert_eq!(state.messages().len(), 3);
        assert!(state.message(placeholder).unwrap().placeholder);
        assert_eq!(state.message(placeholder).unwrap().text, THINKING_TEXT);

        let id = state.finish_query(
            placeholder,
            Ok(QueryOutcome::Answer("It covers **Q3**.".into())),
            OUTPUTS,
        );
        assert!(!state.is_pending());
        assert!(state.message(placeholder).is_none());
        assert_eq!(state.messages().len(), 3);
        assert_eq!(state.message(id).unwrap().text, "It covers **Q3**.");
    }

    #[test]
    fn test_second_query_waits_for_first() {
        let mut state = ChatState::welcome(WELCOME);
        let first = state.begin_query("one").unwrap();
        assert_eq!(state.begin_query("two"), None);
        state.finish_query(first, Ok(QueryOutcome::Answer("1".into())), OUTPUTS);
        assert!(state.begin_query("two").is_some());
    }

    #[test]
    fn test_error_outcomes() {
        let mut state = ChatState::welcome(WELCOME);
        let p = state.begin_query("q").unwrap();
        let id = state.finish_query(p, Ok(QueryOutcome::Failed("index empty".into())), OUTPUTS);
        assert_eq!(state.message(id).unwrap().text, "Error: index empty");

        let p = state.begin_query("q").unwrap();
        let id = state.finish_query(p, Err(ApiError::Network("offline".into())), OUTPUTS);
        assert_eq!(state.message(id).unwrap().text, REQUEST_FAILED_TEXT);
    }

    #[test]
    fn test_answer_with_file_attaches_actions() {
        let mut state = ChatState::welcome(WELCOME);
        let p = state.begin_query("make slides").unwrap();
        let id = state.finish_query(
            p,
            Ok(QueryOutcome::AnswerWithFile {
                answer: "Here you go".into(),
                file_url: "/static/outputs/deck.pdf".into(),
                download_url: Some("/static/outputs/deck.pptx".into()),
            }),
            OUTPUTS,
        );
        let msg = state.message(id).unwrap();
        assert_eq!(msg.actions.len(), 1);
        assert_eq!(msg.actions[0].preview, "/static/outputs/deck.pdf");
        assert_eq!(msg.actions[0].download, "/static/outputs/deck.pptx");
    }

    #[test]
    fn test_bot_links_become_actions() {
        let mut state = ChatState::welcome(WELCOME);
        let id = state.push_bot("Listen: [podcast](talk.mp3)", OUTPUTS);
        let msg = state.message(id).unwrap();
        assert_eq!(msg.actions.len(), 1);
        assert_eq!(msg.actions[0].kind, FileKind::Audio);

        let id = state.push_user("[not parsed](a.pdf)");
        assert!(state.message(id).unwrap().actions.is_empty());
    }

    #[test]
    fn test_audio_is_per_message() {
        let mut state = ChatState::welcome(WELCOME);
        let a = state.push_bot("[a](a.mp3)", OUTPUTS);
        let b = state.push_bot("[b](b.mp3)", OUTPUTS);
        assert_eq!(state.toggle_audio(a, "/a.mp3"), Some(AudioCommand::Start));
        assert_eq!(state.toggle_audio(b, "/b.mp3"), Some(AudioCommand::Start));
        assert!(state.message(a).unwrap().audio.is_some());

        state.audio_event(a, "/a.mp3", AudioEvent::Ended);
        assert!(state.message(a).unwrap().audio.is_none());
        assert!(state.message(b).unwrap().audio.is_some());
    }
}
