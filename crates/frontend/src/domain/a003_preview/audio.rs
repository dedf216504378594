//! Inline audio player policy: one player per chat message, keyed by source.

/// The player currently attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAudio {
    pub src: String,
    pub playing: bool,
}

/// What the view must do with the media element after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    /// Resume the existing element.
    Play,
    /// Pause the existing element.
    Pause,
    /// Mount a fresh element for the new source (any other one is dropped).
    Start,
}

/// Native media events that keep the state in sync with the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Play,
    Pause,
    Ended,
}

/// Activate the Play/Pause control for `src`.
pub fn toggle(slot: &mut Option<InlineAudio>, src: &str) -> AudioCommand {
    match slot {
        Some(audio) if audio.src == src => {
            audio.playing = !audio.playing;
            if audio.playing {
                AudioCommand::Play
            } else {
                AudioCommand::Pause
            }
        }
        _ => {
            *slot = Some(InlineAudio {
                src: src.to_string(),
                playing: true,
            });
            AudioCommand::Start
        }
    }
}

/// Apply a native event. Events from a source that is no longer attached
/// are ignored.
pub fn on_event(slot: &mut Option<InlineAudio>, src: &str, event: AudioEvent) {
    let matches = slot.as_ref().is_some_and(|a| a.src == src);
    if !matches {
        return;
    }
    match event {
        AudioEvent::Play => {
            if let Some(audio) = slot.as_mut() {
                audio.playing = true;
            }
        }
        AudioEvent::Pause => {
            if let Some(audio) = slot.as_mut() {
                audio.playing = false;
            }
        }
        AudioEvent::Ended => *slot = None,
    }
}

/// Label of the control bound to `src`.
pub fn label_for(slot: &Option<InlineAudio>, src: &str) -> &'static str {
    match slot {
        Some(audio) if audio.src == src && audio.playing => "Pause",
        _ => "Play",
    }
}
