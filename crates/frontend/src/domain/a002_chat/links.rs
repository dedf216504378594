//! Detection of generated-file links in bot answers.
//!
//! Answers reference generated files as markdown links, often several
//! renditions of one output (`deck.pdf` next to `deck.pptx`). Links are
//! grouped by base filename and each group collapses into a single
//! preview/download pair.

use crate::domain::a003_preview::strategy::FileActionGroup;
use crate::shared::api_utils::encode_uri_component;
use contracts::enums::file_kind::{extension_of, FileKind};
use once_cell::sync::Lazy;
use regex::Regex;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]+\]\(([^)]+)\)").expect("valid markdown link regex"));

/// Targets of all `[label](target)` links in order of appearance.
pub fn link_targets(text: &str) -> Vec<String> {
    LINK_RE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Bare filenames are served from the outputs directory.
pub fn normalize_target(target: &str, outputs_path: &str) -> String {
    if target.starts_with("http") || target.starts_with('/') {
        target.to_string()
    } else {
        format!("{}{}", outputs_path, encode_uri_component(target))
    }
}

/// Renditions of one output found in a message. A later link of the same
/// kind replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Renditions {
    pdf: Option<String>,
    presentation: Option<String>,
    audio: Option<String>,
    html: Option<String>,
}

impl Renditions {
    /// Preview/download choice: PDF+presentation pair, then PDF, presentation,
    /// HTML, audio.
    fn resolve(self) -> Option<FileActionGroup> {
        match (self.pdf, self.presentation, self.html, self.audio) {
            (Some(pdf), Some(deck), _, _) => Some(FileActionGroup::new(pdf, Some(deck))),
            (Some(pdf), None, _, _) => Some(FileActionGroup::new(pdf, None)),
            (None, Some(deck), _, _) => Some(FileActionGroup::new(deck, None)),
            (None, None, Some(html), _) => Some(FileActionGroup::new(html, None)),
            (None, None, None, Some(audio)) => Some(FileActionGroup::new(audio, None)),
            (None, None, None, None) => None,
        }
    }
}

fn base_name(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    }
}

/// Action groups for every generated file referenced in `text`, in order of
/// first appearance of each base name.
pub fn file_action_groups(text: &str, outputs_path: &str) -> Vec<FileActionGroup> {
    let mut groups: Vec<(String, Renditions)> = Vec::new();

    for target in link_targets(text) {
        let url = normalize_target(&target, outputs_path);
        let filename = url.rsplit('/').next().unwrap_or(&url).to_string();
        let base = base_name(&filename).to_string();

        let idx = match groups.iter().position(|(b, _)| *b == base) {
            Some(idx) => idx,
            None => {
                groups.push((base, Renditions::default()));
                groups.len() - 1
            }
        };
        let slot = &mut groups[idx].1;

        let kind = extension_of(&filename)
            .map(|ext| FileKind::from_extension(&ext))
            .unwrap_or(FileKind::Other);
        match kind {
            FileKind::Pdf => slot.pdf = Some(url),
            FileKind::Presentation => slot.presentation = Some(url),
            FileKind::Audio => slot.audio = Some(url),
            FileKind::Html => slot.html = Some(url),
            FileKind::Other => {}
        }
    }

    groups
        .into_iter()
        .filter_map(|(_, renditions)| renditions.resolve())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUTS: &str = "/static/outputs/";

    #[test]
    fn test_link_targets() {
        let targets = link_targets("See [the deck](deck.pptx) and [notes]( /static/outputs/n.pdf ).");
        assert_eq!(targets, vec!["deck.pptx", "/static/outputs/n.pdf"]);
        assert!(link_targets("[no target] (x.pdf)").is_empty());
    }

    #[test]
    fn test_normalize_target() {
        assert_eq!(normalize_target("deck.pptx", OUTPUTS), "/static/outputs/deck.pptx");
        assert_eq!(
            normalize_target("Q3 plan.pdf", OUTPUTS),
            "/static/outputs/Q3%20plan.pdf"
        );
        assert_eq!(
            normalize_target("notes (final)!.pdf", OUTPUTS),
            "/static/outputs/notes%20(final)!.pdf"
        );
        assert_eq!(normalize_target("/uploads/a.pdf", OUTPUTS), "/uploads/a.pdf");
        assert_eq!(
            normalize_target("https://cdn.example.com/a.pdf", OUTPUTS),
            "https://cdn.example.com/a.pdf"
        );
    }

    #[test]
    fn test_pdf_and_presentation_pair() {
        let groups = file_action_groups(
            "Your slides: [slide](deck.pptx) and [deck.pdf](deck.pdf)",
            OUTPUTS,
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].preview, "/static/outputs/deck.pdf");
        assert_eq!(groups[0].download, "/static/outputs/deck.pptx");
        assert_eq!(groups[0].kind, FileKind::Pdf);
    }

    #[test]
    fn test_lone_renditions() {
        let groups = file_action_groups("[a](a.pptx) [b](b.html) [c](c.mp3) [d](d.pdf)", OUTPUTS);
        let pairs: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.preview.as_str(), g.download.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("/static/outputs/a.pptx", "/static/outputs/a.pptx"),
                ("/static/outputs/b.html", "/static/outputs/b.html"),
                ("/static/outputs/c.mp3", "/static/outputs/c.mp3"),
                ("/static/outputs/d.pdf", "/static/outputs/d.pdf"),
            ]
        );
    }

    #[test]
    fn test_html_beats_audio_in_same_group() {
        let groups = file_action_groups("[x](x.mp3) [x](x.html)", OUTPUTS);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, FileKind::Html);
    }

    #[test]
    fn test_unknown_extensions_are_dropped() {
        assert!(file_action_groups("[docs](https://example.com/guide)", OUTPUTS).is_empty());
        assert!(file_action_groups("[sheet](data.xlsx)", OUTPUTS).is_empty());
        assert!(file_action_groups("no links here", OUTPUTS).is_empty());
    }
}
