//! Text and JSON views of an action list.

use pathmenu_api::Action;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ActionView<'a> {
    id: &'static str,
    title: &'static str,
    label_key: &'static str,
    icon_key: &'static str,
    accelerator: Option<String>,
    path: &'a std::path::Path,
}

impl<'a> From<&'a Action> for ActionView<'a> {
    fn from(action: &'a Action) -> Self {
        Self {
            id: action.kind.id().0,
            title: action.kind.title(),
            label_key: action.kind.label_key(),
            icon_key: action.kind.icon_key(),
            accelerator: action.kind.accelerator().map(|k| k.display()),
            path: action.entry.full_path(),
        }
    }
}

/// One line per action: position, id, title and shortcut.
pub fn table(actions: &[Action]) -> String {
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let shortcut = action
                .kind
                .accelerator()
                .map(|k| k.display())
                .unwrap_or_default();
            format!(
                "{:>2}. {:<24} {:<24} {}",
                i + 1,
                action.kind.id().0,
                action.kind.title(),
                shortcut
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn json(actions: &[Action]) -> serde_json::Result<String> {
    let views: Vec<ActionView<'_>> = actions.iter().map(ActionView::from).collect();
    serde_json::to_string_pretty(&views)
}
