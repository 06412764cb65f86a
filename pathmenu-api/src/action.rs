//! Action identities and the catalog's fixed set of kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entry::Entry;
use crate::keys::{KeyCombo, KeySpec, Modifiers, NamedKey};

/// Stable identifier for an action, used as the key for shortcut binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActionId(pub &'static str);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every follow-up action the resolver knows about.
///
/// The catalog is closed: hosts cannot register new kinds at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    OpenContainingFolder,
    RunAsAdmin,
    OpenInIde,
    CopyPath,
    OpenInConsole,
}

impl ActionKind {
    /// All kinds, in menu order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::OpenContainingFolder,
        ActionKind::RunAsAdmin,
        ActionKind::OpenInIde,
        ActionKind::CopyPath,
        ActionKind::OpenInConsole,
    ];

    pub fn id(&self) -> ActionId {
        match self {
            Self::OpenContainingFolder => ActionId("open_containing_folder"),
            Self::RunAsAdmin => ActionId("run_as_admin"),
            Self::OpenInIde => ActionId("open_in_ide"),
            Self::CopyPath => ActionId("copy_path"),
            Self::OpenInConsole => ActionId("open_in_console"),
        }
    }

    /// Symbolic resource key; the host's localizer turns it into a label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::OpenContainingFolder => "action.open_containing_folder",
            Self::RunAsAdmin => "action.run_as_administrator",
            Self::OpenInIde => "action.open_in_ide",
            Self::CopyPath => "action.copy_path",
            Self::OpenInConsole => "action.open_in_console",
        }
    }

    /// Symbolic glyph key; theming is up to the host.
    pub fn icon_key(&self) -> &'static str {
        match self {
            Self::OpenContainingFolder => "folder-open",
            Self::RunAsAdmin => "shield",
            Self::OpenInIde => "code",
            Self::CopyPath => "copy",
            Self::OpenInConsole => "terminal",
        }
    }

    /// English fallback title for hosts without a localizer.
    pub fn title(&self) -> &'static str {
        match self {
            Self::OpenContainingFolder => "Open containing folder",
            Self::RunAsAdmin => "Run as administrator",
            Self::OpenInIde => "Open in IDE",
            Self::CopyPath => "Copy path",
            Self::OpenInConsole => "Open in console",
        }
    }

    pub fn accelerator(&self) -> Option<KeyCombo> {
        let combo = match self {
            Self::OpenContainingFolder => KeyCombo::new(Modifiers::CTRL_SHIFT, KeySpec::char('e')),
            Self::RunAsAdmin => KeyCombo::new(Modifiers::CTRL_SHIFT, KeySpec::named(NamedKey::Enter)),
            Self::OpenInIde => KeyCombo::new(Modifiers::CMD, KeySpec::named(NamedKey::F1)),
            Self::CopyPath => KeyCombo::new(Modifiers::CTRL, KeySpec::char('c')),
            Self::OpenInConsole => KeyCombo::new(Modifiers::CTRL_SHIFT, KeySpec::char('c')),
        };
        Some(combo)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Returned when a textual action id names nothing in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.id().0 == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// One selectable operation, bound to a snapshot of the entry it acts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub entry: Entry,
}

impl Action {
    pub fn new(kind: ActionKind, entry: Entry) -> Self {
        Self { kind, entry }
    }

    pub fn id(&self) -> ActionId {
        self.kind.id()
    }
}
