//! Action catalog - the fixed, ordered set of context actions.
//!
//! Order is a product decision: situational actions first, universal ones
//! last. Hosts bind menu positions by index, so never reorder.

use pathmenu_api::{Action, ActionKind, Entry};

use crate::probe::MarkerProbe;
use crate::rules;

/// Guard deciding whether an action is offered for an entry.
pub type GuardFn = fn(&Entry, &dyn MarkerProbe) -> bool;

/// One catalog row: the action and the rule that gates it.
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub kind: ActionKind,
    pub guard: GuardFn,
}

impl std::fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("kind", &self.kind)
            .finish()
    }
}

/// The catalog, in presentation order.
pub const CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        kind: ActionKind::OpenContainingFolder,
        guard: |entry, _| rules::has_containing_folder(entry),
    },
    CatalogEntry {
        kind: ActionKind::RunAsAdmin,
        guard: |entry, _| rules::can_elevate(entry),
    },
    CatalogEntry {
        kind: ActionKind::OpenInIde,
        guard: rules::is_buildable_project,
    },
    CatalogEntry {
        kind: ActionKind::CopyPath,
        guard: |_, _| true,
    },
    CatalogEntry {
        kind: ActionKind::OpenInConsole,
        guard: |_, _| true,
    },
];

/// Build the ordered action list for `entry`.
///
/// Each action owns a clone of `entry`, so the list is unaffected by
/// anything that happens to the caller's value afterwards.
pub fn build_actions(entry: &Entry, probe: &dyn MarkerProbe) -> Vec<Action> {
    let actions: Vec<Action> = CATALOG
        .iter()
        .filter(|row| (row.guard)(entry, probe))
        .map(|row| Action::new(row.kind, entry.clone()))
        .collect();
    tracing::debug!(
        path = %entry.full_path().display(),
        kind = %entry.kind(),
        count = actions.len(),
        "resolved actions"
    );
    actions
}
