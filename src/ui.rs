// UI module root: the pane coordinator state machine and its widgets.
//
// `update` is pure: it mutates the model and returns `Command`s as data.
// `run` turns those commands into bubbletea-rs futures.

pub mod attributes;
pub mod bars;
pub mod keymap;
pub mod list;
pub mod model;
pub mod render;
pub mod run;
pub mod tabs;
pub mod update;

pub use crate::config::Layout;
pub use model::{ArtifactsPane, Mode, Model, Pane};
pub use render::render_full;
pub use run::{run, Session};
pub use update::handle_update;

use crate::cpi::{ArtifactKind, ContentPackage, IntegrationArtifact};
use crate::error::NavigatorError;
use url::Url;

/// Logical keys the coordinator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Tab,
    Quit,
    Layout,
    Refresh,
    Open,
}

// Messages delivered to the update logic
#[derive(Debug)]
pub enum Msg {
    Key(Key),
    WindowSize {
        width: usize,
    },
    Packages(Vec<ContentPackage>),
    Artifacts {
        generation: u64,
        kind: ArtifactKind,
        artifacts: Vec<IntegrationArtifact>,
    },
    /// An artifact fetch failed; stale failures are dropped like stale results.
    ArtifactsFailed {
        generation: u64,
        kind: ArtifactKind,
        error: NavigatorError,
    },
    ActiveKind(ArtifactKind),
    Layout(Layout),
    Status(String),
    Error(NavigatorError),
}

/// Work requested by `update`, each producing at most one `Msg`.
#[derive(Debug)]
pub enum Command {
    FetchPackages,
    FetchArtifacts {
        package_id: String,
        kind: ArtifactKind,
        generation: u64,
    },
    OpenUrl(Url),
    /// Delivers a message back to the loop on a later turn.
    Send(Msg),
    Quit,
}
