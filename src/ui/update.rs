use crate::cpi::{ArtifactKind, ContentPackage, IntegrationArtifact};
use crate::error::NavigatorError;
use crate::sort::sort_records;
use crate::ui::model::{Mode, Model, Pane};
use crate::ui::{Command, Key, Layout, Msg};

pub fn handle_update(m: &mut Model, msg: Msg) -> Vec<Command> {
    if matches!(m.mode, Mode::Error(_)) {
        return handle_error_mode(m, msg);
    }
    match msg {
        Msg::Key(key) => handle_key(m, key),
        Msg::WindowSize { width } => handle_window_size(m, width),
        Msg::Packages(packages) => handle_packages(m, packages),
        Msg::Artifacts {
            generation,
            kind,
            artifacts,
        } => handle_artifacts(m, generation, kind, artifacts),
        Msg::ArtifactsFailed {
            generation,
            kind,
            error,
        } => handle_artifacts_failed(m, generation, kind, error),
        Msg::ActiveKind(kind) => handle_active_kind(m, kind),
        Msg::Layout(layout) => handle_layout(m, layout),
        Msg::Status(message) => {
            m.status.set_message(message);
            Vec::new()
        }
        Msg::Error(err) => handle_error(m, err),
    }
}

fn handle_error_mode(m: &mut Model, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::Key(Key::Quit) => vec![Command::Quit],
        Msg::WindowSize { width } => handle_window_size(m, width),
        other => {
            tracing::debug!(msg = ?other, "ignored while showing error");
            Vec::new()
        }
    }
}

fn handle_key(m: &mut Model, key: Key) -> Vec<Command> {
    match key {
        Key::Quit => vec![Command::Quit],
        Key::Up => handle_key_vertical(m, false),
        Key::Down => handle_key_vertical(m, true),
        Key::Left => handle_key_horizontal(m, false),
        Key::Right => handle_key_horizontal(m, true),
        Key::Enter => handle_key_enter(m),
        Key::Tab => handle_key_tab(m),
        Key::Refresh => handle_key_refresh(m),
        Key::Open => handle_key_open(m),
        Key::Layout => vec![Command::Send(Msg::Layout(m.layout.toggled()))],
    }
}

fn handle_window_size(m: &mut Model, width: usize) -> Vec<Command> {
    m.screen_width = width;
    Vec::new()
}

fn handle_key_vertical(m: &mut Model, down: bool) -> Vec<Command> {
    match m.focus {
        Pane::Packages => {
            m.show_artifacts = false;
            if down {
                m.packages.select_next();
            } else {
                m.packages.select_prev();
            }
            // the artifacts side described the previous package
            reset_artifacts_side(m);
        }
        Pane::Artifacts => {
            m.show_artifacts = true;
            let list = m.artifacts.active_list_mut();
            if down {
                list.select_next();
            } else {
                list.select_prev();
            }
        }
        Pane::Attributes | Pane::None => return Vec::new(),
    }
    m.refresh_attributes();
    Vec::new()
}

fn handle_key_horizontal(m: &mut Model, right: bool) -> Vec<Command> {
    if m.focus != Pane::Artifacts {
        return Vec::new();
    }
    m.show_artifacts = true;
    let kind = if right { m.tabs.next() } else { m.tabs.prev() };
    vec![Command::Send(Msg::ActiveKind(kind))]
}

fn handle_key_enter(m: &mut Model) -> Vec<Command> {
    if m.focus != Pane::Packages {
        return Vec::new();
    }
    m.show_artifacts = true;
    reset_artifacts_side(m);
    match m.selected_package().map(|p| p.id.clone()) {
        Some(package_id) => fetch_all_kinds(m, &package_id),
        None => Vec::new(),
    }
}

fn handle_key_tab(m: &mut Model) -> Vec<Command> {
    match m.focus {
        Pane::Packages => {
            m.focus = Pane::Artifacts;
            m.show_artifacts = true;
        }
        Pane::Artifacts => {
            m.focus = Pane::Packages;
            m.show_artifacts = false;
        }
        Pane::Attributes | Pane::None => return Vec::new(),
    }
    m.refresh_attributes();
    Vec::new()
}

fn handle_key_refresh(m: &mut Model) -> Vec<Command> {
    match m.focus {
        Pane::Packages => {
            reset_artifacts_side(m);
            vec![Command::FetchPackages]
        }
        Pane::Artifacts => match m.selected_package().map(|p| p.id.clone()) {
            Some(package_id) => {
                m.artifacts.next_generation();
                fetch_all_kinds(m, &package_id)
            }
            None => Vec::new(),
        },
        Pane::Attributes | Pane::None => Vec::new(),
    }
}

fn handle_key_open(m: &mut Model) -> Vec<Command> {
    if !matches!(m.focus, Pane::Packages | Pane::Artifacts) {
        return Vec::new();
    }
    match m.selected_web_url() {
        Some(url) => vec![Command::OpenUrl(url)],
        None => {
            tracing::debug!(focus = ?m.focus, "nothing to open");
            Vec::new()
        }
    }
}

fn handle_layout(m: &mut Model, layout: Layout) -> Vec<Command> {
    m.layout = layout;
    Vec::new()
}

fn handle_packages(m: &mut Model, mut packages: Vec<ContentPackage>) -> Vec<Command> {
    tracing::debug!(count = packages.len(), "packages received");
    sort_records(&mut packages, &m.packages_sort);
    m.packages.set_items(packages, false);
    m.focus = Pane::Packages;
    m.show_artifacts = false;
    m.refresh_attributes();
    Vec::new()
}

fn handle_artifacts(
    m: &mut Model,
    generation: u64,
    kind: ArtifactKind,
    mut artifacts: Vec<IntegrationArtifact>,
) -> Vec<Command> {
    if generation != m.artifacts.generation() {
        tracing::debug!(
            kind = kind.name(),
            generation,
            current = m.artifacts.generation(),
            "discarding stale artifacts"
        );
        return Vec::new();
    }
    tracing::debug!(kind = kind.name(), count = artifacts.len(), "artifacts received");
    if let Some(options) = &m.artifacts_sort {
        sort_records(&mut artifacts, options);
    }
    m.artifacts.list_mut(kind).set_items(artifacts, false);
    if m.focus == Pane::Artifacts {
        m.refresh_attributes();
    }
    Vec::new()
}

fn handle_artifacts_failed(
    m: &mut Model,
    generation: u64,
    kind: ArtifactKind,
    error: NavigatorError,
) -> Vec<Command> {
    if generation != m.artifacts.generation() {
        tracing::debug!(
            kind = kind.name(),
            generation,
            current = m.artifacts.generation(),
            error = %error,
            "discarding stale artifact failure"
        );
        return Vec::new();
    }
    handle_error(m, error)
}

fn handle_active_kind(m: &mut Model, kind: ArtifactKind) -> Vec<Command> {
    if m.focus != Pane::Artifacts {
        return Vec::new();
    }
    m.show_artifacts = true;
    m.tabs.set_active(kind);
    m.artifacts.set_active(kind);
    m.refresh_attributes();
    Vec::new()
}

fn handle_error(m: &mut Model, err: NavigatorError) -> Vec<Command> {
    tracing::warn!(error = %err, "switching to error view");
    m.mode = Mode::Error(err.to_string());
    Vec::new()
}

fn reset_artifacts_side(m: &mut Model) {
    m.artifacts.reset();
    m.tabs.reset();
}

fn fetch_all_kinds(m: &Model, package_id: &str) -> Vec<Command> {
    let generation = m.artifacts.generation();
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| Command::FetchArtifacts {
            package_id: package_id.to_string(),
            kind,
            generation,
        })
        .collect()
}
