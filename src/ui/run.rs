use crate::browser::BrowserLauncher;
use crate::config::Config;
use crate::cpi::{ArtifactKind, DataSource};
use crate::error::{NavigatorError, Result};
use crate::ui::bars::APP_NAME;
use crate::ui::keymap::key_for;
use crate::ui::model::Model;
use crate::ui::render::styles::Styles;
use crate::ui::{Command, Msg};
use bubbletea_rs::{
    command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel, Program,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use url::Url;

/// Everything the program needs, handed over before it starts.
pub struct Session {
    pub config: Config,
    pub styles: Styles,
    pub data: Arc<dyn DataSource>,
    pub browser: Arc<dyn BrowserLauncher>,
}

// bubbletea-rs constructs the model through an argument-less `init`.
static SESSION: OnceCell<Session> = OnceCell::new();

pub async fn run(session: Session) -> Result<()> {
    if SESSION.set(session).is_err() {
        return Err(NavigatorError::Program("session already started".to_string()));
    }

    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| NavigatorError::Program(format!("failed to build program: {e:?}")))?;
    program
        .run()
        .await
        .map_err(|e| NavigatorError::Program(format!("{e:?}")))?;
    Ok(())
}

struct TeaAdapter {
    inner: Model,
    data: Option<Arc<dyn DataSource>>,
    browser: Option<Arc<dyn BrowserLauncher>>,
}

impl TeaAdapter {
    fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(s) => TeaAdapter {
                inner: Model::new(&s.config, s.styles.clone()),
                data: Some(Arc::clone(&s.data)),
                browser: Some(Arc::clone(&s.browser)),
            },
            None => TeaAdapter {
                inner: Model::failed(Styles::default(), "program started without a session"),
                data: None,
                browser: None,
            },
        }
    }

    /// Window title, a size query, then whatever the model asks for first.
    fn startup(&self) -> Vec<Cmd> {
        let mut cmds = vec![
            bubbletea_rs::set_window_title(APP_NAME.to_string()),
            bubbletea_rs::window_size(),
        ];
        cmds.extend(self.dispatch(self.inner.init()));
        cmds
    }

    fn dispatch(&self, commands: Vec<Command>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = commands
            .into_iter()
            .filter_map(|c| self.to_cmd(c))
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(bubbletea_rs::batch(cmds)),
        }
    }

    fn to_cmd(&self, command: Command) -> Option<Cmd> {
        tracing::debug!(command = ?command, "dispatching");
        match command {
            Command::Quit => Some(bubbletea_rs::quit()),
            Command::Send(msg) => Some(Box::pin(async move { Some(boxed(msg)) })),
            Command::FetchPackages => {
                let data = Arc::clone(self.data.as_ref()?);
                Some(Box::pin(async move {
                    Some(boxed(fetch_packages(data.as_ref()).await))
                }))
            }
            Command::FetchArtifacts {
                package_id,
                kind,
                generation,
            } => {
                let data = Arc::clone(self.data.as_ref()?);
                Some(Box::pin(async move {
                    Some(boxed(
                        fetch_artifacts(data.as_ref(), &package_id, kind, generation).await,
                    ))
                }))
            }
            Command::OpenUrl(url) => {
                let browser = Arc::clone(self.browser.as_ref()?);
                Some(Box::pin(async move {
                    Some(boxed(open_url(browser.as_ref(), &url).await))
                }))
            }
        }
    }
}

fn boxed(msg: Msg) -> bubbletea_rs::event::Msg {
    Box::new(msg)
}

pub async fn fetch_packages(data: &dyn DataSource) -> Msg {
    match data.content_packages().await {
        Ok(packages) => Msg::Packages(packages),
        Err(e) => {
            tracing::warn!(error = %e, "package fetch failed");
            Msg::Error(e)
        }
    }
}

pub async fn fetch_artifacts(
    data: &dyn DataSource,
    package_id: &str,
    kind: ArtifactKind,
    generation: u64,
) -> Msg {
    match data.integration_artifacts(package_id, kind).await {
        Ok(artifacts) => Msg::Artifacts {
            generation,
            kind,
            artifacts,
        },
        Err(error) => {
            tracing::warn!(error = %error, package_id, kind = kind.name(), "artifact fetch failed");
            Msg::ArtifactsFailed {
                generation,
                kind,
                error,
            }
        }
    }
}

pub async fn open_url(browser: &dyn BrowserLauncher, url: &Url) -> Msg {
    match browser.open(url).await {
        Ok(()) => Msg::Status(format!("Opened {url}")),
        Err(e) => Msg::Error(e),
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let adapter = TeaAdapter::from_session(SESSION.get());
        let cmd = bubbletea_rs::batch(adapter.startup());
        (adapter, Some(cmd))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        // Map bubbletea-rs events to our Msg and run the update logic
        let msg = if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            Msg::Key(key_for(&km.key, km.modifiers)?)
        } else if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            Msg::WindowSize {
                width: ws.width as usize,
            }
        } else {
            match msg.downcast::<Msg>() {
                Ok(msg) => *msg,
                Err(_) => return None,
            }
        };
        let commands = self.inner.update(msg);
        self.dispatch(commands)
    }

    fn view(&self) -> String {
        self.inner.view()
    }
}
