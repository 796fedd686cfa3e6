use crate::config::{Config, Layout, UiConfig, DEFAULT_TENANT_NAME};
use crate::cpi::{self, ArtifactKind, ContentPackage, IntegrationArtifact};
use crate::sort::SortOptions;
use crate::ui::attributes::{artifact_attributes, package_attributes, AttributePanel};
use crate::ui::bars::{StatusBar, TitleBar};
use crate::ui::list::ListWidget;
use crate::ui::render::styles::{Styles, DATASET_HEIGHT};
use crate::ui::tabs::TabSelector;
use crate::ui::{Command, Msg};
use url::Url;

/// Which pane receives navigation keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pane {
    Packages,
    Artifacts,
    // never entered from the keyboard
    Attributes,
    #[default]
    None,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Terminal error overlay; only quitting is possible from here.
    Error(String),
}

/// The four per-kind artifact lists of the selected package.
///
/// Every fetch batch is stamped with `generation`; results carrying an older
/// value belong to a package that is no longer selected and are dropped.
#[derive(Clone, Debug)]
pub struct ArtifactsPane {
    lists: [ListWidget<IntegrationArtifact>; 4],
    active: ArtifactKind,
    generation: u64,
}

impl Default for ArtifactsPane {
    fn default() -> Self {
        Self::new(DATASET_HEIGHT)
    }
}

impl ArtifactsPane {
    pub fn new(height: usize) -> Self {
        Self {
            lists: std::array::from_fn(|_| ListWidget::new(height)),
            active: ArtifactKind::IntegrationFlow,
            generation: 0,
        }
    }

    /// Empties all lists, goes back to the first kind and invalidates any
    /// fetch still in flight.
    pub fn reset(&mut self) {
        for list in &mut self.lists {
            list.reset();
        }
        self.active = ArtifactKind::IntegrationFlow;
        self.next_generation();
    }

    /// Starts a new fetch batch without touching the lists.
    pub fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active(&self) -> ArtifactKind {
        self.active
    }

    pub fn set_active(&mut self, kind: ArtifactKind) {
        self.active = kind;
    }

    pub fn list(&self, kind: ArtifactKind) -> &ListWidget<IntegrationArtifact> {
        &self.lists[kind.index()]
    }

    pub fn list_mut(&mut self, kind: ArtifactKind) -> &mut ListWidget<IntegrationArtifact> {
        &mut self.lists[kind.index()]
    }

    pub fn active_list(&self) -> &ListWidget<IntegrationArtifact> {
        self.list(self.active)
    }

    pub fn active_list_mut(&mut self) -> &mut ListWidget<IntegrationArtifact> {
        self.list_mut(self.active)
    }

    pub fn selected(&self) -> Option<&IntegrationArtifact> {
        self.active_list().selected()
    }
}

/// Root coordinator state.
#[derive(Clone)]
pub struct Model {
    pub styles: Styles,
    pub webui_url: Option<Url>,
    pub packages_sort: SortOptions,
    pub artifacts_sort: Option<SortOptions>,

    pub packages: ListWidget<ContentPackage>,
    pub artifacts: ArtifactsPane,
    pub tabs: TabSelector,
    pub attributes: AttributePanel,
    pub title: TitleBar,
    pub status: StatusBar,

    pub focus: Pane,
    pub layout: Layout,
    pub show_artifacts: bool,
    pub mode: Mode,

    pub screen_width: usize,
}

impl Model {
    pub fn new(config: &Config, styles: Styles) -> Self {
        let webui_url = config.tenant.webui_url.clone();
        let message = webui_url
            .as_ref()
            .map(Url::to_string)
            .unwrap_or_default();
        Self::build(
            StatusBar::new(config.tenant.name.clone(), message),
            webui_url,
            &config.ui,
            styles,
        )
    }

    /// A model that starts in the error overlay.
    pub fn failed(styles: Styles, details: impl Into<String>) -> Self {
        let mut m = Self::build(
            StatusBar::new(DEFAULT_TENANT_NAME, ""),
            None,
            &UiConfig::default(),
            styles,
        );
        m.mode = Mode::Error(details.into());
        m
    }

    fn build(status: StatusBar, webui_url: Option<Url>, ui: &UiConfig, styles: Styles) -> Self {
        Self {
            styles,
            webui_url,
            packages_sort: ui.packages_sort.clone(),
            artifacts_sort: ui.artifacts_sort.clone(),
            packages: ListWidget::new(DATASET_HEIGHT),
            artifacts: ArtifactsPane::new(DATASET_HEIGHT),
            tabs: TabSelector::default(),
            attributes: AttributePanel::default(),
            title: TitleBar::default(),
            status,
            focus: Pane::None,
            layout: ui.layout,
            show_artifacts: false,
            mode: Mode::Normal,
            screen_width: 0,
        }
    }

    /// Commands issued once when the program starts.
    pub fn init(&self) -> Vec<Command> {
        match self.mode {
            Mode::Normal => vec![Command::FetchPackages],
            Mode::Error(_) => Vec::new(),
        }
    }

    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: Msg) -> Vec<Command> {
        crate::ui::update::handle_update(self, msg)
    }

    pub fn view(&self) -> String {
        crate::ui::render::render_full(self)
    }

    pub fn selected_package(&self) -> Option<&ContentPackage> {
        self.packages.selected()
    }

    pub fn selected_artifact(&self) -> Option<&IntegrationArtifact> {
        self.artifacts.selected()
    }

    /// Reloads the attribute panel from the focused pane's selection.
    pub fn refresh_attributes(&mut self) {
        let attrs = match self.focus {
            Pane::Packages => self.packages.selected().map(package_attributes),
            Pane::Artifacts => {
                let kind = self.artifacts.active();
                self.artifacts
                    .selected()
                    .map(|a| artifact_attributes(kind, a))
            }
            Pane::Attributes | Pane::None => return,
        };
        self.attributes.set(attrs.unwrap_or_default());
    }

    /// Web UI link for whatever is selected in the focused pane.
    pub fn selected_web_url(&self) -> Option<Url> {
        let webui = self.webui_url.as_ref();
        match self.focus {
            Pane::Packages => {
                let pkg = self.selected_package()?;
                cpi::package_web_url(webui, &pkg.id)
            }
            Pane::Artifacts => {
                let artifact = self.selected_artifact()?;
                let package_id = if artifact.package_id.is_empty() {
                    &self.selected_package()?.id
                } else {
                    &artifact.package_id
                };
                cpi::artifact_web_url(webui, package_id, self.artifacts.active(), &artifact.id)
            }
            Pane::Attributes | Pane::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(id: &str, package_id: &str) -> IntegrationArtifact {
        IntegrationArtifact {
            id: id.into(),
            name: id.into(),
            package_id: package_id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_model_starts_unfocused_with_status_from_config() {
        let cfg = Config::default();
        let m = Model::new(&cfg, Styles::default());
        assert_eq!(m.focus, Pane::None);
        assert_eq!(m.mode, Mode::Normal);
        assert!(!m.show_artifacts);
        assert_eq!(m.status.tenant, "my-tenant");
        assert!(m.status.message.starts_with("https://my-tenant.integrationsuite"));
        assert!(matches!(m.init().as_slice(), [Command::FetchPackages]));
    }

    #[test]
    fn failed_model_issues_nothing() {
        let m = Model::failed(Styles::default(), "boom");
        assert_eq!(m.mode, Mode::Error("boom".into()));
        assert!(m.init().is_empty());
    }

    #[test]
    fn artifacts_reset_bumps_generation_and_clears() {
        let mut pane = ArtifactsPane::default();
        pane.list_mut(ArtifactKind::ValueMapping)
            .set_items(vec![artifact("V", "P")], false);
        pane.set_active(ArtifactKind::ValueMapping);
        let before = pane.generation();
        pane.reset();
        assert_eq!(pane.generation(), before + 1);
        assert_eq!(pane.active(), ArtifactKind::IntegrationFlow);
        assert!(pane.list(ArtifactKind::ValueMapping).is_empty());
    }

    #[test]
    fn artifact_link_falls_back_to_selected_package() {
        let mut m = Model::new(&Config::default(), Styles::default());
        m.packages.set_items(
            vec![ContentPackage {
                id: "Pkg1".into(),
                ..Default::default()
            }],
            true,
        );
        m.artifacts
            .list_mut(ArtifactKind::IntegrationFlow)
            .set_items(vec![artifact("Flow1", "")], true);
        m.focus = Pane::Artifacts;
        let url = m.selected_web_url().unwrap();
        assert!(url
            .as_str()
            .ends_with("/contentpackage/Pkg1/integrationflows/Flow1"));
    }
}
