//! YAML configuration: tenant connection details and UI preferences.

use crate::error::{NavigatorError, Result};
use crate::sort::{SortOptions, SortOrder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.yaml";
const USER_CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "cpi-navigator";

pub const DEFAULT_TENANT_NAME: &str = "SAP Cloud Integration";
pub const DEFAULT_PACKAGES_SORT_FIELD: &str = "ID";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Normal,
    Compact,
}

impl Layout {
    pub fn toggled(self) -> Self {
        match self {
            Layout::Normal => Layout::Compact,
            Layout::Compact => Layout::Normal,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Layout::Normal),
            "compact" => Some(Layout::Compact),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantConfig {
    pub name: String,
    pub webui_url: Option<Url>,
    pub base_url: Url,
    pub token_url: Url,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    pub layout: Layout,
    pub packages_sort: SortOptions,
    /// Only applied when configured; otherwise the server order is kept.
    pub artifacts_sort: Option<SortOptions>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Normal,
            packages_sort: SortOptions::new(DEFAULT_PACKAGES_SORT_FIELD, SortOrder::Ascending),
            artifacts_sort: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub tenant: TenantConfig,
    pub ui: UiConfig,
}

// File shape. Everything is optional here so that missing mandatory values
// can be reported together after parsing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    tenant: RawTenant,
    ui: RawUi,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTenant {
    name: Option<String>,
    webui_url: Option<String>,
    base_url: Option<String>,
    token_url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawUi {
    layout: Option<String>,
    packages_pane: RawPane,
    artifacts_pane: RawPane,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPane {
    sort_field: Option<String>,
    sort_order: Option<String>,
}

impl Config {
    /// Loads the given file, or the first existing default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => find_config_file()?,
        };
        tracing::info!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(&path).map_err(|source| NavigatorError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml(&text, &path)
    }

    fn from_yaml(text: &str, path: &Path) -> Result<Self> {
        let raw: RawConfig = if text.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(text).map_err(|source| NavigatorError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let RawTenant {
            name,
            webui_url,
            base_url,
            token_url,
            client_id,
            client_secret,
        } = raw.tenant;

        let base_url = non_empty(base_url);
        let token_url = non_empty(token_url);
        let client_id = non_empty(client_id);
        let client_secret = non_empty(client_secret);

        let missing: Vec<&str> = [
            ("tenant.base_url", base_url.is_none()),
            ("tenant.token_url", token_url.is_none()),
            ("tenant.client_id", client_id.is_none()),
            ("tenant.client_secret", client_secret.is_none()),
        ]
        .into_iter()
        .filter_map(|(param, absent)| absent.then_some(param))
        .collect();

        let (Some(base_url), Some(token_url), Some(client_id), Some(client_secret)) =
            (base_url, token_url, client_id, client_secret)
        else {
            return Err(NavigatorError::MissingParams {
                missing: missing.join(", "),
            });
        };

        let webui_url = non_empty(webui_url)
            .map(|u| parse_url("tenant.webui_url", &u))
            .transpose()?;
        let name = non_empty(name)
            .or_else(|| webui_url.as_ref().and_then(tenant_name_from_url))
            .unwrap_or_else(|| DEFAULT_TENANT_NAME.to_string());

        let tenant = TenantConfig {
            name,
            webui_url,
            base_url: parse_url("tenant.base_url", &base_url)?,
            token_url: parse_url("tenant.token_url", &token_url)?,
            client_id,
            client_secret,
        };

        let layout = match non_empty(raw.ui.layout) {
            Some(value) => Layout::parse(&value).unwrap_or_else(|| {
                tracing::warn!(layout = %value, "unknown layout, using normal");
                Layout::Normal
            }),
            None => Layout::Normal,
        };

        let packages_sort = SortOptions::new(
            non_empty(raw.ui.packages_pane.sort_field)
                .unwrap_or_else(|| DEFAULT_PACKAGES_SORT_FIELD.to_string()),
            sort_order(raw.ui.packages_pane.sort_order),
        );
        let artifacts_sort = non_empty(raw.ui.artifacts_pane.sort_field)
            .map(|field| SortOptions::new(field, sort_order(raw.ui.artifacts_pane.sort_order)));

        Ok(Config {
            tenant,
            ui: UiConfig {
                layout,
                packages_sort,
                artifacts_sort,
            },
        })
    }
}

fn find_config_file() -> Result<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(home) = std::env::var_os("HOME") {
        candidates.push(
            PathBuf::from(home)
                .join(USER_CONFIG_DIR)
                .join(APP_CONFIG_DIR)
                .join(CONFIG_FILE_NAME),
        );
    }
    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }
    let searched = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(NavigatorError::ConfigNotFound { searched })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_url(param: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|source| NavigatorError::InvalidUrl {
        param: param.to_string(),
        source,
    })
}

fn sort_order(value: Option<String>) -> SortOrder {
    match non_empty(value) {
        Some(v) => SortOrder::parse(&v).unwrap_or_else(|| {
            tracing::warn!(sort_order = %v, "unknown sort order, using ascending");
            SortOrder::Ascending
        }),
        None => SortOrder::Ascending,
    }
}

// "my-tenant.integrationsuite.example.com" -> "my-tenant"
fn tenant_name_from_url(url: &Url) -> Option<String> {
    url.host_str()
        .and_then(|host| host.split('.').next())
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            name: "my-tenant".to_string(),
            webui_url: Url::parse("https://my-tenant.integrationsuite.example.com").ok(),
            base_url: Url::parse("https://my-tenant.it-cpi.example.com/api/v1")
                .expect("static url"),
            token_url: Url::parse("https://my-tenant.authentication.example.com/oauth/token")
                .expect("static url"),
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
        }
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            tenant: TenantConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
