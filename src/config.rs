//! Generator configuration
//!
//! Loaded from a `crudforge.toml` that sits in the project being scaffolded.
//! Every field has a default, so an absent or empty file yields a fully
//! working configuration. The config is an explicit value threaded through
//! every component call — never a process-wide singleton — so one process can
//! generate under two different configurations (the tests rely on this).

use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Complete configuration consumed by the generation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root the generated tree is written under
    pub output_root: PathBuf,
    /// Per-category base paths
    pub paths: PathsConfig,
    /// Per-category base module paths
    pub modules: ModulesConfig,
    /// Template override root and per-kind id overrides
    pub templates: TemplatesConfig,
    /// Storage backend connection and column lists
    pub database: DatabaseConfig,
    /// API generation settings
    pub api: ApiConfig,
    /// Web generation settings
    pub web: WebConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_root: PathBuf::from("."),
            paths: PathsConfig::default(),
            modules: ModulesConfig::default(),
            templates: TemplatesConfig::default(),
            database: DatabaseConfig::default(),
            api: ApiConfig::default(),
            web: WebConfig::default(),
        }
    }
}

/// Base output paths, relative to `output_root`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub services: String,
    pub repositories: String,
    pub dto: String,
    pub errors: String,
    pub api_controllers: String,
    pub web_controllers: String,
    pub api_requests: String,
    pub web_requests: String,
    pub resources: String,
    pub views: String,
    pub api_routes: String,
    pub web_routes_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            services: "src/services".into(),
            repositories: "src/repositories".into(),
            dto: "src/dto".into(),
            errors: "src/errors".into(),
            api_controllers: "src/http/api".into(),
            web_controllers: "src/http/web".into(),
            api_requests: "src/http/requests/api".into(),
            web_requests: "src/http/requests/web".into(),
            resources: "src/http/resources".into(),
            views: "assets/views".into(),
            api_routes: "src/routes/api".into(),
            web_routes_file: "src/routes/web.rs".into(),
        }
    }
}

/// Base module paths mirrored into generated `use` declarations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    pub services: String,
    pub repositories: String,
    pub dto: String,
    pub errors: String,
    pub api_controllers: String,
    pub web_controllers: String,
    pub api_requests: String,
    pub web_requests: String,
    pub resources: String,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        ModulesConfig {
            services: "crate::services".into(),
            repositories: "crate::repositories".into(),
            dto: "crate::dto".into(),
            errors: "crate::errors".into(),
            api_controllers: "crate::http::api".into(),
            web_controllers: "crate::http::web".into(),
            api_requests: "crate::http::requests::api".into(),
            web_requests: "crate::http::requests::web".into(),
            resources: "crate::http::resources".into(),
        }
    }
}

/// Template resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory checked for user overrides before the packaged defaults
    pub override_root: PathBuf,
    /// Per-kind template id overrides, keyed by the registry's kind key
    /// (e.g. `api.controller`); unset kinds use the packaged id
    pub ids: BTreeMap<String, String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        TemplatesConfig {
            override_root: PathBuf::from(".crudforge/templates"),
            ids: BTreeMap::new(),
        }
    }
}

/// Storage backend settings and column name lists
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL; introspection is skipped entirely when unset
    pub url: Option<String>,
    /// Columns never surfaced in DTOs, requests, or validation
    pub excluded_columns: Vec<String>,
    /// Columns eligible for the repository search clause
    pub searchable_columns: Vec<String>,
    /// Columns kept out of sortable and serialized field lists
    pub hidden_columns: Vec<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: None,
            excluded_columns: vec![
                "id".into(),
                "created_at".into(),
                "updated_at".into(),
                "deleted_at".into(),
            ],
            searchable_columns: vec![
                "name".into(),
                "title".into(),
                "description".into(),
                "email".into(),
            ],
            hidden_columns: vec!["password".into(), "deleted_at".into()],
        }
    }
}

/// API category settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Default version segment when the caller does not supply one
    pub version: String,
    /// Route prefix for generated API route blocks
    pub prefix: String,
    /// Middleware names applied to generated API route groups
    pub middleware: Vec<String>,
    /// Default page size baked into collection artifacts
    pub per_page: u32,
    /// Response envelope key names
    pub envelope: EnvelopeConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            version: "v1".into(),
            prefix: "api".into(),
            middleware: vec!["api".into()],
            per_page: 25,
            envelope: EnvelopeConfig::default(),
        }
    }
}

/// Key names for the generated response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    pub data: String,
    pub message: String,
    pub meta: String,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        EnvelopeConfig {
            data: "data".into(),
            message: "message".into(),
            meta: "meta".into(),
        }
    }
}

/// Web category settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub prefix: String,
    pub middleware: Vec<String>,
    /// Layout identifier substituted into view templates
    pub layout: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            prefix: String::new(),
            middleware: vec!["web".into()],
            layout: "layouts/app".into(),
        }
    }
}

/// Load configuration from a TOML file
///
/// # Returns
///
/// `Ok(Some(config))` if the file exists and parses, `Ok(None)` if it does
/// not exist (not an error), `Err` if it exists but fails to parse.
pub fn load_config(path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(Some(config))
}

/// Resolve the config path: explicit CLI path first, `crudforge.toml` in the
/// output root otherwise (whether or not it exists)
pub fn resolve_config_path(explicit: Option<&Path>, output_root: &Path) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => output_root.join("crudforge.toml"),
    }
}
