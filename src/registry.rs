//! # Artifact Registry
//!
//! Maps each artifact kind to its output path, logical module path, and
//! template id. Resolution is pure string interpolation over the
//! configuration's base paths and the entity's naming variants — no
//! filesystem access. Dispatch everywhere in the crate is a match on the
//! closed [`ArtifactKind`] enum; there is no name-built indirection.

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::ScaffoldError;
use crate::naming::NameSet;

/// Grouping that selects base paths, modules, and route files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Common,
    Api,
    Web,
}

/// Closed set of generated file roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArtifactKind {
    Service,
    Repository,
    RepositoryContract,
    CreateDto,
    UpdateDto,
    FilterDto,
    Error,
    ApiController,
    ApiStoreRequest,
    ApiUpdateRequest,
    Resource,
    Collection,
    ApiRoutes,
    WebController,
    WebStoreRequest,
    WebUpdateRequest,
    Views,
    WebRoutes,
}

/// The four per-entity view templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Index,
    Create,
    Edit,
    Show,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Index,
        ViewKind::Create,
        ViewKind::Edit,
        ViewKind::Show,
    ];

    pub fn file_stem(self) -> &'static str {
        match self {
            ViewKind::Index => "index",
            ViewKind::Create => "create",
            ViewKind::Edit => "edit",
            ViewKind::Show => "show",
        }
    }
}

impl ArtifactKind {
    pub const COMMON: [ArtifactKind; 7] = [
        ArtifactKind::Service,
        ArtifactKind::Repository,
        ArtifactKind::RepositoryContract,
        ArtifactKind::CreateDto,
        ArtifactKind::UpdateDto,
        ArtifactKind::FilterDto,
        ArtifactKind::Error,
    ];

    pub const API: [ArtifactKind; 6] = [
        ArtifactKind::ApiController,
        ArtifactKind::ApiStoreRequest,
        ArtifactKind::ApiUpdateRequest,
        ArtifactKind::Resource,
        ArtifactKind::Collection,
        ArtifactKind::ApiRoutes,
    ];

    pub const WEB: [ArtifactKind; 5] = [
        ArtifactKind::WebController,
        ArtifactKind::WebStoreRequest,
        ArtifactKind::WebUpdateRequest,
        ArtifactKind::Views,
        ArtifactKind::WebRoutes,
    ];

    pub fn category(self) -> Category {
        match self {
            ArtifactKind::Service
            | ArtifactKind::Repository
            | ArtifactKind::RepositoryContract
            | ArtifactKind::CreateDto
            | ArtifactKind::UpdateDto
            | ArtifactKind::FilterDto
            | ArtifactKind::Error => Category::Common,
            ArtifactKind::ApiController
            | ArtifactKind::ApiStoreRequest
            | ArtifactKind::ApiUpdateRequest
            | ArtifactKind::Resource
            | ArtifactKind::Collection
            | ArtifactKind::ApiRoutes => Category::Api,
            ArtifactKind::WebController
            | ArtifactKind::WebStoreRequest
            | ArtifactKind::WebUpdateRequest
            | ArtifactKind::Views
            | ArtifactKind::WebRoutes => Category::Web,
        }
    }

    /// Stable key used in config template-id overrides and report output
    pub fn key(self) -> &'static str {
        match self {
            ArtifactKind::Service => "common.service",
            ArtifactKind::Repository => "common.repository",
            ArtifactKind::RepositoryContract => "common.repository_contract",
            ArtifactKind::CreateDto => "common.create_dto",
            ArtifactKind::UpdateDto => "common.update_dto",
            ArtifactKind::FilterDto => "common.filter_dto",
            ArtifactKind::Error => "common.error",
            ArtifactKind::ApiController => "api.controller",
            ArtifactKind::ApiStoreRequest => "api.store_request",
            ArtifactKind::ApiUpdateRequest => "api.update_request",
            ArtifactKind::Resource => "api.resource",
            ArtifactKind::Collection => "api.collection",
            ArtifactKind::ApiRoutes => "api.routes",
            ArtifactKind::WebController => "web.controller",
            ArtifactKind::WebStoreRequest => "web.store_request",
            ArtifactKind::WebUpdateRequest => "web.update_request",
            ArtifactKind::Views => "web.views",
            ArtifactKind::WebRoutes => "web.routes",
        }
    }

    /// Packaged template id, for kinds rendered from a single template
    fn default_template_id(self) -> Option<&'static str> {
        match self {
            ArtifactKind::Service => Some("common/service.rs.txt"),
            ArtifactKind::Repository => Some("common/repository.rs.txt"),
            ArtifactKind::RepositoryContract => Some("common/contract.rs.txt"),
            ArtifactKind::CreateDto => Some("common/dto_create.rs.txt"),
            ArtifactKind::UpdateDto => Some("common/dto_update.rs.txt"),
            ArtifactKind::FilterDto => Some("common/dto_filter.rs.txt"),
            ArtifactKind::Error => Some("common/error.rs.txt"),
            ArtifactKind::ApiController => Some("api/controller.rs.txt"),
            ArtifactKind::ApiStoreRequest => Some("api/store_request.rs.txt"),
            ArtifactKind::ApiUpdateRequest => Some("api/update_request.rs.txt"),
            ArtifactKind::Resource => Some("api/resource.rs.txt"),
            ArtifactKind::Collection => Some("api/collection.rs.txt"),
            ArtifactKind::ApiRoutes => Some("routes/api.rs.txt"),
            ArtifactKind::WebController => Some("web/controller.rs.txt"),
            ArtifactKind::WebStoreRequest => Some("web/store_request.rs.txt"),
            ArtifactKind::WebUpdateRequest => Some("web/update_request.rs.txt"),
            ArtifactKind::WebRoutes => Some("routes/web.rs.txt"),
            ArtifactKind::Views => None,
        }
    }
}

/// Output of resolving one (entity, kind, options) triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// File path under the configured output root
    pub path: PathBuf,
    /// Logical module path substituted into generated `use` declarations
    pub module: String,
}

/// Pure path/module/template resolver over one configuration
pub struct ArtifactRegistry<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ArtifactRegistry<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        ArtifactRegistry { config }
    }

    /// Resolve the output path and module for a single-file artifact kind
    ///
    /// # Errors
    ///
    /// `Views`, `ApiRoutes` and `WebRoutes` have no single-file target and
    /// return [`ScaffoldError::UnsupportedArtifact`]; they are handled by
    /// [`Self::view_targets`] and the route-file accessors instead. This is
    /// a programming-error guard — the pipeline never requests them here.
    pub fn resolve(
        &self,
        kind: ArtifactKind,
        names: &NameSet,
        version: &str,
    ) -> Result<ResolvedTarget, ScaffoldError> {
        let p = &self.config.paths;
        let m = &self.config.modules;
        let snake = &names.snake;
        let (rel, module) = match kind {
            ArtifactKind::Service => (
                format!("{}/{snake}/service.rs", p.services),
                format!("{}::{snake}", m.services),
            ),
            ArtifactKind::Repository => (
                format!("{}/{snake}/repository.rs", p.repositories),
                format!("{}::{snake}", m.repositories),
            ),
            ArtifactKind::RepositoryContract => (
                format!("{}/{snake}/contract.rs", p.repositories),
                format!("{}::{snake}::contract", m.repositories),
            ),
            ArtifactKind::CreateDto => (
                format!("{}/{snake}/create.rs", p.dto),
                format!("{}::{snake}", m.dto),
            ),
            ArtifactKind::UpdateDto => (
                format!("{}/{snake}/update.rs", p.dto),
                format!("{}::{snake}", m.dto),
            ),
            ArtifactKind::FilterDto => (
                format!("{}/{snake}/filter.rs", p.dto),
                format!("{}::{snake}", m.dto),
            ),
            ArtifactKind::Error => (format!("{}/{snake}.rs", p.errors), m.errors.clone()),
            ArtifactKind::ApiController => (
                format!("{}/{version}/{snake}/controller.rs", p.api_controllers),
                format!("{}::{version}::{snake}", m.api_controllers),
            ),
            ArtifactKind::ApiStoreRequest => (
                format!("{}/{version}/{snake}/store_request.rs", p.api_requests),
                format!("{}::{version}::{snake}", m.api_requests),
            ),
            ArtifactKind::ApiUpdateRequest => (
                format!("{}/{version}/{snake}/update_request.rs", p.api_requests),
                format!("{}::{version}::{snake}", m.api_requests),
            ),
            ArtifactKind::Resource => (
                format!("{}/{version}/{snake}/resource.rs", p.resources),
                format!("{}::{version}::{snake}", m.resources),
            ),
            ArtifactKind::Collection => (
                format!("{}/{version}/{snake}/collection.rs", p.resources),
                format!("{}::{version}::{snake}", m.resources),
            ),
            ArtifactKind::WebController => (
                format!("{}/{snake}/controller.rs", p.web_controllers),
                format!("{}::{snake}", m.web_controllers),
            ),
            ArtifactKind::WebStoreRequest => (
                format!("{}/{snake}/store_request.rs", p.web_requests),
                format!("{}::{snake}", m.web_requests),
            ),
            ArtifactKind::WebUpdateRequest => (
                format!("{}/{snake}/update_request.rs", p.web_requests),
                format!("{}::{snake}", m.web_requests),
            ),
            ArtifactKind::Views | ArtifactKind::ApiRoutes | ArtifactKind::WebRoutes => {
                return Err(ScaffoldError::UnsupportedArtifact {
                    kind: format!("{kind:?}"),
                })
            }
        };
        Ok(ResolvedTarget {
            path: self.config.output_root.join(rel),
            module,
        })
    }

    /// Template id for a single-template kind: config override first,
    /// packaged default otherwise
    pub fn template_id(&self, kind: ArtifactKind) -> Result<String, ScaffoldError> {
        if let Some(id) = self.config.templates.ids.get(kind.key()) {
            return Ok(id.clone());
        }
        kind.default_template_id()
            .map(str::to_string)
            .ok_or(ScaffoldError::UnsupportedArtifact {
                kind: format!("{kind:?}"),
            })
    }

    /// Template id for one view, honoring `web.view_<stem>` overrides
    pub fn view_template_id(&self, view: ViewKind) -> String {
        let key = format!("web.view_{}", view.file_stem());
        match self.config.templates.ids.get(&key) {
            Some(id) => id.clone(),
            None => format!("web/view_{}.html.txt", view.file_stem()),
        }
    }

    /// Output paths for the four view files
    pub fn view_targets(&self, names: &NameSet) -> Vec<(ViewKind, PathBuf)> {
        ViewKind::ALL
            .iter()
            .map(|view| {
                (
                    *view,
                    self.config.output_root.join(format!(
                        "{}/{}/{}.html",
                        self.config.paths.views,
                        names.plural_kebab,
                        view.file_stem()
                    )),
                )
            })
            .collect()
    }

    /// Shared API route-aggregation file for one version segment
    pub fn api_route_file(&self, version: &str) -> PathBuf {
        self.config
            .output_root
            .join(format!("{}/{version}.rs", self.config.paths.api_routes))
    }

    /// Shared web route-aggregation file
    pub fn web_route_file(&self) -> PathBuf {
        self.config
            .output_root
            .join(&self.config.paths.web_routes_file)
    }
}
