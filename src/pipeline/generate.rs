use std::collections::BTreeMap;

use anyhow::anyhow;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::fields::FieldEngine;
use crate::naming::NameSet;
use crate::registry::{ArtifactKind, ArtifactRegistry};
use crate::render::{render, SubstitutionMap};
use crate::routes::{api_boilerplate, merge_route, web_boilerplate, MergeOutcome};
use crate::schema::{introspect_columns, SchemaBackend};
use crate::writer::{write_file, WriteOutcome};

use super::substitutions::base_map;

/// Immutable per-invocation flags
///
/// Read by the pipeline, never mutated. `api_version` falls back to the
/// configured default when unset.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub force: bool,
    pub api_version: Option<String>,
    pub skip_common: bool,
    pub skip_routes: bool,
    pub skip_views: bool,
    pub api: bool,
    pub web: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            force: false,
            api_version: None,
            skip_common: false,
            skip_routes: false,
            skip_views: false,
            api: true,
            web: false,
        }
    }
}

/// Per-artifact outcome reported to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    Created,
    Skipped,
    /// Route merger found the entity already registered
    AlreadyPresent,
    Failed(String),
}

impl std::fmt::Display for ArtifactStatus {
    /// Stable string form used in report output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactStatus::Created => write!(f, "created"),
            ArtifactStatus::Skipped => write!(f, "skipped"),
            ArtifactStatus::AlreadyPresent => write!(f, "already_present"),
            ArtifactStatus::Failed(reason) => write!(f, "failed:{reason}"),
        }
    }
}

/// Result map for one generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub entity: String,
    pub artifacts: BTreeMap<ArtifactKind, ArtifactStatus>,
}

impl GenerationReport {
    /// Machine-readable form for the CLI's `--json` flag
    pub fn to_json(&self) -> serde_json::Value {
        let artifacts: serde_json::Map<String, serde_json::Value> = self
            .artifacts
            .iter()
            .map(|(kind, status)| {
                (
                    kind.key().to_string(),
                    serde_json::Value::String(status.to_string()),
                )
            })
            .collect();
        serde_json::json!({
            "entity": self.entity,
            "artifacts": artifacts,
        })
    }

    /// True when no artifact recorded a failure
    pub fn is_success(&self) -> bool {
        !self
            .artifacts
            .values()
            .any(|s| matches!(s, ArtifactStatus::Failed(_)))
    }
}

/// One-entity scaffold run over a config and a storage backend
///
/// Single-threaded and synchronous: artifacts generate sequentially and the
/// run goes to completion once started. Per-artifact failures are isolated
/// into the report; only invalid input and a mid-introspection storage
/// failure abort the run as a whole.
pub struct Pipeline<'a> {
    config: &'a GeneratorConfig,
    backend: &'a dyn SchemaBackend,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a GeneratorConfig, backend: &'a dyn SchemaBackend) -> Self {
        Pipeline { config, backend }
    }

    /// Generate every artifact selected by `options` for one entity
    ///
    /// # Errors
    ///
    /// Fails on an invalid entity name or a storage failure occurring after
    /// the initial table-existence check; everything else is recorded
    /// per-artifact in the returned report.
    pub fn generate(
        &self,
        entity: &str,
        options: &GenerationOptions,
    ) -> anyhow::Result<GenerationReport> {
        let names = NameSet::derive(entity)
            .ok_or_else(|| anyhow!("invalid entity name: {entity:?}"))?;
        let version = options
            .api_version
            .clone()
            .unwrap_or_else(|| self.config.api.version.clone());

        let columns = introspect_columns(
            self.backend,
            names.table(),
            &self.config.database.excluded_columns,
        )?;
        debug!(entity = %names.pascal, columns = columns.len(), "column model ready");

        let fields = FieldEngine::new(
            &columns,
            names.table(),
            &self.config.database.searchable_columns,
            &self.config.database.hidden_columns,
        );
        let registry = ArtifactRegistry::new(self.config);
        let subs = base_map(self.config, &registry, &names, &fields, &version);

        let mut report = GenerationReport {
            entity: names.pascal.clone(),
            artifacts: BTreeMap::new(),
        };

        for kind in self.selected_kinds(options) {
            let status = match self.generate_artifact(kind, &registry, &names, &version, &subs, options)
            {
                Ok(status) => status,
                Err(err) => ArtifactStatus::Failed(format!("{err:#}")),
            };
            report.artifacts.insert(kind, status);
        }

        Ok(report)
    }

    /// Artifact kinds selected by the options, in generation order
    ///
    /// Route kinds come after their category's controller so that merging
    /// always happens with the controller's module already resolved.
    fn selected_kinds(&self, options: &GenerationOptions) -> Vec<ArtifactKind> {
        let mut kinds = Vec::new();
        if !options.skip_common {
            kinds.extend(ArtifactKind::COMMON);
        }
        if options.api {
            kinds.extend(
                ArtifactKind::API
                    .iter()
                    .filter(|k| !(options.skip_routes && **k == ArtifactKind::ApiRoutes)),
            );
        }
        if options.web {
            kinds.extend(ArtifactKind::WEB.iter().filter(|k| {
                !(options.skip_routes && **k == ArtifactKind::WebRoutes)
                    && !(options.skip_views && **k == ArtifactKind::Views)
            }));
        }
        kinds
    }

    /// Closed dispatch from kind to generation routine
    fn generate_artifact(
        &self,
        kind: ArtifactKind,
        registry: &ArtifactRegistry<'_>,
        names: &NameSet,
        version: &str,
        subs: &SubstitutionMap,
        options: &GenerationOptions,
    ) -> anyhow::Result<ArtifactStatus> {
        match kind {
            ArtifactKind::Views => self.generate_views(registry, names, subs, options),
            ArtifactKind::ApiRoutes | ArtifactKind::WebRoutes => {
                self.merge_routes(kind, registry, names, version, subs)
            }
            _ => self.generate_single(kind, registry, names, version, subs, options),
        }
    }

    fn generate_single(
        &self,
        kind: ArtifactKind,
        registry: &ArtifactRegistry<'_>,
        names: &NameSet,
        version: &str,
        subs: &SubstitutionMap,
        options: &GenerationOptions,
    ) -> anyhow::Result<ArtifactStatus> {
        let target = registry.resolve(kind, names, version)?;
        let template_id = registry.template_id(kind)?;
        let content = render(&self.config.templates.override_root, &template_id, subs)?;
        match write_file(&target.path, &content, options.force)? {
            WriteOutcome::Written => Ok(ArtifactStatus::Created),
            WriteOutcome::Skipped => Ok(ArtifactStatus::Skipped),
        }
    }

    /// Render and write the four view files
    ///
    /// Reported as `Created` when at least one view was written this run;
    /// `Skipped` when all four already existed.
    fn generate_views(
        &self,
        registry: &ArtifactRegistry<'_>,
        names: &NameSet,
        subs: &SubstitutionMap,
        options: &GenerationOptions,
    ) -> anyhow::Result<ArtifactStatus> {
        let mut any_written = false;
        for (view, path) in registry.view_targets(names) {
            let mut view_subs = subs.clone();
            view_subs.insert("view".to_string(), view.file_stem().to_string());
            view_subs.insert("route".to_string(), names.plural_kebab.clone());
            let template_id = registry.view_template_id(view);
            let content = render(&self.config.templates.override_root, &template_id, &view_subs)?;
            if write_file(&path, &content, options.force)? == WriteOutcome::Written {
                any_written = true;
            }
        }
        if any_written {
            Ok(ArtifactStatus::Created)
        } else {
            Ok(ArtifactStatus::Skipped)
        }
    }

    /// Render the category's route block and merge it into the shared file
    fn merge_routes(
        &self,
        kind: ArtifactKind,
        registry: &ArtifactRegistry<'_>,
        names: &NameSet,
        version: &str,
        subs: &SubstitutionMap,
    ) -> anyhow::Result<ArtifactStatus> {
        let (template_id, route_file, boilerplate, controller_kind) =
            if kind == ArtifactKind::ApiRoutes {
                (
                    registry.template_id(ArtifactKind::ApiRoutes)?,
                    registry.api_route_file(version),
                    api_boilerplate(),
                    ArtifactKind::ApiController,
                )
            } else {
                (
                    registry.template_id(ArtifactKind::WebRoutes)?,
                    registry.web_route_file(),
                    web_boilerplate(),
                    ArtifactKind::WebController,
                )
            };

        let block = render(&self.config.templates.override_root, &template_id, subs)?;
        let controller = registry.resolve(controller_kind, names, version)?;
        let import_line = format!("use {}::{}Controller;", controller.module, names.pascal);

        match merge_route(
            &route_file,
            &boilerplate,
            &names.plural_kebab,
            &import_line,
            &block,
        )? {
            MergeOutcome::Inserted => Ok(ArtifactStatus::Created),
            MergeOutcome::AlreadyPresent => Ok(ArtifactStatus::AlreadyPresent),
        }
    }
}
