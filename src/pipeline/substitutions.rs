//! Substitution-map assembly
//!
//! One base map per run carries the naming variants, derived type names,
//! resolved module paths, and every field block; per-kind extras (view
//! stems, route middleware chains) are layered on top by the dispatcher.

use crate::config::GeneratorConfig;
use crate::fields::{DtoVariant, FieldEngine};
use crate::naming::NameSet;
use crate::registry::{ArtifactKind, ArtifactRegistry};
use crate::render::SubstitutionMap;

/// Format a middleware list the way route templates splice it in
///
/// Empty → nothing; one entry → `.middleware("web")`; several →
/// `.middleware(&["a", "b"])`.
pub(crate) fn middleware_chain(middleware: &[String]) -> String {
    match middleware {
        [] => String::new(),
        [single] => format!(".middleware(\"{single}\")"),
        many => {
            let quoted: Vec<String> = many.iter().map(|m| format!("\"{m}\"")).collect();
            format!(".middleware(&[{}])", quoted.join(", "))
        }
    }
}

/// Assemble the base substitution map shared by every artifact kind
pub(crate) fn base_map(
    config: &GeneratorConfig,
    registry: &ArtifactRegistry<'_>,
    names: &NameSet,
    fields: &FieldEngine<'_>,
    version: &str,
) -> SubstitutionMap {
    let mut map = SubstitutionMap::new();
    let mut put = |key: &str, value: String| {
        map.insert(key.to_string(), value);
    };

    // naming variants
    put("entity", names.pascal.clone());
    put("entity_plural", names.plural_pascal.clone());
    put("entity_camel", names.camel.clone());
    put("entity_plural_camel", names.plural_camel.clone());
    put("entity_snake", names.snake.clone());
    put("entity_plural_snake", names.plural_snake.clone());
    put("entity_kebab", names.kebab.clone());
    put("entity_plural_kebab", names.plural_kebab.clone());
    put("entity_title", names.title.clone());
    put("entity_plural_title", names.plural_title.clone());
    put("entity_lower", names.lower.clone());
    put("entity_plural_lower", names.plural_lower.clone());
    put("table", names.plural_snake.clone());
    put("version", version.to_string());

    // derived type names
    put("service_struct", format!("{}Service", names.pascal));
    put("repository_struct", format!("{}Repository", names.pascal));
    put(
        "repository_contract",
        format!("{}RepositoryContract", names.pascal),
    );
    put("create_dto", format!("Create{}", names.pascal));
    put("update_dto", format!("Update{}", names.pascal));
    put("filter_dto", format!("{}Filter", names.pascal));
    put("error_type", format!("{}Error", names.pascal));
    put("store_request", format!("Store{}Request", names.pascal));
    put("update_request", format!("Update{}Request", names.pascal));
    put("resource_struct", format!("{}Resource", names.pascal));
    put("collection_struct", format!("{}Collection", names.pascal));
    put("controller_struct", format!("{}Controller", names.pascal));

    // resolved module paths; resolution for these kinds is total, so a
    // failure here would be a registry bug — fall back to empty rather
    // than poisoning the whole map
    let mut module_of = |key: &str, kind: ArtifactKind| {
        let module = registry
            .resolve(kind, names, version)
            .map(|t| t.module)
            .unwrap_or_default();
        map.insert(key.to_string(), module);
    };
    module_of("service_module", ArtifactKind::Service);
    module_of("repository_module", ArtifactKind::Repository);
    module_of("contract_module", ArtifactKind::RepositoryContract);
    module_of("dto_module", ArtifactKind::CreateDto);
    module_of("error_module", ArtifactKind::Error);
    module_of("api_controller_module", ArtifactKind::ApiController);
    module_of("web_controller_module", ArtifactKind::WebController);
    module_of("api_request_module", ArtifactKind::ApiStoreRequest);
    module_of("web_request_module", ArtifactKind::WebStoreRequest);
    module_of("resource_module", ArtifactKind::Resource);

    // field blocks
    let mut put = |key: &str, value: String| {
        map.insert(key.to_string(), value);
    };
    put("create_properties", fields.property_block(DtoVariant::Create));
    put("update_properties", fields.property_block(DtoVariant::Update));
    put("create_extraction", fields.extraction_block(DtoVariant::Create));
    put("update_extraction", fields.extraction_block(DtoVariant::Update));
    put("serialization_fields", fields.serialization_block());
    put("create_rules", fields.validation_block(DtoVariant::Create));
    put("update_rules", fields.validation_block(DtoVariant::Update));
    put("search_clauses", fields.search_block());
    put("sortable_fields", fields.sortable_block());
    put("resource_fields", fields.resource_block());

    // category settings
    put("per_page", config.api.per_page.to_string());
    put("envelope_data", config.api.envelope.data.clone());
    put("envelope_message", config.api.envelope.message.clone());
    put("envelope_meta", config.api.envelope.meta.clone());
    put("api_prefix", config.api.prefix.clone());
    put("web_prefix", config.web.prefix.clone());
    put("layout", config.web.layout.clone());
    put(
        "api_middleware",
        middleware_chain(&config.api.middleware),
    );
    put(
        "web_middleware",
        middleware_chain(&config.web.middleware),
    );

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middleware_chain_forms() {
        assert_eq!(middleware_chain(&[]), "");
        assert_eq!(middleware_chain(&["web".into()]), ".middleware(\"web\")");
        assert_eq!(
            middleware_chain(&["auth".into(), "throttle".into()]),
            ".middleware(&[\"auth\", \"throttle\"])"
        );
    }
}
