use crudforge::routes::{merge_route, web_boilerplate, MergeOutcome, ROUTE_MARKER};
use std::fs;
use std::path::PathBuf;

fn route_file(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("src/routes/web.rs")
}

const IMPORT: &str = "use crate::http::web::invoice::InvoiceController;";
const BLOCK: &str = "\
use crate::http::web::invoice::InvoiceController;

// Invoice web routes
pub fn invoice_web_routes(router: &mut Router) {
    router
        .scope(\"/\").middleware(\"web\")
        .resource(\"invoices\", InvoiceController::handlers());
}
";

fn merge(dir: &tempfile::TempDir) -> MergeOutcome {
    merge_route(
        &route_file(dir),
        &web_boilerplate(),
        "invoices",
        IMPORT,
        BLOCK,
    )
    .unwrap()
}

#[test]
fn test_missing_file_is_created_with_boilerplate() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(merge(&dir), MergeOutcome::Inserted);

    let text = fs::read_to_string(route_file(&dir)).unwrap();
    assert!(text.contains("pub fn home"));
    assert!(text.contains(ROUTE_MARKER));
    assert!(text.contains("pub fn invoice_web_routes"));
}

#[test]
fn test_merge_twice_is_inserted_then_already_present() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(merge(&dir), MergeOutcome::Inserted);
    let after_first = fs::read_to_string(route_file(&dir)).unwrap();

    assert_eq!(merge(&dir), MergeOutcome::AlreadyPresent);
    let after_second = fs::read_to_string(route_file(&dir)).unwrap();

    // second run modified nothing and the block occurs exactly once
    assert_eq!(after_first, after_second);
    assert_eq!(after_second.matches("pub fn invoice_web_routes").count(), 1);
    assert_eq!(after_second.matches(IMPORT).count(), 1);
}

#[test]
fn test_import_lands_before_first_executable_line() {
    let dir = tempfile::tempdir().unwrap();
    merge(&dir);

    let text = fs::read_to_string(route_file(&dir)).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    let import_idx = lines.iter().position(|l| *l == IMPORT).unwrap();
    let first_body = lines
        .iter()
        .position(|l| {
            let t = l.trim_start();
            !t.is_empty() && !t.starts_with("//") && !t.starts_with("use ")
        })
        .unwrap();
    assert!(import_idx < first_body);
}

#[test]
fn test_zero_import_file_still_gets_import_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = route_file(&dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "pub fn home(router: &mut Router) {\n}\n").unwrap();

    let outcome = merge_route(&path, &web_boilerplate(), "invoices", IMPORT, BLOCK).unwrap();
    assert_eq!(outcome, MergeOutcome::Inserted);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], IMPORT);
    assert!(lines[1].starts_with("pub fn home"));
}

#[test]
fn test_populated_file_from_prior_run_accepts_second_entity() {
    let dir = tempfile::tempdir().unwrap();
    merge(&dir);

    let order_block = BLOCK.replace("invoice", "order").replace("Invoice", "Order");
    let order_import = IMPORT.replace("invoice", "order").replace("Invoice", "Order");
    let outcome = merge_route(
        &route_file(&dir),
        &web_boilerplate(),
        "orders",
        &order_import,
        &order_block,
    )
    .unwrap();
    assert_eq!(outcome, MergeOutcome::Inserted);

    let text = fs::read_to_string(route_file(&dir)).unwrap();
    // both imports sit above the first function
    let lines: Vec<&str> = text.lines().collect();
    let first_body = lines
        .iter()
        .position(|l| l.trim_start().starts_with("pub fn"))
        .unwrap();
    assert!(lines[..first_body].iter().any(|l| *l == IMPORT));
    assert!(lines[..first_body].iter().any(|l| *l == order_import));
    assert!(text.contains("\"invoices\""));
    assert!(text.contains("\"orders\""));
}

#[test]
fn test_corrupt_file_is_surfaced_not_patched() {
    let dir = tempfile::tempdir().unwrap();
    let path = route_file(&dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let original = "pub fn home() {}\nuse crate::late::Import;\n";
    fs::write(&path, original).unwrap();

    let err = merge_route(&path, &web_boilerplate(), "invoices", IMPORT, BLOCK).unwrap_err();
    assert!(err.to_string().contains("malformed"));
    // file untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
