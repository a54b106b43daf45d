use std::sync::Arc;

use sqlcraft::prelude::*;

struct Order;
struct Item;
struct CustomerProfile;

#[test]
fn test_formatted_select_one_clause_per_line() {
    let sql = select::<Order>()
        .columns(["id", "status"])
        .inner_join::<Item>()
        .on(cmp(tcol::<Item>("order_id"), Operator::Eq, tcol::<Order>("id")))
        .filter(eq("status", "open"))
        .order_desc("id")
        .limit(20)
        .build_with(CompileOptions::FORMAT)
        .expect("formatted select should compile");

    assert_eq!(
        sql,
        "SELECT id, status\n\
         FROM Order O\n\
         INNER JOIN Item I ON I.order_id = O.id\n\
         WHERE status = 'open'\n\
         ORDER BY id DESC\n\
         LIMIT 20"
    );
}

#[test]
fn test_script_separator_and_newline_flags() {
    let opts =
        CompileOptions::FORMAT | CompileOptions::APPEND_SEPARATOR | CompileOptions::TRAILING_NEWLINE;

    let mut script = String::new();
    update_table("orders")
        .set("status", val("archived"))
        .filter(cmp(col("created_at"), Operator::Lt, param(1)))
        .build_into(&mut script, opts)
        .expect("update should compile");
    delete_from("order_events")
        .filter(cmp(col("created_at"), Operator::Lt, param(1)))
        .build_into(&mut script, opts)
        .expect("delete should compile");

    assert_eq!(
        script,
        "UPDATE orders\nSET status = 'archived'\nWHERE created_at < $1;\n\
         DELETE FROM order_events\nWHERE created_at < $1;\n"
    );
}

#[test]
fn test_with_block_keeps_separator_at_the_end() {
    let sql = with("recent", select_from("orders").filter(gt("id", 1000)))
        .then(select_from("recent").columns(["id", "status"]).order_asc("id"))
        .build_with(CompileOptions::APPEND_SEPARATOR)
        .expect("with block should compile");

    assert_eq!(
        sql,
        "WITH recent AS (SELECT * FROM orders WHERE id > 1000) \
         SELECT id, status FROM recent ORDER BY id ASC;"
    );
}

#[test]
fn test_dialect_converters_apply_end_to_end() {
    let compiler = GenericCompiler::new()
        .with_dataset_converter(|info| format!("app_{}", info.name().to_lowercase()))
        .with_object_converter(|name| name.to_lowercase())
        .into_shared();

    let sql = select::<CustomerProfile>()
        .column(tcol::<CustomerProfile>("Email"))
        .compiled_by(compiler)
        .build()
        .expect("dialect select should compile");

    assert_eq!(sql, "SELECT C.email FROM app_customerprofile C");
}

#[test]
fn test_cache_returns_shared_compiled_text() {
    let cache = QueryCache::new();
    let build = || select_from("orders").filter(eq("status", "open")).build();

    let first = cache
        .get_or_build("open-orders", build)
        .expect("cached build should compile");
    let second = cache
        .get_or_build("open-orders", build)
        .expect("cache hit should not fail");

    assert_eq!(&*first, "SELECT * FROM orders WHERE status = 'open'");
    assert!(Arc::ptr_eq(&first, &second));
}
