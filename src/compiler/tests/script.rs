//! WITH, DECLARE, SET, and IF statement rendering.

use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn test_with_single_cte() {
    let sql = with("recent", select_from("orders").filter(gt("id", 100)))
        .then(select_from("recent"))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "WITH recent AS (SELECT * FROM orders WHERE id > 100) SELECT * FROM recent"
    );
}

#[test]
fn test_with_multiple_ctes() {
    let sql = with("a", select_from("t1"))
        .and_with("b", select_from("t2"))
        .then(select_from("b"))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "WITH a AS (SELECT * FROM t1), b AS (SELECT * FROM t2) SELECT * FROM b"
    );
}

#[test]
fn test_with_recursive() {
    let sql = with("nums", select_from("seed"))
        .recursive()
        .then(select_from("nums"))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "WITH RECURSIVE nums AS (SELECT * FROM seed) SELECT * FROM nums"
    );
}

#[test]
fn test_with_requires_terminal() {
    let err = with("a", select_from("t")).build().unwrap_err();
    assert_eq!(err, BuildError::incomplete("terminal statement", "WITH block"));
}

#[test]
fn test_with_delete_terminal() {
    let sql = with("stale", select_from("sessions").filter(lt("seen", 100)))
        .then(delete_from("sessions").filter(raw_cond("id IN (SELECT id FROM stale)")))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "WITH stale AS (SELECT * FROM sessions WHERE seen < 100) \
         DELETE FROM sessions WHERE id IN (SELECT id FROM stale)"
    );
}

#[test]
fn test_with_formats_terminal_but_not_cte_bodies() {
    let sql = with("recent", select_from("orders"))
        .then(select_from("recent").column(col("id")))
        .build_with(CompileOptions::FORMAT)
        .unwrap();
    assert_eq!(
        sql,
        "WITH recent AS (SELECT * FROM orders)\nSELECT id\nFROM recent"
    );
}

#[test]
fn test_declare_with_initializer() {
    let compiler = GenericCompiler::new()
        .with_type_converter(|info, _| match info.name() {
            "i64" => "BIGINT".to_string(),
            other => other.to_string(),
        })
        .into_shared();
    let sql = declare("v_count", sql_type::<i64>())
        .init(val(0))
        .compiled_by(compiler)
        .build()
        .unwrap();
    assert_eq!(sql, "DECLARE v_count BIGINT = 0");
}

#[test]
fn test_declare_without_type_converter_fails() {
    let err = declare("v_count", sql_type::<i64>()).build().unwrap_err();
    assert_eq!(err, BuildError::MissingTypeConverter);
}

#[test]
fn test_set_variable() {
    let sql = set_var("v_count", val(42)).build().unwrap();
    assert_eq!(sql, "SET v_count = 42");
}

#[test]
fn test_if_with_else_branch() {
    let sql = if_(gt("v_count", 0))
        .then(update_table("t").set("flag", val(true)))
        .else_(delete_from("t"))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "IF v_count > 0 THEN UPDATE t SET flag = TRUE ELSE DELETE FROM t END IF"
    );
}

#[test]
fn test_if_requires_then_branch() {
    let err = if_(gt("v_count", 0)).build().unwrap_err();
    assert_eq!(err, BuildError::incomplete("THEN branch", "IF statement"));
}

#[test]
fn test_script_statements_compose_into_one_buffer() {
    let compiler = GenericCompiler::new()
        .with_type_converter(|info, _| match info.name() {
            "i64" => "BIGINT".to_string(),
            other => other.to_string(),
        })
        .into_shared();
    let opts = CompileOptions::APPEND_SEPARATOR | CompileOptions::TRAILING_NEWLINE;

    let mut script = String::new();
    declare("v_total", sql_type::<i64>())
        .init(val(0))
        .compiled_by(compiler)
        .build_into(&mut script, opts)
        .unwrap();
    set_var("v_total", raw("(SELECT COUNT(*) FROM orders)"))
        .build_into(&mut script, opts)
        .unwrap();
    assert_eq!(
        script,
        "DECLARE v_total BIGINT = 0;\nSET v_total = (SELECT COUNT(*) FROM orders);\n"
    );
}
