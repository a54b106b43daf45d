//! Clause ordering, trailing modifiers, and compile options.

use pretty_assertions::assert_eq;

use crate::prelude::*;

struct Order;
struct Item;
struct Customer;

#[test]
fn test_clause_order_is_canonical_regardless_of_call_order() {
    let sql = select::<Order>()
        .order_asc("id")
        .having(cmp(func("COUNT", [star()]), Operator::Gt, val(1)))
        .group_by("status")
        .filter(eq("status", "open"))
        .inner_join::<Item>()
        .on(cmp(tcol::<Item>("order_id"), Operator::Eq, tcol::<Order>("id")))
        .columns(["status"])
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT status FROM Order O \
         INNER JOIN Item I ON I.order_id = O.id \
         WHERE status = 'open' \
         GROUP BY status \
         HAVING COUNT(*) > 1 \
         ORDER BY id ASC"
    );
}

#[test]
fn test_joins_preserve_registration_order() {
    let sql = select::<Order>()
        .inner_join::<Item>()
        .on(cmp(tcol::<Item>("order_id"), Operator::Eq, tcol::<Order>("id")))
        .left_join::<Customer>()
        .on(cmp(
            tcol::<Customer>("id"),
            Operator::Eq,
            tcol::<Order>("customer_id"),
        ))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM Order O \
         INNER JOIN Item I ON I.order_id = O.id \
         LEFT JOIN Customer C ON C.id = O.customer_id"
    );
}

#[test]
fn test_cross_join_has_no_on_clause() {
    let sql = select::<Order>().cross_join::<Item>().build().unwrap();
    assert_eq!(sql, "SELECT * FROM Order O CROSS JOIN Item I");
}

#[test]
fn test_join_registers_exactly_one_node() {
    let query = select::<Order>()
        .inner_join::<Item>()
        .on(cmp(tcol::<Item>("order_id"), Operator::Eq, tcol::<Order>("id")));
    assert_eq!(query.clauses().entries(SelectPosition::Join).len(), 1);
}

#[test]
fn test_limit_called_twice_replaces() {
    let sql = select_from("t").limit(10).limit(25).build().unwrap();
    assert_eq!(sql, "SELECT * FROM t LIMIT 25");
}

#[test]
fn test_for_update_is_idempotent() {
    let sql = select_from("t").for_update().for_update().build().unwrap();
    assert_eq!(sql, "SELECT * FROM t FOR UPDATE");
}

#[test]
fn test_limit_offset() {
    let sql = select_from("t").limit(10).offset(20).build().unwrap();
    assert_eq!(sql, "SELECT * FROM t LIMIT 10 OFFSET 20");
}

#[test]
fn test_union_all() {
    let sql = select_from("a").union_all(select_from("b")).build().unwrap();
    assert_eq!(sql, "SELECT * FROM a UNION ALL SELECT * FROM b");
}

#[test]
fn test_union_follows_limit() {
    let sql = select_from("a")
        .limit(5)
        .union(select_from("b"))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM a LIMIT 5 UNION SELECT * FROM b");
}

#[test]
fn test_multiple_from_sources() {
    let sql = select_from("a").from_token("b").build().unwrap();
    assert_eq!(sql, "SELECT * FROM a, b");
}

#[test]
fn test_add_ordered_controls_order_within_position() {
    let sql = select_from("t")
        .add_ordered(col("b"), SelectPosition::Columns, 2)
        .add_ordered(col("a"), SelectPosition::Columns, 1)
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT a, b FROM t");
}

#[test]
fn test_format_renders_one_clause_per_line() {
    let sql = select_from("users")
        .columns(["id"])
        .filter(eq("active", true))
        .build_with(CompileOptions::FORMAT)
        .unwrap();
    assert_eq!(sql, "SELECT id\nFROM users\nWHERE active = TRUE");
}

#[test]
fn test_append_separator() {
    let sql = select_from("users")
        .columns(["id"])
        .build_with(CompileOptions::APPEND_SEPARATOR)
        .unwrap();
    assert_eq!(sql, "SELECT id FROM users;");
}

#[test]
fn test_trailing_newline_follows_separator() {
    let sql = select_from("users")
        .build_with(CompileOptions::APPEND_SEPARATOR | CompileOptions::TRAILING_NEWLINE)
        .unwrap();
    assert_eq!(sql, "SELECT * FROM users;\n");
}

#[test]
fn test_subquery_stays_compact_under_format() {
    let sql = select_from("users")
        .filter(exists(
            select_from("audit").filter(raw_cond("audit.user_id = users.id")),
        ))
        .build_with(CompileOptions::FORMAT)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT *\nFROM users\nWHERE EXISTS (SELECT * FROM audit WHERE audit.user_id = users.id)"
    );
}

#[test]
fn test_build_into_composes_scripts() {
    let opts = CompileOptions::APPEND_SEPARATOR | CompileOptions::TRAILING_NEWLINE;
    let mut script = String::new();
    delete_from("staging_a").build_into(&mut script, opts).unwrap();
    delete_from("staging_b").build_into(&mut script, opts).unwrap();
    assert_eq!(script, "DELETE FROM staging_a;\nDELETE FROM staging_b;\n");
}
