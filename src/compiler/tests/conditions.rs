//! Condition chain, group, operator, and CASE rendering.

use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn test_chain_renders_links_between_siblings() {
    let sql = select_from("t")
        .filter(eq("a", 1).and())
        .filter(eq("b", 2).or())
        .filter(eq("c", 3))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE a = 1 AND b = 2 OR c = 3");
}

#[test]
fn test_unset_link_defaults_to_and() {
    let sql = select_from("t")
        .filter(eq("a", 1))
        .filter(eq("b", 2))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE a = 1 AND b = 2");
}

#[test]
fn test_empty_group_renders_nothing() {
    let sql = select_from("t")
        .filter(group(Vec::<Expr>::new()))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t");
}

#[test]
fn test_negated_empty_group_renders_nothing() {
    let sql = select_from("t")
        .filter(group(Vec::<Expr>::new()).not())
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t");
}

#[test]
fn test_group_parenthesizes_and_chains() {
    let sql = select_from("t")
        .filter(group([
            Expr::from(eq("a", 1).or()),
            Expr::from(eq("b", 2)),
        ]))
        .filter(eq("c", 3))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE (a = 1 OR b = 2) AND c = 3");
}

#[test]
fn test_negated_group() {
    let sql = select_from("t")
        .filter(group([Expr::from(eq("a", 1).or()), Expr::from(eq("b", 2))]).not())
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE NOT (a = 1 OR b = 2)");
}

#[test]
fn test_negated_condition() {
    let sql = select_from("t").filter(eq("a", 1).not()).build().unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE NOT a = 1");
}

#[test]
fn test_noop_sibling_is_skipped_with_its_link() {
    let sql = select_from("t")
        .filter(eq("a", 1).and())
        .filter(Expr::NoOp)
        .filter(eq("b", 2))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE a = 1 AND b = 2");
}

#[test]
fn test_null_checks() {
    let sql = select_from("t")
        .filter(is_null("deleted_at").and())
        .filter(is_not_null("approved_at"))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM t WHERE deleted_at IS NULL AND approved_at IS NOT NULL"
    );
}

#[test]
fn test_in_list() {
    let sql = select_from("t").filter(is_in("id", [1, 2, 3])).build().unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE id IN (1, 2, 3)");
}

#[test]
fn test_not_in_list() {
    let sql = select_from("t")
        .filter(not_in("status", ["void", "failed"]))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE status NOT IN ('void', 'failed')");
}

#[test]
fn test_between() {
    let sql = select_from("t")
        .filter(between("total", 10, 20))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE total BETWEEN 10 AND 20");
}

#[test]
fn test_not_between() {
    let sql = select_from("t")
        .filter(not_between("total", 10, 20))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE total NOT BETWEEN 10 AND 20");
}

#[test]
fn test_like_and_ilike() {
    let sql = select_from("t")
        .filter(like("name", "%ann%").or())
        .filter(ilike("email", "%@example.com"))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM t WHERE name LIKE '%ann%' OR email ILIKE '%@example.com'"
    );
}

#[test]
fn test_exists_subquery() {
    let sql = select_from("users")
        .filter(exists(
            select_from("orders").filter(raw_cond("orders.user_id = users.id")),
        ))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE EXISTS (SELECT * FROM orders WHERE orders.user_id = users.id)"
    );
}

#[test]
fn test_not_exists_subquery() {
    let sql = select_from("users")
        .filter(not_exists(
            select_from("bans").filter(raw_cond("bans.user_id = users.id")),
        ))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE NOT EXISTS (SELECT * FROM bans WHERE bans.user_id = users.id)"
    );
}

#[test]
fn test_raw_condition_renders_verbatim() {
    let sql = select_from("t")
        .filter(raw_cond("price > cost * 2"))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE price > cost * 2");
}

#[test]
fn test_text_literal_escapes_quotes() {
    let sql = select_from("t").filter(eq("name", "O'Brien")).build().unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE name = 'O''Brien'");
}

#[test]
fn test_named_parameter() {
    let sql = select_from("t")
        .filter(cmp(col("id"), Operator::Eq, named_param("id")))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE id = :id");
}

#[test]
fn test_case_expression() {
    let sql = select_from("t")
        .column(
            case_when(eq("x", 1))
                .then("A")
                .when(eq("x", 2))
                .then("B")
                .else_("C"),
        )
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT CASE WHEN x = 1 THEN 'A' WHEN x = 2 THEN 'B' ELSE 'C' END FROM t"
    );
}

#[test]
fn test_case_without_else() {
    let sql = select_from("t")
        .column(case_when(eq("x", 1)).then("A").end())
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT CASE WHEN x = 1 THEN 'A' END FROM t");
}

#[test]
fn test_case_aliased() {
    let sql = select_from("orders")
        .column(case_when(gt("total", 100)).then(1).else_(0).aliased("is_large"))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT CASE WHEN total > 100 THEN 1 ELSE 0 END AS is_large FROM orders"
    );
}

#[test]
fn test_function_call_in_order_by() {
    let sql = select_from("t")
        .order_by_expr(func("LOWER", [col("name")]), SortOrder::Asc)
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t ORDER BY LOWER(name) ASC");
}

#[test]
fn test_order_by_nulls_last() {
    let sql = select_from("t")
        .order_by("score", SortOrder::DescNullsLast)
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t ORDER BY score DESC NULLS LAST");
}
