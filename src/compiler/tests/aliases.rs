//! Alias resolution in rendered statements, converter delegates, and the
//! sub-render hook.

use pretty_assertions::assert_eq;

use crate::compiler::{Render, RenderContext, SubRenderFn};
use crate::prelude::*;

struct Order;
struct Item;
struct Offer;

#[test]
fn test_alias_collision_suffixes() {
    let sql = select::<Order>()
        .column(tcol::<Order>("id"))
        .inner_join::<Item>()
        .on(cmp(tcol::<Item>("order_id"), Operator::Eq, tcol::<Order>("id")))
        .inner_join::<Offer>()
        .on(cmp(tcol::<Offer>("order_id"), Operator::Eq, tcol::<Order>("id")))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT O.id FROM Order O \
         INNER JOIN Item I ON I.order_id = O.id \
         INNER JOIN Offer O1 ON O1.order_id = O.id"
    );
}

#[test]
fn test_explicit_alias_wins_over_earlier_auto_assignment() {
    let sql = select::<Order>()
        .column(tcol::<Order>("id"))
        .alias_for::<Order>("ord")
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT ord.id FROM Order ord");
}

#[test]
fn test_fresh_builders_assign_identical_aliases() {
    let build = || {
        select::<Order>()
            .inner_join::<Item>()
            .on(cmp(tcol::<Item>("order_id"), Operator::Eq, tcol::<Order>("id")))
            .build()
            .unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_join_alias_override_reaches_qualified_columns() {
    let sql = select::<Order>()
        .join::<Item>(JoinKind::Left)
        .aliased("line")
        .on(cmp(tcol::<Item>("order_id"), Operator::Eq, tcol::<Order>("id")))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM Order O LEFT JOIN Item line ON line.order_id = O.id"
    );
}

#[test]
fn test_dataset_converter_renames_typed_datasets() {
    let compiler = GenericCompiler::new()
        .with_dataset_converter(|info| format!("{}s", info.name().to_lowercase()))
        .into_shared();
    let sql = select::<Order>().compiled_by(compiler).build().unwrap();
    assert_eq!(sql, "SELECT * FROM orders O");
}

#[test]
fn test_object_converter_folds_names() {
    let compiler = GenericCompiler::new()
        .with_object_converter(|name| name.to_uppercase())
        .into_shared();
    let sql = select_from("users")
        .columns(["id", "email"])
        .compiled_by(compiler)
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT ID, EMAIL FROM USERS");
}

#[test]
fn test_star_bypasses_object_converter() {
    let compiler = GenericCompiler::new()
        .with_object_converter(|name| name.to_uppercase())
        .into_shared();
    let sql = select_from("users").compiled_by(compiler).build().unwrap();
    assert_eq!(sql, "SELECT * FROM USERS");
}

#[test]
fn test_type_converter_resolves_cast_targets() {
    let compiler = GenericCompiler::new()
        .with_type_converter(|info, len| {
            let base = match info.name() {
                "String" => "VARCHAR",
                "i64" => "BIGINT",
                other => other,
            };
            match len {
                Some(n) => format!("{base}({n})"),
                None => base.to_string(),
            }
        })
        .into_shared();
    let sql = select_from("t")
        .column(cast(col("id"), sql_type_len::<String>(80)))
        .compiled_by(compiler)
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT CAST(id AS VARCHAR(80)) FROM t");
}

#[test]
fn test_compile_expr_ad_hoc() {
    let compiler = GenericCompiler::new();
    let expr: Expr = eq("a", 1).into();
    let mut buf = String::new();
    compiler
        .compile_expr(&expr, &mut buf, CompileOptions::NONE)
        .unwrap();
    assert_eq!(buf, "a = 1");
}

#[test]
fn test_sub_render_hook_intercepts_children() {
    let hook: &SubRenderFn = &|expr, buf, cx| match expr {
        Expr::Column(c) => {
            buf.push('"');
            buf.push_str(&c.name);
            buf.push('"');
            Ok(())
        }
        other => other.render(buf, cx),
    };
    let aliases = AliasTable::new();
    let cx = RenderContext::new(&aliases, CompileOptions::NONE).with_sub_render(hook);

    let expr: Expr = eq("name", "x").into();
    let mut buf = String::new();
    expr.render(&mut buf, &cx).unwrap();
    assert_eq!(buf, "\"name\" = 'x'");
}
