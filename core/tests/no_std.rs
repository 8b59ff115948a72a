//! Test that relnode-core compiles and works in no_std environments
//!
//! Run with: cargo test -p relnode-core --no-default-features

#![no_std]

extern crate alloc;

use alloc::string::ToString;
use relnode_core::{Column, Dialect, JoinKind, RelationNode, Select, Table};

fn nodes() -> (RelationNode, RelationNode) {
    let customers = Table::new("customers").with_column(Column::new("id", "integer").primary());
    let orders = Table::new("orders")
        .with_column(Column::new("customer_id", "integer"))
        .references("customer_id", &customers, "id");
    (
        RelationNode::new(orders.into_relation()).with_alias("o"),
        RelationNode::new(customers.into_relation()).with_alias("c"),
    )
}

#[test]
fn test_join_inference_no_std() {
    let (orders, customers) = nodes();
    let join = orders.join(customers).unwrap();
    assert_eq!(join.kind(), JoinKind::ChildToParent);
    assert_eq!(join.on_clause(), "on (o.customer_id=c.id)");
}

#[test]
fn test_render_no_std() {
    let (orders, customers) = nodes();
    let sql = Select::from(customers.join(orders).unwrap())
        .to_sql(&Dialect::SQLite)
        .unwrap();
    assert_eq!(
        sql,
        "select c.id, o.customer_id from \"customers\" as c \
         left join \"orders\" as o on (c.id=o.customer_id)"
    );
}

#[test]
fn test_error_display_no_std() {
    let tags = RelationNode::new(Table::new("tags").into_relation());
    let (orders, _) = nodes();
    let err = tags.join(orders).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no association found between `tags` and `orders`"
    );
}
