use relnode::error::RelnodeError;
use relnode::prelude::*;

mod common;

use common::{node, shop};

#[test]
fn test_select_whole_tree() {
    let shop = shop();
    let join = node(&shop.orders, "o")
        .join(node(&shop.customers, "c"))
        .unwrap();

    let sql = Select::from(join).to_sql(&Dialect::SQLite).unwrap();
    assert_eq!(
        sql,
        "select o.id, o.customer_id, o.total, c.id, c.name from \"orders\" as o \
         left join \"customers\" as c on (o.customer_id=c.id)"
    );
}

#[test]
fn test_select_disambiguates_default_aliases() {
    let shop = shop();
    let join = RelationNode::new(shop.orders.clone())
        .join(RelationNode::new(shop.customers.clone()))
        .unwrap()
        .join(RelationNode::new(shop.order_items.clone()))
        .unwrap();
    assert_eq!(join.alias(), DEFAULT_ALIAS);
    assert_eq!(join.predicate(), "this.id=this.order_id");

    let sql = Select::from(join)
        .columns([
            Projection::column("this2", "name"),
            Projection::column("this3", "product_id"),
        ])
        .to_sql(&Dialect::PostgreSQL)
        .unwrap();
    assert_eq!(
        sql,
        "select this2.name, this3.product_id from \"orders\" as this1 \
         left join \"customers\" as this2 on (this1.customer_id=this2.id) \
         left join \"order_items\" as this3 on (this1.id=this3.order_id)"
    );
}

#[test]
fn test_select_filters_ordering_and_paging() {
    let shop = shop();
    let sql = Select::from(node(&shop.products, "p"))
        .columns([Projection::column("p", "title")])
        .filter("p.title like 'a%'")
        .order_by("p.title", OrderBy::Asc)
        .order_by("p.id", OrderBy::Desc)
        .limit(20)
        .to_sql(&Dialect::MySQL)
        .unwrap();

    assert_eq!(
        sql,
        "select p.title from `products` as p where p.title like 'a%' \
         order by p.title asc, p.id desc limit 20"
    );
}

#[test]
fn test_select_keeps_builder_node_untouched() {
    let shop = shop();
    let select = Select::from(RelationNode::new(shop.tags.clone()));
    let first = select.to_sql(&Dialect::SQLite).unwrap();
    let second = select.to_sql(&Dialect::SQLite).unwrap();

    assert_eq!(first, "select this1.label from \"tags\" as this1");
    assert_eq!(first, second);
    assert_eq!(select.node().alias(), DEFAULT_ALIAS);
}

#[test]
fn test_select_over_view() {
    let shop = shop();
    let sql = Select::from(node(&shop.customer_totals, "ct"))
        .filter("ct.total > 100")
        .to_sql(&Dialect::SQLite)
        .unwrap();
    assert_eq!(
        sql,
        "select ct.customer_id, ct.total from \"customer_totals\" as ct where ct.total > 100"
    );
}

#[test]
fn test_select_rejects_empty_projection() {
    let shop = shop();
    let err = Select::from(node(&shop.tags, "t"))
        .columns(Vec::new())
        .to_sql(&Dialect::SQLite)
        .unwrap_err();
    assert_eq!(err, RelnodeError::EmptyProjection);
}
