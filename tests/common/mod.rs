#![allow(dead_code)]

use relnode::prelude::*;
use std::sync::Arc;

/// customers <- orders <- order_items -> products, plus a view and an
/// unrelated table.
pub struct Shop {
    pub customers: Arc<dyn Relation>,
    pub orders: Arc<dyn Relation>,
    pub products: Arc<dyn Relation>,
    pub order_items: Arc<dyn Relation>,
    pub customer_totals: Arc<dyn Relation>,
    pub tags: Arc<dyn Relation>,
}

pub struct Customer;

pub fn shop() -> Shop {
    let customers = Table::new("customers")
        .with_column(Column::new("id", "integer").primary())
        .with_column(Column::new("name", "text").not_null())
        .record::<Customer>();
    let orders = Table::new("orders")
        .with_column(Column::new("id", "integer").primary())
        .with_column(Column::new("customer_id", "integer").not_null())
        .with_column(Column::new("total", "real"))
        .references("customer_id", &customers, "id");
    let products = Table::new("products")
        .with_column(Column::new("id", "integer").primary())
        .with_column(Column::new("title", "text"));
    let order_items = Table::new("order_items")
        .with_column(Column::new("order_id", "integer"))
        .with_column(Column::new("product_id", "integer"))
        .references("order_id", &orders, "id")
        .references("product_id", &products, "id");
    let customer_totals = View::new("customer_totals")
        .with_definition("select customer_id, sum(total) as total from orders group by customer_id")
        .with_column(Column::new("customer_id", "integer"))
        .with_column(Column::new("total", "real"))
        .references("customer_id", &customers, "id");
    let tags = Table::new("tags").with_column(Column::new("label", "text"));

    Shop {
        customers: customers.into_relation(),
        orders: orders.into_relation(),
        products: products.into_relation(),
        order_items: order_items.into_relation(),
        customer_totals: customer_totals.into_relation(),
        tags: tags.into_relation(),
    }
}

/// employees and departments reference each other; employees also
/// reference themselves through `manager_id`.
pub struct Org {
    pub employees: Arc<dyn Relation>,
    pub departments: Arc<dyn Relation>,
}

pub fn org() -> Org {
    let departments_ref = Table::new("departments");
    let employees = Table::new("employees")
        .with_column(Column::new("id", "integer").primary())
        .with_column(Column::new("manager_id", "integer"))
        .with_column(Column::new("department_id", "integer"))
        .references("department_id", &departments_ref, "id");
    let employees = {
        let self_ref = Table::new("employees");
        employees.references("manager_id", &self_ref, "id")
    };
    let departments = Table::new("departments")
        .with_column(Column::new("id", "integer").primary())
        .with_column(Column::new("head_id", "integer"))
        .references("head_id", &employees, "id");

    Org {
        employees: employees.into_relation(),
        departments: departments.into_relation(),
    }
}

pub fn node(relation: &Arc<dyn Relation>, alias: &str) -> RelationNode {
    RelationNode::new(relation.clone()).with_alias(alias)
}
