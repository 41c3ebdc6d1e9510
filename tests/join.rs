#[cfg(test)]
mod tests {
    use quarry::{Expr, Select};

    #[test]
    fn implicit_join_with_aliases() {
        let pod = Expr::alias("Products", "pod");
        let cat = Expr::alias("Categories", "cat");
        let statement = Select::produce([
            pod.column("product_name"),
            pod.column("price"),
            pod.column("category_id"),
            cat.column("category_name"),
        ])
        .from([&pod, &cat])
        .where_(pod.column("category_id"))
        .eq(cat.column("category_id"))
        .and(pod.column("price"))
        .gt(20)
        .group_by([pod.column("category_id")])
        .having(pod.column("price"))
        .gt(30)
        .order_by([pod.column("price")])
        .desc();
        assert_eq!(
            statement.as_str(),
            "SELECT pod.product_name, pod.price, pod.category_id, cat.category_name FROM Products AS pod, Categories AS cat \
             WHERE pod.category_id = cat.category_id AND pod.price > 20 GROUP BY pod.category_id HAVING pod.price > 30 ORDER BY pod.price DESC"
        );
    }

    #[test]
    fn full_table_name_scoping() {
        let statement = Select::produce([
            Expr::scoped("Products", "product_name"),
            Expr::scoped("Products", "category_id"),
            Expr::scoped("Categories", "category_name"),
        ])
        .from(["Products", "Categories"])
        .where_(Expr::scoped("Products", "category_id"))
        .eq(Expr::scoped("Categories", "category_id"))
        .and(Expr::scoped("Products", "price"))
        .gt(10)
        .order_by([Expr::scoped("Products", "price")]);
        assert_eq!(
            statement.as_str(),
            "SELECT Products.product_name, Products.category_id, Categories.category_name FROM Products, Categories \
             WHERE Products.category_id = Categories.category_id AND Products.price > 10 ORDER BY Products.price"
        );
    }

    #[test]
    fn using() {
        let statement = Select::produce(["product_name", "category_name"])
            .from(["Products", "Categories"])
            .using(["category_id"]);
        assert_eq!(
            statement.as_str(),
            "SELECT product_name, category_name FROM Products, Categories USING (category_id)"
        );
    }

    #[test]
    fn join_on() {
        let pod = Expr::alias("Products", "pod");
        let cat = Expr::alias("Categories", "cat");
        let columns = [
            pod.column("product_name"),
            pod.column("category_id"),
            cat.column("category_name"),
        ];
        let statement = Select::produce(columns.clone())
            .from([&pod])
            .join(&cat)
            .on(pod.column("category_id"))
            .eq(cat.column("category_id"));
        assert_eq!(
            statement.as_str(),
            "SELECT pod.product_name, pod.category_id, cat.category_name FROM Products AS pod JOIN Categories AS cat ON pod.category_id = cat.category_id"
        );

        let statement = Select::produce(columns)
            .from([&pod])
            .join(&cat)
            .on(Expr::abs(pod.column("category_id")))
            .eq(Expr::abs(cat.column("category_id")));
        assert_eq!(
            statement.as_str(),
            "SELECT pod.product_name, pod.category_id, cat.category_name FROM Products AS pod JOIN Categories AS cat ON abs(pod.category_id) = abs(cat.category_id)"
        );
    }

    #[test]
    fn natural_and_cross_join() {
        let statement = Select::all()
            .from(["Categories"])
            .natural_join("Products")
            .where_(Expr::length("category_name"))
            .elt(9);
        assert_eq!(
            statement.as_str(),
            "SELECT * FROM Categories NATURAL JOIN Products WHERE length(category_name) <= 9"
        );
        let statement = Select::all().from(["Products"]).cross_join("Categories");
        assert_eq!(
            statement.as_str(),
            "SELECT * FROM Products CROSS JOIN Categories"
        );
    }

    #[test]
    fn left_join() {
        let pod = Expr::alias("Products", "pod");
        let cat = Expr::alias("Categories", "cat");
        let statement = Select::produce([
            pod.column("product_name"),
            pod.column("supplier_id"),
            pod.column("category_id"),
            cat.column("category_name"),
        ])
        .from([&pod])
        .left_join(&cat)
        .on(pod.column("category_id"))
        .eq(cat.column("category_id"));
        assert_eq!(
            statement.as_str(),
            "SELECT pod.product_name, pod.supplier_id, pod.category_id, cat.category_name FROM Products AS pod LEFT JOIN Categories AS cat ON pod.category_id = cat.category_id"
        );

        let statement = Select::produce([pod.column("product_name"), cat.column("category_name")])
            .from([&pod])
            .left_join(&cat)
            .using(["category_id"]);
        assert_eq!(
            statement.as_str(),
            "SELECT pod.product_name, cat.category_name FROM Products AS pod LEFT JOIN Categories AS cat USING (category_id)"
        );

        let statement = Select::produce([pod.column("product_name"), cat.column("category_name")])
            .from([&pod])
            .left_natural_join(&cat)
            .where_("price")
            .lt(20);
        assert_eq!(
            statement.as_str(),
            "SELECT pod.product_name, cat.category_name FROM Products AS pod NATURAL LEFT JOIN Categories AS cat WHERE price < 20"
        );
    }

    #[test]
    fn no_inner_or_outer_keyword() {
        let statement = Select::all()
            .from(["A"])
            .join("B")
            .left_join("C")
            .natural_join("D")
            .cross_join("E")
            .left_natural_join("F");
        assert!(!statement.as_str().contains("INNER"));
        assert!(!statement.as_str().contains("OUTER"));
    }
}
