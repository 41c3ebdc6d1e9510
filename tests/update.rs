#[cfg(test)]
mod tests {
    use quarry::{Conflict, Expr, SqlWriter, Update};

    #[test]
    fn set_and_where() {
        let statement = Update::produce("Suppliers")
            .set("supplier_name", "New Name")
            .set("contact_name", "Small Wood")
            .set("address", "Middle Street of States")
            .set("city", "ZhuHai")
            .set("postal_code", "510665")
            .set("country", "China")
            .set("phone", "+86 13800 138000")
            .where_("supplier_id")
            .eq(1);
        assert_eq!(
            statement.as_str(),
            "UPDATE Suppliers SET supplier_name = 'New Name', contact_name = 'Small Wood', \
             address = 'Middle Street of States', city = 'ZhuHai', postal_code = '510665', \
             country = 'China', phone = '+86 13800 138000' WHERE supplier_id = 1"
        );
    }

    #[test]
    fn or_ignore() {
        let statement = Update::or_ignore("Suppliers")
            .set("supplier_id", 3)
            .set("supplier_name", "New Orleans Cajun Delights")
            .set("contact_name", "Shelley Burke")
            .where_("supplier_id")
            .eq(2);
        assert_eq!(
            statement.as_str(),
            "UPDATE OR IGNORE Suppliers SET supplier_id = 3, supplier_name = 'New Orleans Cajun Delights', \
             contact_name = 'Shelley Burke' WHERE supplier_id = 2"
        );
    }

    #[test]
    fn conflict_modes() {
        let cases = [
            (Update::or_rollback("T"), "UPDATE OR ROLLBACK T SET a = 1"),
            (Update::or_replace("T"), "UPDATE OR REPLACE T SET a = 1"),
            (Update::or_abort("T"), "UPDATE OR ABORT T SET a = 1"),
            (Update::or_fail("T"), "UPDATE OR FAIL T SET a = 1"),
            (
                Update::with_conflict("T", Some(Conflict::Ignore)),
                "UPDATE OR IGNORE T SET a = 1",
            ),
            (Update::produce("T"), "UPDATE T SET a = 1"),
        ];
        for (update, expected) in cases {
            assert_eq!(update.set("a", 1).build().as_str(), expected);
        }
    }

    #[test]
    fn assignments_from_expressions() {
        let statement = Update::produce("Products")
            .set("product_name", Expr::upper("product_name"))
            .set("unit", None::<&str>)
            .where_("price")
            .gt(100.5);
        assert_eq!(
            statement.as_str(),
            "UPDATE Products SET product_name = upper(product_name), unit = null WHERE price > 100.5"
        );
    }

    #[test]
    fn quotes_in_values() {
        let statement = Update::produce("Suppliers")
            .set("supplier_name", "Cooperativa de Quesos 'Las Cabras'")
            .build();
        assert_eq!(
            statement.as_str(),
            "UPDATE Suppliers SET supplier_name = 'Cooperativa de Quesos ''Las Cabras'''"
        );
    }

    #[test]
    fn dialect_renders_the_conflict_mode() {
        /// Engine without conflict clauses, booleans as integers.
        struct PlainWriter;
        impl SqlWriter for PlainWriter {
            fn as_dyn(&self) -> &dyn SqlWriter {
                self
            }
            fn write_value_bool(&self, out: &mut String, value: bool) {
                out.push_str(if value { "1" } else { "0" });
            }
            fn write_conflict(&self, _out: &mut String, _conflict: Option<Conflict>) {}
        }
        static WRITER: PlainWriter = PlainWriter;
        let update = Update::or_replace("Flags").with_writer(&WRITER);
        assert_eq!(update.conflict(), Some(Conflict::Replace));
        let statement = update.set("on", false).where_("flag_id").eq(true);
        assert_eq!(statement.as_str(), "UPDATE Flags SET on = 0 WHERE flag_id = 1");
        assert_eq!(
            Update::or_fail("Flags")
                .set("on", false)
                .set("name", "x")
                .build()
                .as_str(),
            "UPDATE OR FAIL Flags SET on = false, name = 'x'"
        );
    }
}
