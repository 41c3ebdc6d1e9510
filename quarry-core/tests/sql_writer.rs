#[cfg(test)]
mod tests {
    use quarry_core::{Conflict, Expr, Select, SqlWriter, SqliteSqlWriter, Value, literal};

    const WRITER: SqliteSqlWriter = SqliteSqlWriter::new();

    #[test]
    fn strings_are_quoted_and_escaped() {
        assert_eq!(literal("Chais"), "'Chais'");
        assert_eq!(literal(String::from("")), "''");
        assert_eq!(literal("Chef Anton's"), "'Chef Anton''s'");
        assert_eq!(literal("''"), "''''''");
        assert_eq!(literal("Gustaf's Knäckebröd"), "'Gustaf''s Knäckebröd'");
    }

    #[test]
    fn escaping_doubles_every_quote() {
        let inputs = [
            "'",
            "a'b'c",
            "Chais' or '1' = '1",
            "trailing'",
            "'leading",
            "über ' 漢字 '' ",
        ];
        for input in inputs {
            let escaped = literal(input);
            let quotes = input.matches('\'').count();
            assert_eq!(escaped.matches('\'').count(), quotes * 2 + 2);
            assert!(escaped.starts_with('\'') && escaped.ends_with('\''));
            let unquoted = escaped[1..escaped.len() - 1].replace("''", "'");
            assert_eq!(unquoted, input);
        }
    }

    #[test]
    fn other_literals() {
        assert_eq!(literal(1), "1");
        assert_eq!(literal(-42i64), "-42");
        assert_eq!(literal(18.0), "18.0");
        assert_eq!(literal(102.132), "102.132");
        assert_eq!(literal(0.5f32), "0.5");
        assert_eq!(literal(true), "true");
        assert_eq!(literal(false), "false");
        assert_eq!(literal(None::<i32>), "null");
        assert_eq!(literal(Some("x")), "'x'");
        assert_eq!(literal(Value::Null), "null");
        assert_eq!(literal(Value::Varchar(None)), "null");
        assert_eq!(literal(Value::Int16(Some(7))), "7");
        assert_eq!(literal(vec![0x0Au8, 0xBC]), "X'0ABC'");
        assert_eq!(literal(Value::Blob(Some([0xFFu8].into()))), "X'FF'");
        assert_eq!(literal(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(literal(f64::INFINITY), "1.0e+10000");
        assert_eq!(literal(f64::NEG_INFINITY), "-1.0e+10000");
        assert_eq!(literal(f32::NAN), "null");
    }

    #[test]
    fn expressions_are_verbatim() {
        assert_eq!(literal(Expr::unescaped("datetime('now')")), "datetime('now')");
        assert_eq!(literal(Expr::scoped("cat", "category_id")), "cat.category_id");
        assert_eq!(
            literal(Select::row_count().from(["Products"])),
            "SELECT count(*) FROM Products"
        );
    }

    #[test]
    fn writer_primitives() {
        let mut out = String::new();
        WRITER.write_escaped(&mut out, "a,b,c", ',', ";;");
        assert_eq!(out, "a;;b;;c");
        out.clear();
        WRITER.write_unescaped(&mut out, "x'y");
        assert_eq!(out, "x'y");
        out.clear();
        WRITER.write_conflict(&mut out, Some(Conflict::Abort));
        assert_eq!(out, " OR ABORT");
        out.clear();
        WRITER.write_conflict(&mut out, None);
        assert!(out.is_empty());
    }

    #[test]
    fn conflict_keywords() {
        let keywords = [
            Conflict::Rollback,
            Conflict::Replace,
            Conflict::Ignore,
            Conflict::Abort,
            Conflict::Fail,
        ]
        .map(|v| v.to_string());
        assert_eq!(keywords, ["ROLLBACK", "REPLACE", "IGNORE", "ABORT", "FAIL"]);
    }
}
