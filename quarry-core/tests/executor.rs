#[cfg(test)]
mod tests {
    use quarry_core::{
        Binder, Entity, Executor, QueryResult, Result, RowLabeled, RowNames, RowsAffected, Value,
        stream::{self, Stream, TryStreamExt},
    };
    use std::sync::LazyLock;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Answers every query with the same mixed sequence of rows and counts.
    struct Replay {
        items: Vec<QueryResult>,
        received: Vec<String>,
    }

    impl Executor for Replay {
        fn run(&mut self, query: String) -> impl Stream<Item = Result<QueryResult>> + Send {
            self.received.push(query);
            stream::iter(self.items.clone().into_iter().map(Ok))
        }
    }

    #[derive(Default, Debug, PartialEq)]
    struct Region {
        region_id: i64,
        region_description: String,
    }

    impl Entity for Region {
        fn binder() -> &'static Binder<Self> {
            static BINDER: LazyLock<Binder<Region>> = LazyLock::new(|| {
                Binder::new()
                    .setter("region_id", |e: &mut Region, v: i64| e.region_id = v)
                    .setter("region_description", |e: &mut Region, v: String| {
                        e.region_description = v
                    })
            });
            &BINDER
        }
    }

    fn replay() -> Replay {
        let labels: RowNames = ["region_id".to_string(), "region_description".to_string()].into();
        let row = |id: i64, description: &str| {
            QueryResult::Row(RowLabeled::new(
                labels.clone(),
                [
                    Value::Int64(Some(id)),
                    Value::Varchar(Some(description.into())),
                ]
                .into(),
            ))
        };
        Replay {
            items: vec![
                row(1, "Eastern"),
                QueryResult::Affected(RowsAffected {
                    rows_affected: 2,
                    last_affected_id: Some(4),
                }),
                row(2, "Western"),
                QueryResult::Affected(RowsAffected {
                    rows_affected: 1,
                    last_affected_id: None,
                }),
            ],
            received: Vec::new(),
        }
    }

    #[tokio::test]
    async fn fetch_keeps_the_rows() {
        init_logs();
        let mut executor = replay();
        let rows = executor
            .fetch("SELECT * FROM Region".into())
            .try_collect::<Vec<_>>()
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get_column("region_id"), Some(&Value::Int64(Some(2))));
        assert_eq!(executor.received, ["SELECT * FROM Region"]);
    }

    #[tokio::test]
    async fn execute_sums_the_counts() {
        init_logs();
        let mut executor = replay();
        let affected = executor
            .execute("DELETE FROM Region".into())
            .await
            .unwrap();
        assert_eq!(
            affected,
            RowsAffected {
                rows_affected: 3,
                last_affected_id: Some(4),
            }
        );
    }

    #[tokio::test]
    async fn find_binds_entities() {
        init_logs();
        let mut executor = replay();
        let regions = Region::find_many(&mut executor, "SELECT * FROM Region")
            .try_collect::<Vec<_>>()
            .await
            .unwrap();
        assert_eq!(
            regions,
            [
                Region {
                    region_id: 1,
                    region_description: "Eastern".into(),
                },
                Region {
                    region_id: 2,
                    region_description: "Western".into(),
                },
            ]
        );
        let first = Region::find_one(&mut executor, "SELECT * FROM Region")
            .await
            .unwrap();
        assert_eq!(first.map(|v| v.region_id), Some(1));
    }
}
