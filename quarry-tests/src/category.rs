use quarry::Entity;

#[derive(Entity, Default, Debug, Clone, PartialEq)]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
    pub description: Option<String>,
}

impl Category {
    pub const TABLE_NAME: &'static str = "Categories";
}
