use quarry::Entity;

/// Columns are prefixed (`cust_code`) while fields are not always.
#[derive(Entity, Default, Debug, Clone, PartialEq)]
pub struct Customer {
    #[quarry(name = "cust_code")]
    pub code: String,
    #[quarry(name = "cust_name")]
    pub name: String,
    pub cust_city: String,
    pub working_area: String,
    pub cust_country: String,
    /// Computed client side, never read from the database.
    #[quarry(ignore)]
    pub display_name: String,
}

impl Customer {
    pub const TABLE_NAME: &'static str = "Customers";

    pub fn new(code: &str, name: &str, city: &str, area: &str, country: &str) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            cust_city: city.into(),
            working_area: area.into(),
            cust_country: country.into(),
            display_name: String::new(),
        }
    }
}
