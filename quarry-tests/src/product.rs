use quarry::{Entity, Value};

#[derive(Entity, Default, Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub supplier_id: i32,
    pub category_id: i32,
    pub unit: Option<String>,
    pub price: f64,
}

impl Product {
    pub const TABLE_NAME: &'static str = "Products";
    pub const COLUMNS: [&'static str; 6] = [
        "product_id",
        "product_name",
        "supplier_id",
        "category_id",
        "unit",
        "price",
    ];

    pub fn new(
        product_id: i32,
        product_name: &str,
        supplier_id: i32,
        category_id: i32,
        unit: &str,
        price: f64,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            supplier_id,
            category_id,
            unit: Some(unit.into()),
            price,
        }
    }

    /// Cells as a driver would return them, integers as 64 bits.
    pub fn row(&self) -> Vec<Value> {
        vec![
            Value::Int64(Some(self.product_id as i64)),
            Value::Varchar(Some(self.product_name.clone())),
            Value::Int64(Some(self.supplier_id as i64)),
            Value::Int64(Some(self.category_id as i64)),
            Value::Varchar(self.unit.clone()),
            Value::Float64(Some(self.price)),
        ]
    }
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Chais", 1, 1, "10 boxes x 20 bags", 18.0),
        Product::new(2, "Chang", 1, 1, "24 - 12 oz bottles", 19.0),
        Product::new(3, "Aniseed Syrup", 1, 2, "12 - 550 ml bottles", 10.0),
        Product::new(4, "Chef Anton's Cajun Seasoning", 2, 2, "48 - 6 oz jars", 22.0),
        Product::new(5, "Chef Anton's Gumbo Mix", 2, 2, "36 boxes", 21.35),
        Product::new(6, "Grandma's Boysenberry Spread", 3, 2, "12 - 8 oz jars", 25.0),
        Product::new(7, "Uncle Bob's Organic Dried Pears", 3, 7, "12 - 1 lb pkgs.", 30.0),
        Product::new(8, "Northwoods Cranberry Sauce", 3, 2, "12 - 12 oz jars", 40.0),
        Product::new(9, "Mishi Kobe Niku", 4, 6, "18 - 500 g pkgs.", 97.0),
        Product::new(10, "Ikura", 4, 8, "12 - 200 ml jars", 31.0),
        Product::new(11, "Queso Cabrales", 5, 4, "1 kg pkg.", 21.0),
        Product::new(12, "Queso Manchego La Pastora", 5, 4, "10 - 500 g pkgs.", 38.0),
        Product::new(13, "Konbu", 6, 8, "2 kg box", 6.0),
        Product::new(14, "Tofu", 6, 7, "40 - 100 g pkgs.", 23.25),
        Product::new(15, "Genen Shouyu", 6, 2, "24 - 250 ml bottles", 15.5),
        Product::new(16, "Pavlova", 7, 3, "32 - 500 g boxes", 17.45),
        Product::new(17, "Alice Mutton", 7, 6, "20 - 1 kg tins", 39.0),
        Product::new(18, "Carnarvon Tigers", 7, 8, "16 kg pkg.", 62.5),
        Product::new(19, "Teatime Chocolate Biscuits", 8, 3, "10 boxes x 12 pieces", 9.2),
        Product::new(20, "Sir Rodney's Marmalade", 8, 3, "30 gift boxes", 81.0),
        Product::new(21, "Sir Rodney's Scones", 8, 3, "24 pkgs. x 4 pieces", 10.0),
        Product::new(22, "Gustaf's Knäckebröd", 9, 5, "24 - 500 g pkgs.", 21.0),
        Product::new(23, "Tunnbröd", 9, 5, "12 - 250 g pkgs.", 9.0),
    ]
}
