use quarry::Entity;

#[derive(Entity, Default, Debug, Clone, PartialEq)]
pub struct Supplier {
    pub supplier_id: i32,
    pub supplier_name: String,
    pub contact_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
}

impl Supplier {
    pub const TABLE_NAME: &'static str = "Suppliers";

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        supplier_id: i32,
        supplier_name: &str,
        contact_name: &str,
        address: &str,
        city: &str,
        postal_code: &str,
        country: &str,
        phone: &str,
    ) -> Self {
        Self {
            supplier_id,
            supplier_name: supplier_name.into(),
            contact_name: contact_name.into(),
            address: address.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            phone: phone.into(),
        }
    }
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new(
            1,
            "Exotic Liquid",
            "Charlotte Cooper",
            "49 Gilbert St.",
            "London",
            "EC1 4SD",
            "UK",
            "(171) 555-2222",
        ),
        Supplier::new(
            2,
            "New Orleans Cajun Delights",
            "Shelley Burke",
            "P.O. Box 78934",
            "New Orleans",
            "70117",
            "USA",
            "(100) 555-4822",
        ),
        Supplier::new(
            3,
            "Grandma Kelly's Homestead",
            "Regina Murphy",
            "707 Oxford Rd.",
            "Ann Arbor",
            "48104",
            "USA",
            "(313) 555-5735",
        ),
        Supplier::new(
            4,
            "Tokyo Traders",
            "Yoshi Nagase",
            "9-8 Sekimai Musashino-shi",
            "Tokyo",
            "100",
            "Japan",
            "(03) 3555-5011",
        ),
        Supplier::new(
            5,
            "Cooperativa de Quesos 'Las Cabras'",
            "Antonio del Valle Saavedra",
            "Calle del Rosal 4",
            "Oviedo",
            "33007",
            "Spain",
            "(98) 598 76 54",
        ),
    ]
}
