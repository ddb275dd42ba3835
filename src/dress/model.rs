use serde::{Deserialize, Serialize, Serializer};

/// Column order of the products file. Part of the on-disk format.
pub const CSV_HEADERS: [&str; 7] = [
    "id",
    "nome",
    "categoria",
    "tamanho",
    "preco",
    "quantidade",
    "descricao",
];

/// A single inventory item.
///
/// Field order matches [`CSV_HEADERS`]; the serde renames are the persisted
/// column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "tamanho")]
    pub size: String,
    #[serde(rename = "preco", serialize_with = "serialize_price")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "descricao")]
    pub description: String,
}

fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_price(*price))
}

/// Prices are always persisted and shown with two decimal places.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// A row as read from disk, before defaults are applied.
///
/// Every column is optional so that short rows and files with missing
/// columns still deserialize; [`RawProduct::into_product`] resolves defaults.
#[derive(Debug, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "nome")]
    pub name: Option<String>,
    #[serde(default, rename = "categoria")]
    pub category: Option<String>,
    #[serde(default, rename = "tamanho")]
    pub size: Option<String>,
    #[serde(default, rename = "preco")]
    pub price: Option<String>,
    #[serde(default, rename = "quantidade")]
    pub quantity: Option<String>,
    #[serde(default, rename = "descricao")]
    pub description: Option<String>,
}

impl RawProduct {
    /// Returns `None` for rows without an id (blank or corrupt rows).
    pub fn into_product(self) -> Option<Product> {
        let id = self.id.filter(|id| !id.is_empty())?;
        Some(Product {
            id,
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            size: self.size.unwrap_or_default(),
            price: self
                .price
                .and_then(|p| p.trim().parse::<f64>().ok())
                .filter(|p| p.is_finite())
                .unwrap_or(0.0),
            quantity: self
                .quantity
                .and_then(|q| q.trim().parse::<u32>().ok())
                .unwrap_or(0),
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Field values for a product that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub size: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            ..Default::default()
        }
    }

    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            size: self.size.trim().to_string(),
            price: self.price,
            quantity: self.quantity,
            description: self.description.trim().to_string(),
        }
    }
}

/// Field-level overrides for an existing product.
///
/// `None` (or an empty string) keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub description: Option<String>,
}

impl ProductUpdate {
    pub fn apply_to(&self, product: &mut Product) {
        override_text(&mut product.name, &self.name);
        override_text(&mut product.category, &self.category);
        override_text(&mut product.size, &self.size);
        override_text(&mut product.description, &self.description);
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
    }
}

fn override_text(field: &mut String, replacement: &Option<String>) {
    if let Some(value) = replacement.as_deref().map(str::trim) {
        if !value.is_empty() {
            *field = value.to_string();
        }
    }
}

/// Parses a price as typed by an operator. Accepts `,` or `.` as the decimal
/// separator. Negative and non-finite values are rejected.
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

pub fn parse_quantity(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, price: &str, quantity: &str) -> RawProduct {
        RawProduct {
            id: Some(id.to_string()),
            name: Some("Camiseta".to_string()),
            price: Some(price.to_string()),
            quantity: Some(quantity.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn raw_row_without_id_is_dropped() {
        assert!(raw("", "1.00", "1").into_product().is_none());
        assert!(RawProduct::default().into_product().is_none());
    }

    #[test]
    fn raw_row_coerces_bad_numbers_to_zero() {
        let product = raw("1", "abc", "-3").into_product().unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.quantity, 0);
        assert_eq!(product.category, "");
    }

    #[test]
    fn raw_row_keeps_valid_numbers() {
        let product = raw("2", "59.90", "10").into_product().unwrap();
        assert_eq!(product.price, 59.9);
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn price_accepts_comma_separator() {
        assert_eq!(parse_price("59,90"), Some(59.9));
        assert_eq!(parse_price(" 12.5 "), Some(12.5));
        assert_eq!(parse_price("0"), Some(0.0));
    }

    #[test]
    fn price_rejects_garbage_and_negatives() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("R$ 10"), None);
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn quantity_parsing() {
        assert_eq!(parse_quantity("10"), Some(10));
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("1.5"), None);
    }

    #[test]
    fn update_keeps_fields_left_blank() {
        let mut product = NewProduct::new("Calça", 120.0, 3).into_product("1".into());
        product.category = "Jeans".into();

        let update = ProductUpdate {
            name: Some("  ".into()),
            category: Some(String::new()),
            quantity: Some(7),
            ..Default::default()
        };
        update.apply_to(&mut product);

        assert_eq!(product.name, "Calça");
        assert_eq!(product.category, "Jeans");
        assert_eq!(product.price, 120.0);
        assert_eq!(product.quantity, 7);
    }

    #[test]
    fn format_price_uses_two_decimals() {
        assert_eq!(format_price(59.9), "59.90");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(1234.5), "1234.50");
    }
}
