//! Fixed product catalog.
//!
//! The wizard's product step offers only products of the chosen category;
//! this module is the category-scoped lookup behind it. The catalog ships
//! in code: products are reference data for promotion targeting, not a
//! managed collection.

use petstore_core::{Category, CurrencyCode, Price, ProductId};

/// A catalog product available for promotion targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
}

impl Product {
    fn new(id: &str, name: &str, cents: i64, category: Category) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::from_cents(cents, CurrencyCode::USD),
            category,
        }
    }
}

/// The full catalog, in category order.
#[must_use]
pub fn all_products() -> Vec<Product> {
    vec![
        // Alimento
        Product::new("1", "Alimento Premium para Perros", 4599, Category::Alimento),
        Product::new("2", "Alimento para Gatos Adultos", 3250, Category::Alimento),
        Product::new("3", "Snacks Naturales", 1299, Category::Alimento),
        Product::new("4", "Alimento para Cachorros", 3875, Category::Alimento),
        // Juguetes
        Product::new("5", "Pelota de Goma Resistente", 899, Category::Juguetes),
        Product::new("6", "Ratón de Juguete con Catnip", 650, Category::Juguetes),
        Product::new("7", "Cuerda para Morder", 1150, Category::Juguetes),
        Product::new("8", "Túnel Plegable para Gatos", 2499, Category::Juguetes),
        // Cuidado
        Product::new("9", "Shampoo Hipoalergénico", 1575, Category::Cuidado),
        Product::new("10", "Cepillo Deslanador", 1899, Category::Cuidado),
        Product::new("11", "Cortaúñas Profesional", 1025, Category::Cuidado),
        Product::new("12", "Toallitas Húmedas para Mascotas", 750, Category::Cuidado),
        // Accesorios
        Product::new("13", "Collar Ajustable Reflectante", 1399, Category::Accesorios),
        Product::new("14", "Cama Acolchada Mediana", 4250, Category::Accesorios),
        Product::new("15", "Transportadora Plegable", 5999, Category::Accesorios),
        Product::new("16", "Plato Doble de Acero Inoxidable", 1650, Category::Accesorios),
    ]
}

/// Products available for a promotion in the given category.
#[must_use]
pub fn products_in_category(category: Category) -> Vec<Product> {
    all_products()
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Look up a single product by id.
#[must_use]
pub fn product_by_id(id: &ProductId) -> Option<Product> {
    all_products().into_iter().find(|p| &p.id == id)
}
