use std::collections::HashMap;

#[derive(Debug, Clone, serde::Serialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    /// human readable estimate, e.g. "30-40 mins"
    #[serde(rename = "deliveryTime")]
    pub delivery_time: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// minor currency unit
    pub price: u32,
}

/// Fixed dataset built once at startup, read-only afterwards.
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    menus: HashMap<u32, Vec<MenuItem>>,
}

fn restaurant(id: u32, name: &str, cuisine: &str, rating: f64, delivery_time: &str) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        rating,
        delivery_time: delivery_time.to_string(),
    }
}

fn item(id: u32, name: &str, description: &str, price: u32) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        let restaurants = vec![
            restaurant(1, "Pizza Palace", "Italian", 4.5, "30-40 mins"),
            restaurant(2, "Burger King", "American", 4.2, "25-35 mins"),
            restaurant(3, "Sushi Express", "Japanese", 4.7, "35-45 mins"),
            restaurant(4, "Curry House", "Indian", 4.6, "30-40 mins"),
            restaurant(5, "Taco Fiesta", "Mexican", 4.3, "20-30 mins"),
        ];

        let menus = HashMap::from([
            (
                1,
                vec![
                    item(101, "Margherita Pizza", "Classic tomato and mozzarella", 299),
                    item(102, "Pepperoni Pizza", "Spicy pepperoni with cheese", 349),
                    item(103, "Veggie Supreme", "Loaded with vegetables", 379),
                    item(104, "Garlic Bread", "Crispy garlic bread sticks", 149),
                    item(105, "Coca Cola", "500ml cold drink", 50),
                ],
            ),
            (
                2,
                vec![
                    item(201, "Classic Burger", "Beef patty with veggies", 199),
                    item(202, "Chicken Burger", "Crispy chicken patty", 229),
                    item(203, "Cheese Burger", "Double cheese burger", 249),
                    item(204, "French Fries", "Crispy golden fries", 99),
                    item(205, "Onion Rings", "Crispy onion rings", 129),
                ],
            ),
            (
                3,
                vec![
                    item(301, "Salmon Sushi", "Fresh salmon sushi (6 pieces)", 499),
                    item(302, "Tuna Sushi", "Fresh tuna sushi (6 pieces)", 449),
                    item(303, "California Roll", "Crab and avocado roll (8 pieces)", 399),
                    item(304, "Miso Soup", "Traditional miso soup", 149),
                    item(305, "Edamame", "Steamed soybeans", 199),
                ],
            ),
            (
                4,
                vec![
                    item(401, "Butter Chicken", "Creamy tomato curry", 349),
                    item(402, "Chicken Biryani", "Fragrant rice with chicken", 299),
                    item(403, "Paneer Tikka", "Grilled cottage cheese", 249),
                    item(404, "Garlic Naan", "Buttery garlic bread", 79),
                    item(405, "Mango Lassi", "Sweet mango yogurt drink", 99),
                ],
            ),
            (
                5,
                vec![
                    item(501, "Beef Tacos", "Spiced beef tacos (3 pieces)", 249),
                    item(502, "Chicken Tacos", "Grilled chicken tacos (3 pieces)", 229),
                    item(503, "Veggie Tacos", "Fresh vegetable tacos (3 pieces)", 199),
                    item(504, "Nachos", "Loaded nachos with cheese", 179),
                    item(505, "Guacamole", "Fresh avocado dip", 149),
                ],
            ),
        ]);

        Self { restaurants, menus }
    }

    /// All restaurants in insertion order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Menu of the given restaurant in definition order, empty when unknown.
    pub fn menu(&self, restaurant_id: u32) -> &[MenuItem] {
        self.menus
            .get(&restaurant_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
