//! The signature menu
//!
//! A fixed list, built once and never mutated.

use serde::Serialize;

/// Stagger between consecutive dish reveals, in milliseconds
pub const DISH_REVEAL_STAGGER_MS: u32 = 70;

/// One dish on the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Dish {
    pub name: &'static str,
    /// Display price, e.g. `$25`
    pub price: &'static str,
    /// Image path relative to the site root
    pub image: &'static str,
}

impl Dish {
    const fn new(name: &'static str, price: &'static str, image: &'static str) -> Self {
        Self { name, price, image }
    }

    /// Price in cents, if the display price is well formed
    pub fn price_cents(&self) -> Option<u32> {
        let amount = self.price.strip_prefix('$')?;
        let (dollars, cents) = match amount.split_once('.') {
            Some((d, c)) if c.len() == 2 => (d, c.parse::<u32>().ok()?),
            Some(_) => return None,
            None => (amount, 0),
        };
        dollars.parse::<u32>().ok()?.checked_mul(100)?.checked_add(cents)
    }
}

/// All dishes, in display order
pub const DISHES: [Dish; 12] = [
    Dish::new("Noodles", "$25", "img/noodles.jpg"),
    Dish::new("Steak & Wine", "$40", "img/Steak-wine.jpg"),
    Dish::new("Pasta Delight", "$18", "img/Pasta-delight.jpg"),
    Dish::new("Classic Burger", "$16", "img/Classic-burger.jpg"),
    Dish::new("Caesar Salad", "$14", "img/Caesar-salad.jpg"),
    Dish::new("Sushi Platter", "$32", "img/Sushi-platter.jpg"),
    Dish::new("Momos", "$48", "img/Momos.jpg"),
    Dish::new("Tacos Trio", "$12", "img/Tacos-trio.jpg"),
    Dish::new("Chicken Alfredo", "$20", "img/Chicken-alfredo.jpg"),
    Dish::new("Veggie Pizza", "$17", "img/Veggie-pizza.jpg"),
    Dish::new("French Fries Deluxe", "$10", "img/French-fries-deluxe.jpg"),
    Dish::new("Chocolate Lava Cake", "$11", "img/Chocolate-lava-cake.jpg"),
];

/// The menu as a slice
#[inline]
pub fn dishes() -> &'static [Dish] {
    &DISHES
}

/// Reveal delay for the dish card at `index`
#[inline]
pub fn reveal_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(DISH_REVEAL_STAGGER_MS)
}
