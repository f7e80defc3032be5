//! The ingredient bundle a truck carries.

/// Quantities of each ingredient in one truck load (or pantry delivery).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Goods {
    pub eggs: u32,
    pub butter: u32,
    pub flour: u32,
    pub sugar: u32,
}

impl Goods {
    /// The egg/butter truck's load: 3 eggs from the barn plus 3 butter
    /// churned on the spot.
    pub const fn eggs_and_butter(n: u32) -> Self {
        Self { eggs: n, butter: n, flour: 0, sugar: 0 }
    }

    /// The dry-goods truck's load of flour and sugar.
    pub const fn flour_and_sugar(n: u32) -> Self {
        Self { eggs: 0, butter: 0, flour: n, sugar: n }
    }

    pub fn is_empty(&self) -> bool {
        self.eggs == 0 && self.butter == 0 && self.flour == 0 && self.sugar == 0
    }
}

impl std::fmt::Display for Goods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{eggs:{} butter:{} flour:{} sugar:{}}}",
            self.eggs, self.butter, self.flour, self.sugar
        )
    }
}
