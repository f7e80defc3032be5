//! Agent kinds, render layers, and the fixed entity dimensions of the farm.

use crate::BoundingBox;

/// Render/collision layer.  Collision checks only consider entities sharing
/// a layer, so scenery never blocks actors and items never block anything.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Layer {
    /// Static scenery: nests, barns, the bakery, the shop.
    Scenery = 0,
    /// Small items: eggs, ingredient piles, cakes.
    Items = 1,
    /// Mobile actors: chickens, people, trucks, cows.
    Actors = 2,
}

/// The five mobile agent roles of the simulation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Chicken,
    Farmer,
    Truck,
    Cow,
    Child,
}

impl AgentKind {
    /// Full width × height of this kind's bounding box, in plane units.
    /// Fixed by the reference art assets.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            AgentKind::Chicken => (45.0, 45.0),
            AgentKind::Farmer | AgentKind::Child => (50.0, 90.0),
            AgentKind::Truck => (90.0, 70.0),
            AgentKind::Cow => (80.0, 80.0),
        }
    }

    /// A bounding box of this kind's dimensions centered at `(x, y)`.
    pub fn bbox_at(self, x: f32, y: f32) -> BoundingBox {
        let (w, h) = self.dimensions();
        BoundingBox::new(x, y, w, h)
    }

    /// Texture tag the renderer resolves against its asset manager.
    pub fn texture(self) -> &'static str {
        match self {
            AgentKind::Chicken => "chicken",
            AgentKind::Farmer => "farmer",
            AgentKind::Truck => "truck",
            AgentKind::Cow => "cow",
            AgentKind::Child => "child",
        }
    }

    /// Low-profile agents (short boxes) dodge preferentially along the
    /// vertical axis — they fit through horizontal gaps other agents block.
    pub fn low_profile(self) -> bool {
        matches!(self, AgentKind::Chicken)
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.texture())
    }
}

/// Full size of an item entity (egg, flour, butter, sugar, cake).
pub const ITEM_SIZE: f32 = 20.0;
