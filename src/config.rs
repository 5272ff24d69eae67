use crate::ship::ShipClass;

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 26;

pub const NUM_SHIPS: usize = 5;
pub const SHIP_CLASSES: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("carrier", 5),
    ShipClass::new("scouter", 4),
    ShipClass::new("missile", 3),
    ShipClass::new("submarine", 3),
    ShipClass::new("destroyer", 2),
];

/// Total fleet cell count; the number of effective hits that ends a game.
pub const FLEET_CELLS: usize = 17;
