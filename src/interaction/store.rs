//! Shared swatch selection
//!
//! The selection store is the one piece of state shared between the UI
//! overlay and the per-frame cube update. It is owned by the app and handed
//! to both sides by reference; writes come from UI clicks, reads from the
//! frame callback, all on the event-loop thread.

use super::color::Color;

/// The three selectable colour swatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Swatch {
    #[default]
    Hotpink,
    Flamered,
    Blackbrown,
}

impl Swatch {
    /// All swatches in display order
    pub const ALL: [Swatch; 3] = [Swatch::Hotpink, Swatch::Flamered, Swatch::Blackbrown];

    /// Stable identifier, used as the UI label
    pub fn id(self) -> &'static str {
        match self {
            Swatch::Hotpink => "hotpink",
            Swatch::Flamered => "flamered",
            Swatch::Blackbrown => "blackbrown",
        }
    }

    /// Hex literal this swatch stands for
    pub fn hex(self) -> &'static str {
        match self {
            Swatch::Hotpink => "#FF69B4",
            Swatch::Flamered => "#AF2B1E",
            Swatch::Blackbrown => "#212121",
        }
    }

    pub fn colour(self) -> Color {
        match self {
            Swatch::Hotpink => Color::rgb8(0xFF, 0x69, 0xB4),
            Swatch::Flamered => Color::rgb8(0xAF, 0x2B, 0x1E),
            Swatch::Blackbrown => Color::rgb8(0x21, 0x21, 0x21),
        }
    }

    /// Maps an identifier to its swatch
    ///
    /// Unrecognized identifiers resolve to the default swatch rather than
    /// failing; selection writes are total.
    pub fn from_id(id: &str) -> Swatch {
        match id {
            "hotpink" => Swatch::Hotpink,
            "flamered" => Swatch::Flamered,
            "blackbrown" => Swatch::Blackbrown,
            _ => Swatch::default(),
        }
    }
}

/// Holds the currently selected swatch
#[derive(Debug, Default)]
pub struct SelectionStore {
    selected: Swatch,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected swatch
    pub fn selected(&self) -> Swatch {
        self.selected
    }

    /// Colour of the current selection, read by the frame update
    pub fn colour(&self) -> Color {
        self.selected.colour()
    }

    pub fn select(&mut self, swatch: Swatch) {
        self.selected = swatch;
    }

    /// Selects by identifier, falling back to the default swatch
    pub fn select_id(&mut self, id: &str) {
        self.select(Swatch::from_id(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_hotpink() {
        let store = SelectionStore::new();
        assert_eq!(store.selected(), Swatch::Hotpink);
        assert_eq!(store.colour(), Color::rgb8(0xFF, 0x69, 0xB4));
    }

    #[test]
    fn flamered_maps_to_its_literal() {
        let mut store = SelectionStore::new();
        store.select_id("flamered");
        assert_eq!(store.colour(), Color::rgb8(0xAF, 0x2B, 0x1E));
    }

    #[test]
    fn unrecognized_id_falls_back_to_default() {
        let mut store = SelectionStore::new();
        store.select(Swatch::Blackbrown);
        store.select_id("mauve");
        assert_eq!(store.selected(), Swatch::Hotpink);
        assert_eq!(store.colour(), Color::rgb8(0xFF, 0x69, 0xB4));
    }

    #[test]
    fn hex_literals_round_trip_through_the_parser() {
        for swatch in Swatch::ALL {
            assert_eq!(Color::from_hex(swatch.hex()), Ok(swatch.colour()));
        }
    }
}
