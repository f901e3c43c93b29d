//! Display cards and the selector state machine.
//!
//! One tagged variant per card, so adding a card cannot silently fall
//! through a rendering match. The selector is a purely circular index:
//! a debounced button activation advances it, nothing else moves it, and
//! it runs for the device lifetime.

/// One page of the status display cycling set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CardView {
    Soil = 0,
    Temperature = 1,
    Humidity = 2,
    Light = 3,
    WaterLevel = 4,
    Battery = 5,
}

impl CardView {
    /// Total number of cards — the modulus of the selector.
    pub const COUNT: usize = 6;

    /// The card following this one in the cycle (wraps around).
    pub fn next(self) -> Self {
        Self::from_index((self as usize + 1) % Self::COUNT)
    }

    /// Convert an index back to a `CardView`. Panics on out-of-range in
    /// debug builds; returns `Soil` in release (safe fallback).
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Soil,
            1 => Self::Temperature,
            2 => Self::Humidity,
            3 => Self::Light,
            4 => Self::WaterLevel,
            5 => Self::Battery,
            _ => {
                debug_assert!(false, "invalid card index: {idx}");
                Self::Soil
            }
        }
    }

    /// Header line shown at the top of the card.
    pub fn title(self) -> &'static str {
        match self {
            Self::Soil => "SOIL",
            Self::Temperature => "TEMP",
            Self::Humidity => "HUMIDITY",
            Self::Light => "LIGHT",
            Self::WaterLevel => "WATER",
            Self::Battery => "BATTERY",
        }
    }
}

/// Finite-state index over the fixed card set.
pub struct CardSelector {
    current: CardView,
}

impl CardSelector {
    /// Initial state: the soil card.
    pub fn new() -> Self {
        Self {
            current: CardView::Soil,
        }
    }

    /// The card currently selected.
    pub fn current(&self) -> CardView {
        self.current
    }

    /// Advance one step around the cycle and return the new card.
    pub fn advance(&mut self) -> CardView {
        self.current = self.current.next();
        self.current
    }
}

impl Default for CardSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_soil() {
        assert_eq!(CardSelector::new().current(), CardView::Soil);
    }

    #[test]
    fn advance_is_circular() {
        let mut sel = CardSelector::new();
        let expected = [
            CardView::Temperature,
            CardView::Humidity,
            CardView::Light,
            CardView::WaterLevel,
            CardView::Battery,
            CardView::Soil,
        ];
        for want in expected {
            assert_eq!(sel.advance(), want);
        }
    }

    #[test]
    fn n_activations_land_on_n_mod_count() {
        for n in 0..20usize {
            let mut sel = CardSelector::new();
            for _ in 0..n {
                sel.advance();
            }
            assert_eq!(sel.current(), CardView::from_index(n % CardView::COUNT));
        }
    }

    #[test]
    fn card_from_index_roundtrip() {
        for i in 0..CardView::COUNT {
            let card = CardView::from_index(i);
            assert_eq!(card as usize, i);
        }
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn card_from_invalid_index_falls_back_to_soil() {
        assert_eq!(CardView::from_index(99), CardView::Soil);
    }
}
