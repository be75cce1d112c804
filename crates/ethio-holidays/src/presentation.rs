//! Display colours for holiday categories.

use crate::holiday::HolidayType;

/// A 32-bit ARGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Alpha channel.
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `#RRGGBB` form, dropping alpha.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

/// Colour used to mark holidays of the given type.
pub fn holiday_color(holiday_type: HolidayType) -> Argb {
    match holiday_type {
        HolidayType::National => Argb(0xFF19_76D2),
        HolidayType::OrthodoxChristian => Argb(0xFFF5_7C00),
        HolidayType::Muslim => Argb(0xFF38_8E3C),
        HolidayType::Cultural => Argb(0xFF7B_1FA2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette() {
        assert_eq!(holiday_color(HolidayType::National).to_hex_rgb(), "#1976D2");
        assert_eq!(holiday_color(HolidayType::Muslim).to_hex_rgb(), "#388E3C");
        let orange = holiday_color(HolidayType::OrthodoxChristian);
        assert_eq!(orange.alpha(), 0xFF);
        assert_eq!((orange.red(), orange.green(), orange.blue()), (0xF5, 0x7C, 0x00));
    }
}
