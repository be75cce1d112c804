//! `EthiopicMonth`: month-of-year enum for the Ethiopic calendar.

use serde::{Deserialize, Serialize};

/// Month of the Ethiopic year.
///
/// Variants are numbered 1–13. The first twelve months have 30 days;
/// Pagume has 5, or 6 in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EthiopicMonth {
    /// Meskerem (1).
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hidar (3).
    Hidar = 3,
    /// Tahsas (4).
    Tahsas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miazia (8).
    Miazia = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehasse (12).
    Nehasse = 12,
    /// Pagume (13), the epagomenal month.
    Pagume = 13,
}

const ALL: [EthiopicMonth; 13] = [
    EthiopicMonth::Meskerem,
    EthiopicMonth::Tikimt,
    EthiopicMonth::Hidar,
    EthiopicMonth::Tahsas,
    EthiopicMonth::Tir,
    EthiopicMonth::Yekatit,
    EthiopicMonth::Megabit,
    EthiopicMonth::Miazia,
    EthiopicMonth::Ginbot,
    EthiopicMonth::Sene,
    EthiopicMonth::Hamle,
    EthiopicMonth::Nehasse,
    EthiopicMonth::Pagume,
];

impl EthiopicMonth {
    /// Construct from a number (1 = Meskerem … 13 = Pagume).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// All thirteen months in calendar order.
    pub fn all() -> [EthiopicMonth; 13] {
        ALL
    }

    /// Return the Latin transliteration (`"Meskerem"`, `"Tikimt"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            EthiopicMonth::Meskerem => "Meskerem",
            EthiopicMonth::Tikimt => "Tikimt",
            EthiopicMonth::Hidar => "Hidar",
            EthiopicMonth::Tahsas => "Tahsas",
            EthiopicMonth::Tir => "Tir",
            EthiopicMonth::Yekatit => "Yekatit",
            EthiopicMonth::Megabit => "Megabit",
            EthiopicMonth::Miazia => "Miazia",
            EthiopicMonth::Ginbot => "Ginbot",
            EthiopicMonth::Sene => "Sene",
            EthiopicMonth::Hamle => "Hamle",
            EthiopicMonth::Nehasse => "Nehasse",
            EthiopicMonth::Pagume => "Pagume",
        }
    }

    /// Return the Amharic name (`"መስከረም"`, …).
    pub fn amharic_name(&self) -> &'static str {
        match self {
            EthiopicMonth::Meskerem => "መስከረም",
            EthiopicMonth::Tikimt => "ጥቅምት",
            EthiopicMonth::Hidar => "ኅዳር",
            EthiopicMonth::Tahsas => "ታኅሣሥ",
            EthiopicMonth::Tir => "ጥር",
            EthiopicMonth::Yekatit => "የካቲት",
            EthiopicMonth::Megabit => "መጋቢት",
            EthiopicMonth::Miazia => "ሚያዝያ",
            EthiopicMonth::Ginbot => "ግንቦት",
            EthiopicMonth::Sene => "ሰኔ",
            EthiopicMonth::Hamle => "ሐምሌ",
            EthiopicMonth::Nehasse => "ነሐሴ",
            EthiopicMonth::Pagume => "ጳጉሜ",
        }
    }
}

impl std::fmt::Display for EthiopicMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<EthiopicMonth> for u8 {
    fn from(m: EthiopicMonth) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=13u8 {
            let m = EthiopicMonth::from_number(n).unwrap();
            assert_eq!(m.number(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(EthiopicMonth::from_number(0).is_none());
        assert!(EthiopicMonth::from_number(14).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(EthiopicMonth::Tahsas.to_string(), "Tahsas");
        assert_eq!(EthiopicMonth::Pagume.amharic_name(), "ጳጉሜ");
    }
}
