use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of weapon classes a draw can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    #[serde(rename = "シューター")]
    Shooter,
    #[serde(rename = "ローラー")]
    Roller,
    #[serde(rename = "チャージャー")]
    Charger,
    #[serde(rename = "スピナー")]
    Splatling,
    #[serde(rename = "ブラスター")]
    Blaster,
    #[serde(rename = "マニューバー")]
    Dualies,
    #[serde(rename = "フデ")]
    Brush,
    #[serde(rename = "スロッシャー")]
    Slosher,
    #[serde(rename = "シェルター")]
    Brella,
    #[serde(rename = "ストリンガー")]
    Stringer,
    #[serde(rename = "ワイパー")]
    Splatana,
}

impl WeaponType {
    /// Menu order.
    pub const ALL: [WeaponType; 11] = [
        WeaponType::Shooter,
        WeaponType::Roller,
        WeaponType::Charger,
        WeaponType::Splatling,
        WeaponType::Blaster,
        WeaponType::Dualies,
        WeaponType::Brush,
        WeaponType::Slosher,
        WeaponType::Brella,
        WeaponType::Stringer,
        WeaponType::Splatana,
    ];

    /// Display name, identical to the catalog's `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            WeaponType::Shooter => "シューター",
            WeaponType::Roller => "ローラー",
            WeaponType::Charger => "チャージャー",
            WeaponType::Splatling => "スピナー",
            WeaponType::Blaster => "ブラスター",
            WeaponType::Dualies => "マニューバー",
            WeaponType::Brush => "フデ",
            WeaponType::Slosher => "スロッシャー",
            WeaponType::Brella => "シェルター",
            WeaponType::Stringer => "ストリンガー",
            WeaponType::Splatana => "ワイパー",
        }
    }

    /// ASCII key used inside component custom ids.
    pub fn key(self) -> &'static str {
        match self {
            WeaponType::Shooter => "shooter",
            WeaponType::Roller => "roller",
            WeaponType::Charger => "charger",
            WeaponType::Splatling => "splatling",
            WeaponType::Blaster => "blaster",
            WeaponType::Dualies => "dualies",
            WeaponType::Brush => "brush",
            WeaponType::Slosher => "slosher",
            WeaponType::Brella => "brella",
            WeaponType::Stringer => "stringer",
            WeaponType::Splatana => "splatana",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeaponType {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}
