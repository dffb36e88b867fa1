use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

// Index i in both tables is the same physical key.
pub const QWERTY: &[u8] =
    b"][abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ;',./_+{}:\"<>?=-";
pub const DVORAK: &[u8] =
    b"=/axje.uidchtnmbrl'poygk,qf;AXJE>UIDCHTNMBRL\"POYGK<QF:s-wvz{}?+S_WVZ][";

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, IntoStaticStr, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Dvorak,
}

impl KnownLayout {
    pub fn table(&self) -> &'static [u8] {
        match self {
            Self::Qwerty => QWERTY,
            Self::Dvorak => DVORAK,
        }
    }

    /// Position of `byte` in this layout's table, if present.
    pub fn position(&self, byte: u8) -> Option<usize> {
        self.table().iter().position(|&b| b == byte)
    }
}
