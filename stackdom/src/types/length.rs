/// A size on one axis.
///
/// `Space` is a token on the theme's spacing scale (`Space(2.0)` is two
/// scale units); the theme decides what a unit is when the style is
/// serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Space(f32),
    Px(f32),
    Rem(f32),
    Percent(f32),
    Auto,
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);
    pub const FULL: Length = Length::Percent(100.0);

}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u16> for Length {
    fn from(units: u16) -> Self {
        Self::Space(f32::from(units))
    }
}

impl From<f32> for Length {
    fn from(units: f32) -> Self {
        Self::Space(units)
    }
}
