//! Cell attributes: the 16 standard terminal colors plus RESET.
//!
//! A cell is a raw `u32` glyph paired with an [`Attributes`] value. Both are
//! stored in separate parallel grids by [`Buffer`](super::Buffer); the
//! zero glyph with default attributes is an empty cell.

/// One of the 16 standard ANSI colors, or the terminal default.
///
/// The discriminant order matches the SGR tables in
/// [`codec::ansi`](crate::codec::ansi).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Color {
    /// Terminal default (SGR 0).
    #[default]
    Reset = 0,
    /// Black.
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
    /// Bright black.
    BrightBlack,
    /// Bright red.
    BrightRed,
    /// Bright green.
    BrightGreen,
    /// Bright yellow.
    BrightYellow,
    /// Bright blue.
    BrightBlue,
    /// Bright magenta.
    BrightMagenta,
    /// Bright cyan.
    BrightCyan,
    /// Bright white.
    BrightWhite,
}

impl Color {
    /// Number of distinct color values.
    pub const COUNT: usize = 17;

    /// Every color, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Reset,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Table index of this color.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this is one of the `;1` bright variants.
    #[inline]
    pub const fn is_bright(self) -> bool {
        self as u8 >= Self::BrightBlack as u8
    }
}

/// Foreground and background color of a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

impl Attributes {
    /// Create attributes from a foreground and background color.
    #[inline]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// RESET on both roles; the attributes of an empty cell.
    pub const DEFAULT: Self = Self::new(Color::Reset, Color::Reset);

    /// Builder: replace the foreground.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: replace the background.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Whether either role is a bright color. Bright codes switch on SGR
    /// bold, which only `ESC[0m` switches off again.
    #[inline]
    pub const fn is_bright(self) -> bool {
        self.fg.is_bright() || self.bg.is_bright()
    }
}

impl std::fmt::Debug for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}/{:?}", self.fg, self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reset() {
        assert_eq!(Attributes::default(), Attributes::DEFAULT);
        assert_eq!(Color::default(), Color::Reset);
    }

    #[test]
    fn test_all_matches_index() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_bright() {
        assert!(!Color::White.is_bright());
        assert!(Color::BrightBlack.is_bright());
        assert!(!Color::Reset.is_bright());
    }

    #[test]
    fn test_attributes_bright_in_either_role() {
        assert!(!Attributes::new(Color::Red, Color::Blue).is_bright());
        assert!(Attributes::new(Color::BrightRed, Color::Reset).is_bright());
        assert!(Attributes::new(Color::Reset, Color::BrightBlue).is_bright());
    }

    #[test]
    fn test_attributes_equality() {
        let a = Attributes::new(Color::Red, Color::Blue);
        assert_eq!(a, Attributes::DEFAULT.with_fg(Color::Red).with_bg(Color::Blue));
        assert_ne!(a, a.with_bg(Color::Reset));
    }
}
