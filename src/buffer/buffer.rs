//! Buffer: A grid of glyphs and attributes.
//!
//! Glyphs and attributes live in two parallel `Vec`s of identical length.
//! Cells are stored column-major: `index = x * height + y`.

use super::cell::Attributes;
use crate::error::{Error, Result};
use crate::layout::{Point, Rect};

/// An owned rectangular grid of `(glyph, attributes)` cells.
///
/// A glyph of `0` is an empty cell and renders as a space in the default
/// colors.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Width and height.
    size: Point,
    /// Glyph grid (column-major).
    glyphs: Vec<u32>,
    /// Attribute grid (column-major), parallel to `glyphs`.
    attributes: Vec<Attributes>,
}

impl Buffer {
    /// Create a zero-filled buffer.
    ///
    /// Fails on negative dimensions or when the grids cannot be allocated.
    pub fn new(size: Point) -> Result<Self> {
        let cells = cell_count(size)?;

        let mut glyphs = Vec::new();
        let mut attributes = Vec::new();
        glyphs
            .try_reserve_exact(cells)
            .map_err(|_| Error::Allocation { cells })?;
        attributes
            .try_reserve_exact(cells)
            .map_err(|_| Error::Allocation { cells })?;
        glyphs.resize(cells, 0);
        attributes.resize(cells, Attributes::DEFAULT);

        tracing::trace!(width = size.x, height = size.y, cells, "allocated buffer");
        Ok(Self {
            size,
            glyphs,
            attributes,
        })
    }

    /// Get the buffer size.
    #[inline]
    pub const fn size(&self) -> Point {
        self.size
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> i16 {
        self.size.x
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> i16 {
        self.size.y
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Check if a position lies inside the buffer.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size.x && p.y >= 0 && p.y < self.size.y
    }

    /// Convert a position to a linear index.
    ///
    /// Returns `None` if the position is out of bounds.
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    pub const fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.x as usize) * (self.size.y as usize) + (p.y as usize))
        } else {
            None
        }
    }

    fn checked_index(&self, p: Point) -> Result<usize> {
        self.index_of(p).ok_or(Error::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.size.x,
            height: self.size.y,
        })
    }

    /// Get the glyph at `p`.
    pub fn glyph(&self, p: Point) -> Result<u32> {
        let idx = self.checked_index(p)?;
        Ok(self.glyphs[idx])
    }

    /// Get a mutable reference to the glyph at `p`.
    pub fn glyph_mut(&mut self, p: Point) -> Result<&mut u32> {
        let idx = self.checked_index(p)?;
        Ok(&mut self.glyphs[idx])
    }

    /// Get the attributes at `p`.
    pub fn attributes(&self, p: Point) -> Result<Attributes> {
        let idx = self.checked_index(p)?;
        Ok(self.attributes[idx])
    }

    /// Get a mutable reference to the attributes at `p`.
    pub fn attributes_mut(&mut self, p: Point) -> Result<&mut Attributes> {
        let idx = self.checked_index(p)?;
        Ok(&mut self.attributes[idx])
    }

    /// Set both glyph and attributes at `p`.
    pub fn set(&mut self, p: Point, glyph: u32, attributes: Attributes) -> Result<()> {
        let idx = self.checked_index(p)?;
        self.glyphs[idx] = glyph;
        self.attributes[idx] = attributes;
        Ok(())
    }

    /// Set a `char` with attributes at `p`.
    pub fn set_char(&mut self, p: Point, c: char, attributes: Attributes) -> Result<()> {
        self.set(p, u32::from(c), attributes)
    }

    /// Fill the part of `rect` that lies inside the buffer.
    pub fn fill(&mut self, rect: Rect, glyph: u32, attributes: Attributes) {
        let Some(area) = rect.intersection(&Rect::from_size(self.size)) else {
            return;
        };
        for x in area.x..area.right() {
            for y in area.y..area.bottom() {
                if let Some(idx) = self.index_of(Point::new(x, y)) {
                    self.glyphs[idx] = glyph;
                    self.attributes[idx] = attributes;
                }
            }
        }
    }

    /// Reset every cell to the empty glyph with default attributes.
    pub fn clear(&mut self) {
        self.glyphs.fill(0);
        self.attributes.fill(Attributes::DEFAULT);
    }

    /// Copy cells from `src_rect` of `src` into `dst_rect` of `self`.
    ///
    /// Cells are copied position-for-position: the cell at offset `(dx, dy)`
    /// inside `src_rect` lands at the same offset inside `dst_rect`. Only
    /// offsets covered by both rectangles are copied, and any cell outside
    /// either buffer is skipped. Returns the number of cells copied.
    pub fn blit(&mut self, src: &Self, dst_rect: Rect, src_rect: Rect) -> usize {
        let width = dst_rect.width.min(src_rect.width);
        let height = dst_rect.height.min(src_rect.height);
        let mut copied = 0;

        for dx in 0..width.max(0) {
            for dy in 0..height.max(0) {
                let offset = Point::new(dx, dy);
                let (Some(to), Some(from)) = (
                    self.index_of(dst_rect.origin() + offset),
                    src.index_of(src_rect.origin() + offset),
                ) else {
                    continue;
                };
                self.glyphs[to] = src.glyphs[from];
                self.attributes[to] = src.attributes[from];
                copied += 1;
            }
        }

        copied
    }

    /// Raw glyph grid, column-major.
    #[inline]
    pub fn glyphs(&self) -> &[u32] {
        &self.glyphs
    }

    /// Raw attribute grid, column-major.
    #[inline]
    pub fn attribute_grid(&self) -> &[Attributes] {
        &self.attributes
    }

    /// Both grids, mutably.
    #[inline]
    pub(crate) fn grids_mut(&mut self) -> (&mut [u32], &mut [Attributes]) {
        (&mut self.glyphs, &mut self.attributes)
    }
}

/// Number of cells for a size, rejecting negative extents.
#[allow(clippy::cast_sign_loss)]
fn cell_count(size: Point) -> Result<usize> {
    if size.x < 0 || size.y < 0 {
        return Err(Error::InvalidDimensions {
            width: i32::from(size.x),
            height: i32::from(size.y),
        });
    }
    (size.x as usize)
        .checked_mul(size.y as usize)
        .ok_or(Error::InvalidDimensions {
            width: i32::from(size.x),
            height: i32::from(size.y),
        })
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.size.x)
            .field("height", &self.size.y)
            .field(
                "non_empty",
                &self.glyphs.iter().filter(|&&g| g != 0).count(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Color;

    fn filled(size: Point, glyph: char, attrs: Attributes) -> Buffer {
        let mut buffer = Buffer::new(size).unwrap();
        buffer.fill(Rect::from_size(size), u32::from(glyph), attrs);
        buffer
    }

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(Point::new(80, 24)).unwrap();
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
        assert!(buffer.glyphs().iter().all(|&g| g == 0));
        assert!(buffer
            .attribute_grid()
            .iter()
            .all(|&a| a == Attributes::DEFAULT));
    }

    #[test]
    fn test_buffer_zero_size() {
        let buffer = Buffer::new(Point::ZERO).unwrap();
        assert!(buffer.is_empty());
        assert!(buffer.glyph(Point::ZERO).is_err());
    }

    #[test]
    fn test_buffer_negative_size() {
        assert!(matches!(
            Buffer::new(Point::new(-1, 5)),
            Err(Error::InvalidDimensions {
                width: -1,
                height: 5
            })
        ));
    }

    #[test]
    fn test_buffer_get_set() {
        let mut buffer = Buffer::new(Point::new(80, 24)).unwrap();
        let attrs = Attributes::new(Color::Red, Color::Blue);
        buffer.set_char(Point::new(5, 10), 'X', attrs).unwrap();
        assert_eq!(buffer.glyph(Point::new(5, 10)).unwrap(), u32::from('X'));
        assert_eq!(buffer.attributes(Point::new(5, 10)).unwrap(), attrs);

        *buffer.glyph_mut(Point::new(0, 0)).unwrap() = 0xCFC3;
        buffer.attributes_mut(Point::new(0, 0)).unwrap().fg = Color::Green;
        assert_eq!(buffer.glyph(Point::new(0, 0)).unwrap(), 0xCFC3);
        assert_eq!(
            buffer.attributes(Point::new(0, 0)).unwrap().fg,
            Color::Green
        );
    }

    #[test]
    fn test_buffer_bounds() {
        let mut buffer = Buffer::new(Point::new(80, 24)).unwrap();
        assert!(buffer.glyph(Point::new(79, 23)).is_ok());
        assert!(matches!(
            buffer.glyph(Point::new(80, 23)),
            Err(Error::OutOfBounds { x: 80, y: 23, .. })
        ));
        assert!(buffer.glyph_mut(Point::new(79, 24)).is_err());
        assert!(buffer.attributes(Point::new(-1, 0)).is_err());
        assert!(buffer
            .set(Point::new(0, -1), 1, Attributes::DEFAULT)
            .is_err());
    }

    #[test]
    fn test_buffer_column_major_index() {
        let buffer = Buffer::new(Point::new(80, 24)).unwrap();
        assert_eq!(buffer.index_of(Point::new(5, 10)), Some(5 * 24 + 10));
        assert_eq!(buffer.index_of(Point::new(80, 0)), None);
    }

    #[test]
    fn test_buffer_clear() {
        let mut buffer = filled(Point::new(4, 4), 'X', Attributes::new(Color::Red, Color::Red));
        buffer.clear();
        assert_eq!(buffer, Buffer::new(Point::new(4, 4)).unwrap());
    }

    #[test]
    fn test_buffer_fill_clips() {
        let mut buffer = Buffer::new(Point::new(5, 5)).unwrap();
        buffer.fill(Rect::new(3, -2, 10, 4), u32::from('#'), Attributes::DEFAULT);
        assert_eq!(buffer.glyph(Point::new(3, 0)).unwrap(), u32::from('#'));
        assert_eq!(buffer.glyph(Point::new(4, 1)).unwrap(), u32::from('#'));
        assert_eq!(buffer.glyph(Point::new(4, 2)).unwrap(), 0);
        assert_eq!(buffer.glyph(Point::new(2, 0)).unwrap(), 0);
    }

    #[test]
    fn test_blit_into_top_left() {
        let blue = Attributes::new(Color::Reset, Color::Blue);
        let red = Attributes::new(Color::Reset, Color::Red);
        let mut dst = filled(Point::new(20, 10), 'A', blue);
        let src = filled(Point::new(10, 5), 'B', red);

        let copied = dst.blit(&src, Rect::from_size(dst.size()), Rect::from_size(src.size()));
        assert_eq!(copied, 50);

        for x in 0..20 {
            for y in 0..10 {
                let p = Point::new(x, y);
                let (glyph, attrs) = if x < 10 && y < 5 { ('B', red) } else { ('A', blue) };
                assert_eq!(dst.glyph(p).unwrap(), u32::from(glyph), "at {p:?}");
                assert_eq!(dst.attributes(p).unwrap(), attrs, "at {p:?}");
            }
        }
    }

    #[test]
    fn test_blit_offset_and_clip() {
        let mut dst = Buffer::new(Point::new(6, 4)).unwrap();
        let src = filled(Point::new(4, 4), 'S', Attributes::DEFAULT);

        // Destination hangs off the right and bottom edges.
        let copied = dst.blit(&src, Rect::new(4, 2, 4, 4), Rect::from_size(src.size()));
        assert_eq!(copied, 4);
        assert_eq!(dst.glyph(Point::new(5, 3)).unwrap(), u32::from('S'));
        assert_eq!(dst.glyph(Point::new(3, 3)).unwrap(), 0);

        // Source region partly outside the source buffer.
        let mut dst = Buffer::new(Point::new(6, 4)).unwrap();
        let copied = dst.blit(&src, Rect::new(0, 0, 6, 4), Rect::new(2, -1, 6, 4));
        assert_eq!(copied, 2 * 3);
        assert_eq!(dst.glyph(Point::new(0, 0)).unwrap(), 0);
        assert_eq!(dst.glyph(Point::new(0, 1)).unwrap(), u32::from('S'));
        assert_eq!(dst.glyph(Point::new(2, 1)).unwrap(), 0);
    }

    #[test]
    fn test_blit_mismatched_rects_copy_overlap() {
        let mut dst = Buffer::new(Point::new(10, 10)).unwrap();
        let src = filled(Point::new(10, 10), 'M', Attributes::DEFAULT);
        let copied = dst.blit(&src, Rect::new(0, 0, 3, 8), Rect::new(0, 0, 8, 2));
        assert_eq!(copied, 3 * 2);
        assert_eq!(dst.glyph(Point::new(2, 1)).unwrap(), u32::from('M'));
        assert_eq!(dst.glyph(Point::new(3, 1)).unwrap(), 0);
        assert_eq!(dst.glyph(Point::new(2, 2)).unwrap(), 0);
    }

    #[test]
    fn test_blit_negative_rect_is_noop() {
        let mut dst = Buffer::new(Point::new(4, 4)).unwrap();
        let src = filled(Point::new(4, 4), 'N', Attributes::DEFAULT);
        assert_eq!(dst.blit(&src, Rect::new(0, 0, -2, 4), Rect::from_size(src.size())), 0);
    }
}
