//! Box, Boxa - Rectangle regions
//!
//! These structures represent rectangular regions in an image: patch
//! rectangles of a nine-patch grid, destination rectangles while
//! rendering, and the list of corrupted patches reported by diagnostics.

use crate::error::{Error, Result};

/// A rectangle region
///
/// A simple Copy type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the box is valid (non-negative dimensions)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w >= 0 && self.h >= 0
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this box contains another box
    pub fn contains_box(&self, other: &Box) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this box overlaps with another
    pub fn overlaps(&self, other: &Box) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Translate the box by (dx, dy)
    pub fn translate(&self, dx: i32, dy: i32) -> Box {
        Box {
            x: self.x + dx,
            y: self.y + dy,
            w: self.w,
            h: self.h,
        }
    }

    /// Clip the box to fit within bounds
    pub fn clip(&self, width: i32, height: i32) -> Option<Box> {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let right = self.right().min(width);
        let bottom = self.bottom().min(height);

        if x < right && y < bottom {
            Some(Box {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }
}

/// Array of boxes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boxa {
    boxes: Vec<Box>,
}

impl Boxa {
    /// Create a new empty Boxa
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Get the number of boxes
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Get a box by index
    pub fn get(&self, index: usize) -> Option<&Box> {
        self.boxes.get(index)
    }

    /// Add a box
    pub fn push(&mut self, b: Box) {
        self.boxes.push(b);
    }

    /// Get all boxes as a slice
    pub fn boxes(&self) -> &[Box] {
        &self.boxes
    }

    /// Sum of all box areas
    pub fn total_area(&self) -> i64 {
        self.boxes.iter().map(Box::area).sum()
    }

    /// Check whether any two boxes overlap
    pub fn has_overlap(&self) -> bool {
        self.boxes
            .iter()
            .enumerate()
            .any(|(i, a)| self.boxes[i + 1..].iter().any(|b| a.overlaps(b)))
    }

    /// Create an iterator over boxes
    pub fn iter(&self) -> impl Iterator<Item = &Box> {
        self.boxes.iter()
    }
}

impl FromIterator<Box> for Boxa {
    fn from_iter<T: IntoIterator<Item = Box>>(iter: T) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box> for Boxa {
    fn extend<T: IntoIterator<Item = Box>>(&mut self, iter: T) {
        self.boxes.extend(iter);
    }
}

impl IntoIterator for Boxa {
    type Item = Box;
    type IntoIter = std::vec::IntoIter<Box>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Boxa {
    type Item = &'a Box;
    type IntoIter = std::slice::Iter<'a, Box>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_new_rejects_negative() {
        assert!(Box::new(0, 0, -1, 5).is_err());
        assert!(Box::new(0, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_box_edges() {
        let b = Box::new_unchecked(2, 3, 4, 5);
        assert_eq!(b.right(), 6);
        assert_eq!(b.bottom(), 8);
        assert_eq!(b.area(), 20);
        assert!(b.contains_point(5, 7));
        assert!(!b.contains_point(6, 7));
    }

    #[test]
    fn test_adjacent_boxes_do_not_overlap() {
        let a = Box::new_unchecked(0, 0, 2, 2);
        let b = Box::new_unchecked(2, 0, 2, 2);
        assert!(!a.overlaps(&b));
        let c = Box::new_unchecked(1, 1, 2, 2);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_boxa_overlap_and_area() {
        let boxa: Boxa = [
            Box::new_unchecked(0, 0, 2, 2),
            Box::new_unchecked(2, 0, 3, 2),
        ]
        .into_iter()
        .collect();
        assert!(!boxa.has_overlap());
        assert_eq!(boxa.total_area(), 10);
    }

}
