use num_traits::AsPrimitive;

use crate::{partial_max, partial_min, Scalar, Vector2};

/// An axis-aligned rectangle in 2D space.
///
/// The rectangle is expected to satisfy `left <= right` and `top <= bottom`, but this is not enforced. Some operations
/// (most notably [`Rectangle::clipped`]) produce inverted rectangles, which is a valid value that simply has a
/// non-positive [`width`](Rectangle::width) or [`height`](Rectangle::height). Check [`Rectangle::is_empty`] before using a
/// rectangle for drawing or hit-testing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rectangle<T> {
    /// The left bound.
    pub left: T,
    /// The right bound.
    pub right: T,
    /// The top bound.
    pub top: T,
    /// The bottom bound.
    pub bottom: T,
}

impl<T> Rectangle<T> where
    T: Scalar,
{
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `left`: The left bound.
    /// * `right`: The right bound.
    /// * `top`: The top bound.
    /// * `bottom`: The bottom bound.
    #[inline(always)]
    pub fn new(left: T, right: T, top: T, bottom: T) -> Self {
        Self { left, right, top, bottom }
    }

    /// Creates a new instance from two corners.
    ///
    /// # Parameters
    /// * `top_left`: The top-left corner.
    /// * `bottom_right`: The bottom-right corner.
    #[inline(always)]
    pub fn from_corners(top_left: Vector2<T>, bottom_right: Vector2<T>) -> Self {
        Self::new(top_left.x, bottom_right.x, top_left.y, bottom_right.y)
    }

    /// Creates a new instance from a corner and a size.
    ///
    /// # Parameters
    /// * `top_left`: The top-left corner.
    /// * `width`: The width.
    /// * `height`: The height.
    #[inline(always)]
    pub fn from_size(top_left: Vector2<T>, width: T, height: T) -> Self {
        Self::from_corners(top_left, top_left + Vector2::new(width, height))
    }

    /// Creates a new instance that is symmetric about `center`.
    ///
    /// # Parameters
    /// * `center`: The center.
    /// * `half_width`: The distance from the center to the left and right bounds.
    /// * `half_height`: The distance from the center to the top and bottom bounds.
    #[inline(always)]
    pub fn from_center(center: Vector2<T>, half_width: T, half_height: T) -> Self {
        let half = Vector2::new(half_width, half_height);
        Self::from_corners(center - half, center + half)
    }

    /// Converts to a rectangle of another element type.
    ///
    /// The conversion has the same `as` semantics as [`Vector2::to`].
    #[inline(always)]
    pub fn to<U>(self) -> Rectangle<U> where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        Rectangle::new(self.left.as_(), self.right.as_(), self.top.as_(), self.bottom.as_())
    }

    /// Converts to a rectangle of another element type, if all bounds can be represented in `U`.
    ///
    /// See [`Vector2::try_to`].
    #[inline(always)]
    pub fn try_to<U>(self) -> Option<Rectangle<U>> where
        U: Scalar,
    {
        let top_left = self.top_left().try_to()?;
        let bottom_right = self.bottom_right().try_to()?;
        Some(Rectangle::from_corners(top_left, bottom_right))
    }

    #[inline(always)]
    pub fn top_left(&self) -> Vector2<T> {
        Vector2::new(self.left, self.top)
    }

    #[inline(always)]
    pub fn bottom_right(&self) -> Vector2<T> {
        Vector2::new(self.right, self.bottom)
    }

    #[inline(always)]
    pub fn width(&self) -> T {
        self.right - self.left
    }

    #[inline(always)]
    pub fn height(&self) -> T {
        self.bottom - self.top
    }

    /// Sets the width by moving the right bound.
    #[inline(always)]
    pub fn set_width(&mut self, width: T) {
        self.right = self.left + width;
    }

    /// Sets the height by moving the bottom bound.
    #[inline(always)]
    pub fn set_height(&mut self, height: T) {
        self.bottom = self.top + height;
    }

    #[inline(always)]
    pub fn size(&self) -> Vector2<T> {
        Vector2::new(self.width(), self.height())
    }

    /// Checks whether the rectangle covers no area (including inverted rectangles).
    ///
    /// Equivalent to `width() <= 0 || height() <= 0`, but compares the bounds directly so that it can not overflow.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Checks whether this rectangle overlaps with another.
    ///
    /// The check is exclusive: rectangles that only share an edge do not overlap.
    #[inline(always)]
    pub fn is_overlapping_with(&self, other: &Self) -> bool {
        self.right > other.left && self.left < other.right
            && self.bottom > other.top && self.top < other.bottom
    }

    /// Checks whether this rectangle lies within another.
    ///
    /// The check is inclusive: a rectangle is contained by an equal rectangle. Note the asymmetry with
    /// [`Self::is_overlapping_with`], which is exclusive.
    #[inline(always)]
    pub fn is_contained_by(&self, other: &Self) -> bool {
        self.left >= other.left && self.right <= other.right
            && self.top >= other.top && self.bottom <= other.bottom
    }

    /// Checks whether a point lies strictly inside this rectangle. Points on an edge are not contained.
    #[inline(always)]
    pub fn contains_point(&self, pos: Vector2<T>) -> bool {
        pos.x > self.left && pos.x < self.right
            && pos.y > self.top && pos.y < self.bottom
    }

    /// Moves the rectangle so that its top-left corner ends up at `point`. The size is preserved.
    pub fn move_to(&mut self, point: Vector2<T>) {
        self.right += point.x - self.left;
        self.bottom += point.y - self.top;
        self.left = point.x;
        self.top = point.y;
    }

    /// Moves the rectangle by `amount`.
    pub fn move_by(&mut self, amount: Vector2<T>) {
        self.left += amount.x;
        self.right += amount.x;
        self.top += amount.y;
        self.bottom += amount.y;
    }

    /// Returns a copy of the rectangle moved by `amount`.
    pub fn moved_by(&self, amount: Vector2<T>) -> Self {
        let mut out = *self;
        out.move_by(amount);
        out
    }

    /// Shrinks the longer dimension to match the shorter one.
    ///
    /// The top-left corner stays in place.
    pub fn squareize(&mut self) {
        if self.width() > self.height() {
            self.set_width(self.height());
        } else {
            self.set_height(self.width());
        }
    }

    /// Divides every bound by a factor per axis.
    ///
    /// The division happens on a floating point intermediate and the result is truncated back to `T`.
    ///
    /// # Parameters
    /// * `amount`: The divisor for the horizontal (`x`) and vertical (`y`) bounds.
    pub fn float_divide(&mut self, amount: Vector2<f32>) {
        let divide = |value: T, divisor: f32| T::from_f64_lossy(value.as_f64() / f64::from(divisor));
        self.left = divide(self.left, amount.x);
        self.right = divide(self.right, amount.x);
        self.top = divide(self.top, amount.y);
        self.bottom = divide(self.bottom, amount.y);
    }

    /// Returns a copy of the rectangle with every side moved outward by `offset`. A negative `offset` shrinks.
    pub fn expanded(&self, offset: T) -> Self {
        Self::new(self.left - offset, self.right + offset, self.top - offset, self.bottom + offset)
    }

    /// The center. Truncated for integral element types.
    #[inline(always)]
    pub fn center(&self) -> Vector2<T> {
        Vector2::new((self.left + self.right) / T::two(), (self.top + self.bottom) / T::two())
    }

    /// Returns the intersection of this rectangle with `clip`.
    ///
    /// Every bound is clamped into `clip`. If the rectangles do not overlap the result is inverted (or zero-sized), which
    /// can be detected with [`Self::is_empty`].
    pub fn clipped(&self, clip: &Self) -> Self {
        Self::new(
            partial_max(self.left, clip.left),
            partial_min(self.right, clip.right),
            partial_max(self.top, clip.top),
            partial_min(self.bottom, clip.bottom),
        )
    }
}

impl<A, B, T> From<(A, B)> for Rectangle<T> where
    A: Into<Vector2<T>>,
    B: Into<Vector2<T>>,
    T: Scalar,
{
    #[inline(always)]
    fn from(args: (A, B)) -> Self {
        Self::from_corners(args.0.into(), args.1.into())
    }
}

#[cfg(test)]
mod test_rect {
    use crate::Vector2;

    type Rect = super::Rectangle<i32>;
    type Vector = Vector2<i32>;

    #[test]
    fn test_construction() {
        let expected = Rect::new(2, 12, 3, 8);
        assert_eq!(expected, Rect::from_corners((2, 3).into(), (12, 8).into()));
        assert_eq!(expected, Rect::from_size((2, 3).into(), 10, 5));
        assert_eq!(expected, ((2, 3), (12, 8)).into());
        assert_eq!(Rect::new(4, 10, -1, 5), Rect::from_center((7, 2).into(), 3, 3));
    }

    #[test]
    fn test_size_round_trip() {
        let rect = Rect::from_size((-5, 9).into(), 16, 4);
        assert_eq!(Vector::new(16, 4), rect.size());
        assert_eq!(16, rect.width());
        assert_eq!(4, rect.height());
    }

    #[test]
    fn test_overlapping() {
        let a: Rect = ((0, 0), (10, 10)).into();
        let cases: [(Rect, bool); 6] = [
            (((5, 5), (15, 15)).into(), true),
            (((2, 2), (4, 4)).into(), true),
            // Sharing an edge
            (((10, 0), (20, 10)).into(), false),
            (((0, 10), (10, 20)).into(), false),
            // Sharing a corner
            (((10, 10), (20, 20)).into(), false),
            (((30, 30), (40, 40)).into(), false),
        ];
        for (b, expected) in cases {
            assert_eq!(expected, a.is_overlapping_with(&b), "{:?} vs {:?}", a, b);
            assert_eq!(expected, b.is_overlapping_with(&a), "{:?} vs {:?}", b, a);
        }
    }

    #[test]
    fn test_contained_by() {
        let outer: Rect = ((0, 0), (10, 10)).into();
        assert!(outer.is_contained_by(&outer));
        assert!(Rect::new(0, 5, 0, 10).is_contained_by(&outer));
        assert!(!Rect::new(-1, 5, 0, 10).is_contained_by(&outer));
        assert!(!Rect::new(0, 5, 0, 11).is_contained_by(&outer));
        assert!(!outer.is_contained_by(&Rect::new(1, 9, 1, 9)));
    }

    #[test]
    fn test_contains_point() {
        let rect: Rect = ((0, 0), (10, 10)).into();
        assert!(rect.contains_point((5, 5).into()));
        assert!(rect.contains_point((1, 9).into()));
        assert!(!rect.contains_point((0, 5).into()));
        assert!(!rect.contains_point((5, 10).into()));
        assert!(!rect.contains_point((10, 10).into()));
        assert!(!rect.contains_point((-3, 5).into()));
    }

    #[test]
    fn test_move() {
        let mut rect = Rect::new(2, 12, 3, 8);
        rect.move_to((-1, 1).into());
        assert_eq!(Rect::new(-1, 9, 1, 6), rect);

        rect.move_by((4, -2).into());
        assert_eq!(Rect::new(3, 13, -1, 4), rect);

        let moved = rect.moved_by((1, 1).into());
        assert_eq!(Rect::new(4, 14, 0, 5), moved);
        // Original is untouched
        assert_eq!(Rect::new(3, 13, -1, 4), rect);
    }

    #[test]
    fn test_squareize() {
        let mut wide = Rect::new(2, 12, 3, 8);
        wide.squareize();
        assert_eq!(Rect::new(2, 7, 3, 8), wide);

        let mut tall = Rect::new(2, 4, 3, 8);
        tall.squareize();
        assert_eq!(Rect::new(2, 4, 3, 5), tall);

        let mut square = Rect::new(0, 4, 0, 4);
        square.squareize();
        assert_eq!(Rect::new(0, 4, 0, 4), square);
    }

    #[test]
    fn test_float_divide() {
        let mut rect = Rect::new(10, 25, -9, 40);
        rect.float_divide(Vector2::new(2.0, 4.0));
        assert_eq!(Rect::new(5, 12, -2, 10), rect);

        let mut rect = super::Rectangle::new(1.0f32, 3.0, 2.0, 5.0);
        rect.float_divide(Vector2::new(2.0, 0.5));
        assert_eq!(super::Rectangle::new(0.5f32, 1.5, 4.0, 10.0), rect);
    }

    #[test]
    fn test_expanded() {
        let rect = Rect::new(2, 12, 3, 8);
        assert_eq!(rect, rect.expanded(0));
        assert_eq!(Rect::new(-1, 15, 0, 11), rect.expanded(3));
        assert_eq!(Rect::new(3, 11, 4, 7), rect.expanded(-1));
        for n in [-2, 1, 7] {
            assert_eq!(rect, rect.expanded(n).expanded(-n));
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(Vector::new(7, 5), Rect::new(2, 12, 3, 8).center());
        assert_eq!(Vector2::new(7.0, 5.5), super::Rectangle::new(2.0, 12.0, 3.0, 8.0).center());
    }

    #[test]
    fn test_clipped() {
        let clip: Rect = ((0, 0), (10, 10)).into();
        assert_eq!(Rect::new(5, 10, 0, 4), Rect::new(5, 15, -5, 4).clipped(&clip));
        assert_eq!(Rect::new(2, 4, 2, 4), Rect::new(2, 4, 2, 4).clipped(&clip));

        let disjoint = Rect::new(20, 30, 0, 10).clipped(&clip);
        assert!(disjoint.width() <= 0 || disjoint.height() <= 0);
        assert!(disjoint.is_empty());

        let touching = Rect::new(10, 20, 0, 10).clipped(&clip);
        assert!(touching.is_empty());

        // The width of these does not fit in an i32
        assert!(Rect::new(i32::MAX, i32::MIN, 0, 10).is_empty());
        assert!(!Rect::new(0, 10, i32::MIN, i32::MAX).is_empty());
    }

    #[test]
    fn test_set_size() {
        let mut rect = Rect::new(2, 12, 3, 8);
        rect.set_width(3);
        rect.set_height(20);
        assert_eq!(Rect::new(2, 5, 3, 23), rect);
    }

    #[test]
    fn test_conversion() {
        let rect = super::Rectangle::new(0.9f64, 10.5, -3.7, 8.0);
        assert_eq!(Rect::new(0, 10, -3, 8), rect.to::<i32>());
        assert_eq!(Some(Rect::new(0, 10, -3, 8)), rect.try_to::<i32>());
        assert_eq!(None, super::Rectangle::new(0i32, 300, 0, 1).try_to::<i8>());
    }
}
