use core::fmt;

/// The scroll axis of a viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    fn axis(self) -> char {
        match self {
            Self::Vertical => 'Y',
            Self::Horizontal => 'X',
        }
    }
}

/// Layout direction of the surrounding document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Instant,
    Smooth,
}

/// Which edge of the rendered content a content offset is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentAnchor {
    #[default]
    ToStart,
    /// The offset is the position of the *end* of the rendered content. It is rewritten into a
    /// `ToStart` offset once the rendered content has been measured.
    ToEnd,
}

/// An edge of the scroll container to measure a scroll offset from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEdge {
    Top,
    Bottom,
    Left,
    Right,
    /// `Left` in LTR layouts, `Right` in RTL layouts.
    Start,
    /// `Right` in LTR layouts, `Left` in RTL layouts.
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size along `orientation`'s scroll axis.
    pub fn along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }
}

/// The transform that positions the rendered content inside the scroll container.
///
/// `Display` produces the equivalent CSS transform, e.g. `translateY(120px)` or
/// `translateY(480px) translateY(-100%)` for end-anchored content.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentTransform {
    pub orientation: Orientation,
    /// Signed translation in pixels (negated for horizontal RTL layouts).
    pub translate: f64,
    pub anchor: ContentAnchor,
}

impl ContentTransform {
    pub fn new(
        orientation: Orientation,
        direction: Direction,
        offset: f64,
        anchor: ContentAnchor,
    ) -> Self {
        let mirrored = orientation.is_horizontal() && direction == Direction::Rtl;
        // `offset != 0.0` keeps `-0px` out of the CSS output.
        let translate = if mirrored && offset != 0.0 {
            -offset
        } else {
            offset
        };
        Self {
            orientation,
            translate,
            anchor,
        }
    }
}

impl fmt::Display for ContentTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = self.orientation.axis();
        write!(f, "translate{axis}({}px)", self.translate)?;
        if self.anchor == ContentAnchor::ToEnd {
            write!(f, " translate{axis}(-100%)")?;
        }
        Ok(())
    }
}
