//! Star rating rendering for course cards.

/// One of the five rating icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarKind {
    Full,
    Half,
    Empty,
}

impl StarKind {
    pub fn icon_class(&self) -> &'static str {
        match self {
            StarKind::Full => "fas fa-star",
            StarKind::Half => "fas fa-star-half-alt",
            StarKind::Empty => "far fa-star",
        }
    }
}

/// Icon `i` (1-based) is full when `i <= rating`, half when `rating` is
/// within 0.5 below `i`, empty otherwise.
pub fn rating_stars(rating: f32) -> [StarKind; 5] {
    std::array::from_fn(|idx| {
        let i = (idx + 1) as f32;
        if i <= rating {
            StarKind::Full
        } else if i - 0.5 <= rating {
            StarKind::Half
        } else {
            StarKind::Empty
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use StarKind::*;

    #[test]
    fn test_whole_ratings() {
        assert_eq!(rating_stars(4.0), [Full, Full, Full, Full, Empty]);
        assert_eq!(rating_stars(5.0), [Full; 5]);
        assert_eq!(rating_stars(0.0), [Empty; 5]);
    }

    #[test]
    fn test_half_ratings() {
        assert_eq!(rating_stars(3.5), [Full, Full, Full, Half, Empty]);
        assert_eq!(rating_stars(3.7), [Full, Full, Full, Half, Empty]);
        assert_eq!(rating_stars(3.4), [Full, Full, Full, Empty, Empty]);
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(Half.icon_class(), "fas fa-star-half-alt");
        assert_eq!(Empty.icon_class(), "far fa-star");
    }
}
