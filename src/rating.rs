//! Star Rating
//!
//! Clicking star *k* fills stars 1..=k and empties the rest.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarState {
    Filled,
    Empty,
}

impl StarState {
    /// Boxicons class for this state
    pub fn class(&self) -> &'static str {
        match self {
            StarState::Filled => "bxs-star",
            StarState::Empty => "bx-star",
        }
    }

    /// Class to remove when switching to this state
    pub fn opposite_class(&self) -> &'static str {
        match self {
            StarState::Filled => "bx-star",
            StarState::Empty => "bxs-star",
        }
    }
}

/// State of the star carrying `data-rating = star` after `clicked` was chosen
pub fn star_state(star: u32, clicked: u32) -> StarState {
    if star <= clicked {
        StarState::Filled
    } else {
        StarState::Empty
    }
}

/// States for stars 1..=max
pub fn star_states(clicked: u32, max: u32) -> Vec<StarState> {
    (1..=max).map(|star| star_state(star, clicked)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rating_fills_prefix() {
        let max = 5;
        for k in 1..=max {
            let states = star_states(k, max);
            assert_eq!(states.len(), max as usize);
            for (i, state) in states.iter().enumerate() {
                let star = i as u32 + 1;
                let expected = if star <= k { StarState::Filled } else { StarState::Empty };
                assert_eq!(*state, expected, "rating {k}, star {star}");
            }
        }
    }

    #[test]
    fn test_classes() {
        assert_eq!(StarState::Filled.class(), "bxs-star");
        assert_eq!(StarState::Filled.opposite_class(), "bx-star");
        assert_eq!(StarState::Empty.class(), "bx-star");
    }
}
