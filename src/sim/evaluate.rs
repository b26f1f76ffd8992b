//! Landing evaluation

use serde::{Deserialize, Serialize};

use super::road::{Cell, Road};

/// What happens after a landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Landed on a passable cell; keep playing
    Continue,
    /// Fell into a gap or ran off the end of the road
    Reset,
}

/// Check a landing index against the road
pub fn evaluate(landed_index: usize, road: &Road) -> Verdict {
    match road.get(landed_index) {
        Some(Cell::Passable) => Verdict::Continue,
        Some(Cell::Gap) | None => Verdict::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::road::Cell::{Gap, Passable};

    #[test]
    fn test_evaluate() {
        let road = Road::from_cells(vec![Passable, Gap, Passable, Passable, Gap]).unwrap();
        assert_eq!(evaluate(0, &road), Verdict::Continue);
        assert_eq!(evaluate(1, &road), Verdict::Reset);
        assert_eq!(evaluate(2, &road), Verdict::Continue);
        assert_eq!(evaluate(3, &road), Verdict::Continue);
        assert_eq!(evaluate(4, &road), Verdict::Reset);
    }

    #[test]
    fn test_overrun_resets() {
        let road = Road::from_cells(vec![Passable; 3]).unwrap();
        assert_eq!(evaluate(2, &road), Verdict::Continue);
        assert_eq!(evaluate(3, &road), Verdict::Reset);
        assert_eq!(evaluate(usize::MAX, &road), Verdict::Reset);
    }
}
