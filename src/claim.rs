use crate::grid::Grid;

/// Which sides keep their claims after a round is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Outcome {
    pub self_wins: bool,
    pub opponent_wins: bool,
}

/// Whether `candidate` may extend the in-progress selection.
///
/// An empty selection accepts any cell (the first pick may land anywhere).
/// Otherwise the candidate must be new and adjacent to at least one member.
/// Connectivity of the whole selection follows inductively: every accepted
/// member was adjacent to the set it joined.
pub fn is_selectable(grid: Grid, selection: &[usize], candidate: usize) -> bool {
    if selection.is_empty() {
        return true;
    }
    if selection.contains(&candidate) {
        return false;
    }
    selection
        .iter()
        .any(|&member| grid.is_adjacent(member, candidate))
}

/// Compares the two submitted claims.
///
/// Fully disjoint claims both stand. On any overlap the strictly smaller
/// claim wins exclusivity; equal-size contested claims both lose.
pub fn compare_claims(self_claim: &[usize], opponent_claim: &[usize]) -> Outcome {
    let disjoint = self_claim
        .iter()
        .all(|index| !opponent_claim.contains(index));

    if disjoint {
        Outcome {
            self_wins: true,
            opponent_wins: true,
        }
    } else {
        Outcome {
            self_wins: self_claim.len() < opponent_claim.len(),
            opponent_wins: opponent_claim.len() < self_claim.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(6, 6)
    }

    #[test]
    fn t01_empty_selection_accepts_any_cell() {
        for i in 0..36 {
            assert!(is_selectable(grid(), &[], i));
        }
    }

    #[test]
    fn t02_candidate_must_touch_the_selection() {
        assert!(is_selectable(grid(), &[0], 1));
        assert!(is_selectable(grid(), &[0], 6));
        assert!(!is_selectable(grid(), &[0], 2));
        assert!(!is_selectable(grid(), &[0], 7));
    }

    #[test]
    fn t03_already_selected_cell_is_rejected() {
        assert!(!is_selectable(grid(), &[0, 1], 1));
    }

    #[test]
    fn adjacency_to_any_member_suffices() {
        // 14 touches only the tail of the selection.
        assert!(is_selectable(grid(), &[0, 1, 2, 8], 14));
    }

    #[test]
    fn incremental_growth_stays_edge_connected() {
        let grid = grid();
        let mut selection: Vec<usize> = Vec::new();

        for candidate in [14, 15, 9, 21, 20] {
            assert!(is_selectable(grid, &selection, candidate));
            selection.push(candidate);
        }

        // Every member except the first reaches the rest of the set.
        for (pos, &member) in selection.iter().enumerate().skip(1) {
            assert!(
                selection[..pos]
                    .iter()
                    .any(|&other| grid.is_adjacent(member, other))
            );
        }
    }

    #[test]
    fn disjoint_claims_both_stand() {
        let outcome = compare_claims(&[0, 1, 2], &[5]);
        assert_eq!(
            outcome,
            Outcome {
                self_wins: true,
                opponent_wins: true,
            }
        );
    }

    #[test]
    fn smaller_claim_wins_a_contested_round() {
        let outcome = compare_claims(&[0, 1], &[1, 2, 3]);
        assert!(outcome.self_wins);
        assert!(!outcome.opponent_wins);

        let flipped = compare_claims(&[1, 2, 3], &[0, 1]);
        assert!(!flipped.self_wins);
        assert!(flipped.opponent_wins);
    }

    #[test]
    fn equal_size_contested_claims_both_lose() {
        let outcome = compare_claims(&[0, 1], &[1, 2]);
        assert_eq!(
            outcome,
            Outcome {
                self_wins: false,
                opponent_wins: false,
            }
        );
    }
}
