//! Mapping from bracket nodes to the alliance seeds that enter the bracket there.

use crate::models::BracketNode;

/// Standard pairing for a 16-alliance bracket, listed in bracket order.
pub const SEED_ORDER: [u32; 16] = [1, 16, 8, 9, 4, 13, 5, 12, 2, 15, 7, 10, 3, 14, 6, 11];

/// Seeds placed directly into a node from alliance selection, red side then blue side.
///
/// Only nodes where some alliances play their first match yield candidates, and a candidate is
/// only direct if its seed number is at most `4 * round - num_alliances`. Everything else comes
/// from the child nodes.
pub fn direct_seeds(node: BracketNode, num_alliances: usize) -> (Option<u32>, Option<u32>) {
    let round = node.round.depth() as usize;
    if num_alliances >= 4 * round {
        return (None, None);
    }
    let factor = SEED_ORDER.len() / round;
    let base = node.group.saturating_sub(1) as usize * factor;
    let num_direct = 4 * round - num_alliances;
    let direct = |index: usize| {
        SEED_ORDER
            .get(index)
            .copied()
            .filter(|&seed| seed as usize <= num_direct)
    };
    (direct(base), direct(base + factor / 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Round;

    #[test]
    fn eight_alliances_seed_the_quarterfinals() {
        let qf = |g| BracketNode::new(Round::Quarterfinal, g);
        assert_eq!(direct_seeds(qf(1), 8), (Some(1), Some(8)));
        assert_eq!(direct_seeds(qf(2), 8), (Some(4), Some(5)));
        assert_eq!(direct_seeds(qf(3), 8), (Some(2), Some(7)));
        assert_eq!(direct_seeds(qf(4), 8), (Some(3), Some(6)));
        assert_eq!(direct_seeds(BracketNode::new(Round::Semifinal, 1), 8), (None, None));
    }

    #[test]
    fn byes_go_to_the_top_seeds() {
        // Six alliances: seeds 1 and 2 skip the quarterfinals.
        let sf = |g| BracketNode::new(Round::Semifinal, g);
        assert_eq!(direct_seeds(sf(1), 6), (Some(1), None));
        assert_eq!(direct_seeds(sf(2), 6), (Some(2), None));
        let qf = |g| BracketNode::new(Round::Quarterfinal, g);
        assert_eq!(direct_seeds(qf(2), 6), (Some(4), Some(5)));
        assert_eq!(direct_seeds(qf(4), 6), (Some(3), Some(6)));
    }

    #[test]
    fn two_and_three_alliances_meet_in_the_final() {
        assert_eq!(direct_seeds(BracketNode::FINAL, 2), (Some(1), Some(2)));
        assert_eq!(direct_seeds(BracketNode::FINAL, 3), (Some(1), None));
        let sf2 = BracketNode::new(Round::Semifinal, 2);
        assert_eq!(direct_seeds(sf2, 3), (Some(2), Some(3)));
    }
}
