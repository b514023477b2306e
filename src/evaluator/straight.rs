use crate::cards::Rank;

const WHEEL: u16 = rank_bit(Rank::Ace) | 0b11110;
const RUN: u16 = 0b11111;

const fn rank_bit(rank: Rank) -> u16 {
    1 << (rank.value() - 1)
}

/// Top card of the straight formed by `ranks`, if any.
///
/// Ranks may come in any order. The wheel (A-2-3-4-5) plays the Ace as a one and is a
/// Five-high straight, the lowest there is.
pub fn top_rank(ranks: &[Rank; 5]) -> Option<Rank> {
    let mask = ranks.iter().fold(0u16, |acc, &r| acc | rank_bit(r));
    if mask.count_ones() != 5 {
        return None;
    }
    if mask == WHEEL {
        return Some(Rank::Five);
    }
    let low = mask.trailing_zeros();
    if mask >> low != RUN {
        return None;
    }
    Rank::from_value((low + 5) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn regular_straight() {
        assert_eq!(top_rank(&[King, Queen, Jack, Ten, Nine]), Some(King));
    }

    #[test]
    fn broadway() {
        assert_eq!(top_rank(&[Ace, King, Queen, Jack, Ten]), Some(Ace));
    }

    #[test]
    fn wheel_is_five_high() {
        assert_eq!(top_rank(&[Ace, Two, Three, Four, Five]), Some(Five));
    }

    #[test]
    fn six_high() {
        assert_eq!(top_rank(&[Six, Five, Four, Three, Two]), Some(Six));
    }

    #[test]
    fn no_wraparound() {
        assert_eq!(top_rank(&[Queen, King, Ace, Two, Three]), None);
    }

    #[test]
    fn gaps_and_pairs() {
        assert_eq!(top_rank(&[Ace, King, Queen, Jack, Nine]), None);
        assert_eq!(top_rank(&[Ace, Ace, King, Queen, Jack]), None);
    }

    #[test]
    fn unsorted_input() {
        assert_eq!(top_rank(&[Nine, King, Ten, Jack, Queen]), Some(King));
    }
}
