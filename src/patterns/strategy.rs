//! Pattern 10: Strategy
//! Example: Rock-paper-scissors players with swappable playing strategies
//!
//! Run with: cargo run --bin p10_strategy

use std::fmt;
use std::io::Write;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::PlaygroundConfig;
use crate::error::Result;

// =============================================================================
// Hands
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    /// Out-of-range values wrap around, so any integer maps to a hand.
    pub fn from_value(value: usize) -> Hand {
        Self::ALL[value % 3]
    }

    pub fn value(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Scissors => "scissors",
            Hand::Paper => "paper",
        }
    }

    pub fn is_stronger_than(self, other: Hand) -> bool {
        self.fight(other) == 1
    }

    pub fn is_weaker_than(self, other: Hand) -> bool {
        self.fight(other) == -1
    }

    fn fight(self, other: Hand) -> i8 {
        if self == other {
            0
        } else if (self.value() + 1) % 3 == other.value() {
            1
        } else {
            -1
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Strategies
// =============================================================================

pub trait Strategy {
    fn next_hand(&mut self) -> Hand;
    fn study(&mut self, won: bool);
}

/// Keeps playing the hand that just won; otherwise picks at random.
pub struct WinningStrategy {
    rng: StdRng,
    won: bool,
    prev_hand: Hand,
}

impl WinningStrategy {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            won: false,
            prev_hand: Hand::Rock,
        }
    }
}

impl Strategy for WinningStrategy {
    fn next_hand(&mut self) -> Hand {
        if !self.won {
            self.prev_hand = Hand::from_value(self.rng.gen_range(0..3));
        }
        self.prev_hand
    }

    fn study(&mut self, won: bool) {
        self.won = won;
    }
}

/// Chooses the next hand weighted by how often each follow-up has won
/// after the previous hand.
pub struct ProbStrategy {
    rng: StdRng,
    prev_hand: usize,
    current_hand: usize,
    history: [[u32; 3]; 3],
}

impl ProbStrategy {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            prev_hand: 0,
            current_hand: 0,
            history: [[1; 3]; 3],
        }
    }

    fn total(&self, hand: usize) -> u32 {
        self.history[hand].iter().sum()
    }
}

impl Strategy for ProbStrategy {
    fn next_hand(&mut self) -> Hand {
        let mut bet = self.rng.gen_range(0..self.total(self.current_hand));
        let mut next = 2;
        for (hand, weight) in self.history[self.current_hand].iter().enumerate() {
            if bet < *weight {
                next = hand;
                break;
            }
            bet -= weight;
        }
        self.prev_hand = self.current_hand;
        self.current_hand = next;
        Hand::from_value(next)
    }

    fn study(&mut self, won: bool) {
        let (prev, current) = (self.prev_hand, self.current_hand);
        if won {
            self.history[prev][current] += 1;
        } else {
            self.history[prev][(current + 1) % 3] += 1;
            self.history[prev][(current + 2) % 3] += 1;
        }
    }
}

// =============================================================================
// Players
// =============================================================================

pub struct Player {
    name: String,
    strategy: Box<dyn Strategy>,
    win_count: u32,
    lose_count: u32,
    game_count: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
            win_count: 0,
            lose_count: 0,
            game_count: 0,
        }
    }

    pub fn next_hand(&mut self) -> Hand {
        self.strategy.next_hand()
    }

    pub fn win(&mut self) {
        self.strategy.study(true);
        self.win_count += 1;
        self.game_count += 1;
    }

    pub fn lose(&mut self) {
        self.strategy.study(false);
        self.lose_count += 1;
        self.game_count += 1;
    }

    pub fn even(&mut self) {
        self.game_count += 1;
    }

    pub fn wins(&self) -> u32 {
        self.win_count
    }

    pub fn losses(&self) -> u32 {
        self.lose_count
    }

    pub fn games(&self) -> u32 {
        self.game_count
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}\ngameCount: {}\nwinCount: {}\nloseCount: {}",
            self.name, self.game_count, self.win_count, self.lose_count
        )
    }
}

/// Plays one game and books the result on both players.
pub fn play_round(player1: &mut Player, player2: &mut Player) -> (Hand, Hand) {
    let hand1 = player1.next_hand();
    let hand2 = player2.next_hand();

    if hand1.is_stronger_than(hand2) {
        player1.win();
        player2.lose();
    } else if hand1.is_weaker_than(hand2) {
        player1.lose();
        player2.win();
    } else {
        player1.even();
        player2.even();
    }
    (hand1, hand2)
}

pub fn run(out: &mut dyn Write, config: &PlaygroundConfig) -> Result<()> {
    let mut taro = Player::new("Taro", Box::new(WinningStrategy::new(config.rng(101))));
    let mut hana = Player::new("Hana", Box::new(ProbStrategy::new(config.rng(102))));

    for round in 0..config.strategy.games {
        let (a, b) = play_round(&mut taro, &mut hana);
        log::trace!("round {round}: {a} vs {b}");
    }
    writeln!(out, "{taro}")?;
    writeln!(out, "{hana}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_relations() {
        use Hand::*;
        assert!(Rock.is_stronger_than(Scissors));
        assert!(Scissors.is_stronger_than(Paper));
        assert!(Paper.is_stronger_than(Rock));
        assert!(Rock.is_weaker_than(Paper));
        for hand in Hand::ALL {
            assert!(!hand.is_stronger_than(hand));
            assert!(!hand.is_weaker_than(hand));
        }
    }

    #[test]
    fn test_from_value_wraps() {
        assert_eq!(Hand::from_value(0), Hand::Rock);
        assert_eq!(Hand::from_value(2), Hand::Paper);
        assert_eq!(Hand::from_value(4), Hand::Scissors);
    }

    #[test]
    fn test_winning_strategy_repeats_after_win() {
        let mut strategy = WinningStrategy::new(PlaygroundConfig::seeded(3).rng(0));
        let first = strategy.next_hand();
        strategy.study(true);
        for _ in 0..10 {
            assert_eq!(strategy.next_hand(), first);
        }
    }

    #[test]
    fn test_prob_strategy_learns() {
        let mut strategy = ProbStrategy::new(PlaygroundConfig::seeded(3).rng(0));
        strategy.next_hand();
        let (prev, current) = (strategy.prev_hand, strategy.current_hand);
        strategy.study(true);
        assert_eq!(strategy.history[prev][current], 2);
        strategy.study(false);
        assert_eq!(strategy.total(prev), 6);
    }

    #[test]
    fn test_scores_balance() {
        let config = PlaygroundConfig::seeded(11);
        let mut a = Player::new("A", Box::new(WinningStrategy::new(config.rng(1))));
        let mut b = Player::new("B", Box::new(ProbStrategy::new(config.rng(2))));
        for _ in 0..250 {
            play_round(&mut a, &mut b);
        }
        assert_eq!(a.games(), 250);
        assert_eq!(b.games(), 250);
        assert_eq!(a.wins(), b.losses());
        assert_eq!(a.losses(), b.wins());
        assert!(a.wins() + a.losses() <= 250);
    }

    #[test]
    fn test_page_is_reproducible_with_seed() {
        let config = PlaygroundConfig::seeded(5);
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&mut first, &config).unwrap();
        run(&mut second, &config).unwrap();
        assert_eq!(first, second);

        let output = String::from_utf8(first).unwrap();
        assert!(output.starts_with("name: Taro\ngameCount: 101\n"));
        assert!(output.contains("name: Hana\ngameCount: 101\n"));
    }
}
