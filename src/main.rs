//! Console blackjack: one round against the dealer.

use std::io::{self, BufRead, Write};

use bjsolo::{Action, Draw, Outcome, Round, RoundOptions, RoundState};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let mut round = Round::new(RoundOptions::default());
    let outcome = play_round(&mut round, &mut input, &mut out)?;

    match outcome {
        Outcome::Win => writeln!(out, "You win!"),
        Outcome::Loss => writeln!(out, "You lose!"),
    }
}

fn play_round(
    round: &mut Round,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Outcome> {
    let opening = round.deal().map_err(io::Error::other)?;
    writeln!(
        out,
        "The dealer is showing: {} ({})",
        opening.dealer.card, opening.dealer.score
    )?;
    let [first, second] = opening.player;
    writeln!(
        out,
        "You have: {} {} ({})",
        first.card, second.card, second.score
    )?;

    while round.state() == RoundState::PlayerTurn {
        match prompt_action(input, out)? {
            Action::Hit => {
                let draw = round.hit().map_err(io::Error::other)?;
                announce(out, "You draw", "You now have", draw)?;
            }
            Action::Stand => round.stand().map_err(io::Error::other)?,
        }
    }

    if round.result().is_some_and(|result| result.player_bust) {
        writeln!(out, "You busted!")?;
    }

    if round.state() == RoundState::DealerTurn {
        for draw in round.dealer_play().map_err(io::Error::other)? {
            announce(out, "The dealer draws", "The dealer now has", draw)?;
        }
        if round.result().is_some_and(|result| result.dealer_bust) {
            writeln!(out, "The dealer busted!")?;
        }
    }

    round
        .result()
        .map(|result| result.outcome)
        .ok_or_else(|| io::Error::other("round ended without a result"))
}

fn announce(out: &mut impl Write, drew: &str, now: &str, draw: Draw) -> io::Result<()> {
    writeln!(out, "{drew} a {}", draw.card)?;
    writeln!(out, "{now} {}", draw.score)
}

fn prompt_action(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Action> {
    loop {
        write!(out, "(h) to hit, or (s) to stand: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the round finished",
            ));
        }

        match line.parse::<Action>() {
            Ok(action) => return Ok(action),
            Err(err) => warn!(target: "console.input", %err, "rejected input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use bjsolo::{Card, DECK_SIZE, Deck, Rank, Suit};

    use super::*;

    fn scripted_round(draws: &[Card]) -> Round {
        let mut order: Vec<Card> = draws.to_vec();
        order.extend(
            Deck::with_seed(0)
                .cards()
                .iter()
                .filter(|card| !draws.contains(card)),
        );
        assert_eq!(order.len(), DECK_SIZE);
        Round::with_deck(RoundOptions::default(), Deck::from_cards(&order).unwrap())
    }

    fn run(draws: &[Card], typed: &str) -> (Outcome, String) {
        let mut round = scripted_round(draws);
        let mut input = typed.as_bytes();
        let mut out = Vec::new();
        let outcome = play_round(&mut round, &mut input, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn transcript_reprompts_on_bad_input() {
        let (outcome, transcript) = run(
            &[
                Card::new(Rank::Seven, Suit::Club),
                Card::new(Rank::King, Suit::Heart),
                Card::new(Rank::Queen, Suit::Spade),
                Card::new(Rank::Ten, Suit::Diamond),
            ],
            "x\nstand\n",
        );

        assert_eq!(outcome, Outcome::Win);
        assert!(transcript.starts_with("The dealer is showing: 7C (7)\nYou have: KH QS (20)\n"));
        assert_eq!(transcript.matches("(h) to hit, or (s) to stand: ").count(), 2);
        assert!(transcript.contains("The dealer draws a TD\nThe dealer now has 17\n"));
    }

    #[test]
    fn transcript_reports_player_bust() {
        let (outcome, transcript) = run(
            &[
                Card::new(Rank::Two, Suit::Club),
                Card::new(Rank::King, Suit::Heart),
                Card::new(Rank::Six, Suit::Spade),
                Card::new(Rank::Nine, Suit::Diamond),
            ],
            "h\n",
        );

        assert_eq!(outcome, Outcome::Loss);
        assert!(transcript.contains("You draw a 9D\nYou now have 25\nYou busted!\n"));
        assert!(!transcript.contains("The dealer draws"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut round = scripted_round(&[
            Card::new(Rank::Two, Suit::Club),
            Card::new(Rank::Three, Suit::Heart),
            Card::new(Rank::Four, Suit::Spade),
        ]);
        let mut input: &[u8] = b"";
        let err = play_round(&mut round, &mut input, &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
