//! Two computer players play a full game to 121.
//!
//! Pass a seed as the first argument to replay a game.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{ComputerPlayer, Game, GameOptions, Margin, PegEvent, Player, RoundResult, ShowKind};

fn main() {
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Cribbage computer match (seed {seed})");

    let mut game = Game::new(GameOptions::default(), seed);
    let mut north = ComputerPlayer::new("North");
    let mut south = ComputerPlayer::new("South");

    let [first_cut, second_cut] = game.cut_for_deal();
    println!(
        "{} cuts {first_cut}, {} cuts {second_cut}",
        north.name(),
        south.name()
    );

    let mut players: [&mut dyn Player; 2] = [&mut north, &mut south];
    println!("{} deals first", players[game.dealer().index()].name());

    loop {
        let result = match game.play_round(&mut players) {
            Ok(result) => result,
            Err(err) => {
                println!("Round error: {err}");
                return;
            }
        };
        print_round(game.rounds(), &result, &players);

        if let Some(winner) = result.winner {
            let winner = players[winner.index()].name();
            let loser = players[0].score().min(players[1].score());
            let margin = match game.options.margin(loser) {
                Margin::Win => "",
                Margin::Skunk => " with a skunk",
                Margin::DoubleSkunk => " with a double skunk",
            };
            println!("{winner} wins after {} rounds{margin}.", game.rounds());
            break;
        }
    }
}

fn print_round(number: u32, result: &RoundResult, players: &[&mut dyn Player; 2]) {
    let name = |seat: cribrs::Seat| players[seat.index()].name();

    println!();
    println!(
        "Round {number}: {} deals, cut {}{}",
        name(result.dealer),
        result.cut,
        if result.his_heels { " (his heels)" } else { "" }
    );

    for event in &result.pegging {
        match event {
            PegEvent::Play {
                seat,
                card,
                sum,
                score,
            } => {
                if score.is_scoring() {
                    println!("  {} plays {card} for {sum}, pegs {}", name(*seat), score.total());
                } else {
                    println!("  {} plays {card} for {sum}", name(*seat));
                }
            }
            PegEvent::Go { seat } => println!("  {} says go", name(*seat)),
            PegEvent::LastCard { seat } => println!("  {} pegs 1 for last card", name(*seat)),
            PegEvent::Reset { .. } => println!("  -- count starts over --"),
        }
    }

    for count in &result.show {
        let kind = match count.kind {
            ShowKind::Hand => "hand",
            ShowKind::Crib => "crib",
        };
        println!(
            "  {} {kind} {}: {}",
            name(count.seat),
            count.cards,
            count.breakdown.total
        );
    }

    println!(
        "  Score: {} {}, {} {}",
        players[0].name(),
        players[0].score(),
        players[1].name(),
        players[1].score()
    );
}
