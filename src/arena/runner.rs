//! Game loop pitting two agents against each other.

use tracing::{debug, trace};

use crate::core::{GameState, PlayerId, SearchError};

use super::agent::Agent;
use super::record::MatchRecord;

/// Play `initial` to the end.
///
/// `first` moves whenever `PlayerId::FIRST` is on turn and `second`
/// whenever `PlayerId::SECOND` is, so a position with `O` to move starts
/// with `second`.
pub fn play_match<S, A, B>(
    initial: S,
    first: &mut A,
    second: &mut B,
) -> Result<MatchRecord<S::Move>, SearchError>
where
    S: GameState,
    A: Agent<S> + ?Sized,
    B: Agent<S> + ?Sized,
{
    let agents = [first.name().to_string(), second.name().to_string()];
    let mut state = initial;
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let mv = if player == PlayerId::FIRST {
            first.choose_move(&state)?
        } else {
            second.choose_move(&state)?
        };
        debug_assert!(
            state.valid_moves().contains(&mv),
            "agent returned illegal move {mv:?}"
        );

        trace!(ply = moves.len(), player = %player, mv = ?mv, "move played");
        state.apply(&mv);
        moves.push(mv);
    }

    let winner = state.winner();
    debug!(
        first = %agents[0],
        second = %agents[1],
        plies = moves.len(),
        ?winner,
        "match finished"
    );

    Ok(MatchRecord {
        agents,
        plies: moves.len(),
        moves,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{MinimaxAgent, RandomAgent};
    use crate::games::TicTacToe;
    use crate::minimax::MinimaxConfig;

    #[test]
    fn test_random_match_terminates() {
        let mut x = RandomAgent::new(1);
        let mut o = RandomAgent::new(2);

        let record = play_match(TicTacToe::new(), &mut x, &mut o).unwrap();

        assert_eq!(record.plies, record.moves.len());
        assert!(record.plies >= 5 && record.plies <= 9);
        assert_eq!(record.agents, ["random".to_string(), "random".to_string()]);
        assert!(record.replay(TicTacToe::new()).is_ok());
    }

    #[test]
    fn test_second_seat_moves_when_o_to_play() {
        // O wins on the spot; X's agent must never be asked.
        let board = TicTacToe::from_rows(&["XX.", "OO.", "X.."], PlayerId::SECOND).unwrap();
        let mut x = RandomAgent::new(0);
        let mut o = MinimaxAgent::new(MinimaxConfig::unbounded());

        let record = play_match(board, &mut x, &mut o).unwrap();

        assert_eq!(record.moves, vec![(1, 2)]);
        assert_eq!(record.winner, Some(PlayerId::SECOND));
        assert_eq!(record.winner_name(), Some("minimax"));
    }

    #[test]
    fn test_finished_position_plays_nothing() {
        let won = TicTacToe::from_rows(&["XXX", "OO.", "..."], PlayerId::SECOND).unwrap();
        let record = play_match(won, &mut RandomAgent::new(0), &mut RandomAgent::new(1)).unwrap();

        assert_eq!(record.plies, 0);
        assert_eq!(record.winner, Some(PlayerId::FIRST));
    }

    #[test]
    fn test_trait_objects() {
        let mut x: Box<dyn Agent<TicTacToe>> = Box::new(MinimaxAgent::new(MinimaxConfig::unbounded()));
        let mut o: Box<dyn Agent<TicTacToe>> = Box::new(MinimaxAgent::new(MinimaxConfig::unbounded()));

        let record = play_match(TicTacToe::new(), x.as_mut(), o.as_mut()).unwrap();

        assert_eq!(record.winner, None);
        assert_eq!(record.plies, 9);
    }
}
