//! Agent match tests.

use gametree::arena::{play_match, Agent, MatchRecord, MctsAgent, MinimaxAgent, RandomAgent};
use gametree::core::{GameState, PlayerId};
use gametree::games::{Connect4, TicTacToe};
use gametree::mcts::MctsConfig;
use gametree::minimax::MinimaxConfig;

// =============================================================================
// Strength Tests
// =============================================================================

#[test]
fn test_minimax_never_loses_to_random() {
    for seed in 0..20 {
        let mut hard = MinimaxAgent::new(MinimaxConfig::unbounded());
        let mut easy = RandomAgent::new(seed);

        let as_x = play_match(TicTacToe::new(), &mut hard, &mut easy).unwrap();
        assert_ne!(as_x.winner, Some(PlayerId::SECOND), "lost as X with seed {}", seed);

        let as_o = play_match(TicTacToe::new(), &mut easy, &mut hard).unwrap();
        assert_ne!(as_o.winner, Some(PlayerId::FIRST), "lost as O with seed {}", seed);
    }
}

#[test]
fn test_minimax_self_play_draws() {
    let mut x = MinimaxAgent::new(MinimaxConfig::unbounded());
    let mut o = MinimaxAgent::new(MinimaxConfig::unbounded());

    let record = play_match(TicTacToe::new(), &mut x, &mut o).unwrap();

    assert_eq!(record.winner, None);
    assert_eq!(record.plies, 9);
}

#[test]
fn test_mcts_rarely_loses_to_random() {
    let mut losses = 0;
    for seed in 0..10 {
        let mut mcts = MctsAgent::new(MctsConfig::default().with_seed(seed).with_iterations(1000));
        let mut random = RandomAgent::new(seed + 100);

        let record = play_match(TicTacToe::new(), &mut mcts, &mut random).unwrap();
        if record.winner == Some(PlayerId::SECOND) {
            losses += 1;
        }
    }

    assert!(losses <= 2, "MCTS lost {} of 10 games to random play", losses);
}

#[test]
fn test_depth_bounded_minimax_on_connect4() {
    let mut minimax = MinimaxAgent::new(MinimaxConfig::default().with_depth_max(3));
    let mut random = RandomAgent::new(5);

    let record = play_match(Connect4::new(), &mut minimax, &mut random).unwrap();

    assert!(record.plies <= 42);
    let final_state = record.replay(Connect4::new()).unwrap();
    assert!(final_state.is_terminal());
}

// =============================================================================
// Record Tests
// =============================================================================

#[test]
fn test_record_bytes_round_trip() {
    let mut x = MctsAgent::new(MctsConfig::default().with_iterations(200));
    let mut o = RandomAgent::new(9);

    let record = play_match(Connect4::new(), &mut x, &mut o).unwrap();
    let bytes = record.to_bytes().unwrap();
    let decoded = MatchRecord::<usize>::from_bytes(&bytes).unwrap();

    assert_eq!(decoded, record);
    assert_eq!(decoded.agents, ["mcts".to_string(), "random".to_string()]);
    assert!(decoded.replay(Connect4::new()).is_ok());
}

#[test]
fn test_record_json_round_trip() {
    let mut x = RandomAgent::new(1);
    let mut o = RandomAgent::new(2);

    let record = play_match(TicTacToe::new(), &mut x, &mut o).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    let decoded: MatchRecord<(usize, usize)> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, record);
}

#[test]
fn test_mixed_agents_as_trait_objects() {
    let mut agents: Vec<Box<dyn Agent<TicTacToe>>> = vec![
        Box::new(RandomAgent::new(3)),
        Box::new(MinimaxAgent::new(MinimaxConfig::unbounded())),
        Box::new(MctsAgent::new(MctsConfig::default().with_iterations(300))),
    ];
    let names: Vec<String> = agents.iter().map(|a| a.name().to_string()).collect();
    assert_eq!(names, ["random", "minimax", "mcts"]);

    let (first, rest) = agents.split_at_mut(1);
    let record = play_match(TicTacToe::new(), first[0].as_mut(), rest[0].as_mut()).unwrap();

    assert_ne!(record.winner, Some(PlayerId::FIRST), "random beat minimax");
}
