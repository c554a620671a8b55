//! Session lifecycle tests driven by a scripted front-end.

use std::collections::VecDeque;
use strictly_ntoe::{
    Board, BoardDisplay, GameError, GameOutcome, GameSession, Move, MoveInput, Pair, Player,
    Position, Score, SessionSettings, SessionState, StartingPlayer, Token, parse_replay_answer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Awaiting(Player),
    Applied(Position, Token),
    Invalid(GameError),
    Won(Player, Score),
    Drawn,
    Reset,
    Terminated,
    BadReplay(GameError),
}

/// Feeds canned coordinates and replay answers; closes once exhausted.
#[derive(Default)]
struct Script {
    moves: VecDeque<Position>,
    replies: VecDeque<&'static str>,
}

impl Script {
    fn new(moves: &[(usize, usize)], replies: &[&'static str]) -> Self {
        Self {
            moves: moves.iter().map(|&(r, c)| Position::new(r, c)).collect(),
            replies: replies.iter().copied().collect(),
        }
    }
}

impl MoveInput for Script {
    fn request_move(&mut self, _board: &Board, _player: Player) -> Result<Position, GameError> {
        self.moves.pop_front().ok_or(GameError::InputClosed)
    }

    fn request_replay_confirmation(&mut self) -> Result<bool, GameError> {
        let reply = self.replies.pop_front().ok_or(GameError::InputClosed)?;
        parse_replay_answer(reply)
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl BoardDisplay for Recorder {
    fn on_move_applied(&mut self, position: Position, token: Token) {
        self.events.push(Event::Applied(position, token));
    }

    fn on_invalid_move(&mut self, reason: &GameError) {
        self.events.push(Event::Invalid(reason.clone()));
    }

    fn on_game_won(&mut self, winner: Player, score: &Score) {
        self.events.push(Event::Won(winner, *score));
    }

    fn on_game_drawn(&mut self) {
        self.events.push(Event::Drawn);
    }

    fn on_session_reset(&mut self) {
        self.events.push(Event::Reset);
    }

    fn on_terminated(&mut self) {
        self.events.push(Event::Terminated);
    }

    fn on_awaiting_move(&mut self, player: Player, _name: &str) {
        self.events.push(Event::Awaiting(player));
    }

    fn on_invalid_replay_input(&mut self, reason: &GameError) {
        self.events.push(Event::BadReplay(reason.clone()));
    }
}

type Frontend = Pair<Script, Recorder>;

fn frontend(moves: &[(usize, usize)], replies: &[&'static str]) -> Frontend {
    Pair::new(Script::new(moves, replies), Recorder::default())
}

fn session(settings: SessionSettings) -> GameSession {
    GameSession::new(settings).expect("valid settings")
}

// X X X / . O . / . . O
const TOP_ROW_WIN: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)];

// X O X / O X X / O X O
const DRAW: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (2, 2),
    (1, 2),
    (2, 0),
    (2, 1),
];

// X O X / O X O / O X X, the last move fills the board and the diagonal
const NINTH_MOVE_WINS: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

// X X . / O O O / . . X
const MIDDLE_ROW_FOR_O: [(usize, usize); 6] = [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)];

#[test]
fn test_top_row_win_step_by_step() {
    let mut game = session(SessionSettings::default());
    let mut fe = frontend(&TOP_ROW_WIN, &["n"]);

    // Four moves never reach evaluation.
    for _ in 0..4 {
        assert!(matches!(game.step(&mut fe).unwrap(), SessionState::MoveApplied(_)));
        assert_eq!(game.step(&mut fe).unwrap(), SessionState::AwaitingMove);
    }

    let applied = game.step(&mut fe).unwrap();
    assert_eq!(
        applied,
        SessionState::MoveApplied(Move::new(Player::One, Position::new(0, 2)))
    );
    assert_eq!(game.turn().moves_made(), 5);

    assert_eq!(game.step(&mut fe).unwrap(), SessionState::GameWon(Player::One));
    assert_eq!(game.score().wins(Player::One), 0);

    assert_eq!(game.step(&mut fe).unwrap(), SessionState::ReplayPrompt);
    assert_eq!(game.score().wins(Player::One), 1);
    assert_eq!(game.score().wins(Player::Two), 0);
    assert_eq!(game.outcome(), GameOutcome::Win(Player::One));

    assert_eq!(game.step(&mut fe).unwrap(), SessionState::Terminated);
    assert_eq!(fe.display.events.last(), Some(&Event::Terminated));
}

#[test]
fn test_top_row_win_notifications() {
    let mut game = session(SessionSettings::default());
    let mut fe = frontend(&TOP_ROW_WIN, &["n"]);

    let score = game.run(&mut fe).unwrap();
    assert_eq!(score.wins(Player::One), 1);

    let mut expected_score = Score::new();
    expected_score.record_win(Player::One);

    let tokens = [Token::X, Token::O, Token::X, Token::O, Token::X];
    let mut expected = Vec::new();
    for ((row, col), token) in TOP_ROW_WIN.iter().zip(tokens) {
        expected.push(Event::Awaiting(Player::from_token(token)));
        expected.push(Event::Applied(Position::new(*row, *col), token));
    }
    expected.push(Event::Won(Player::One, expected_score));
    expected.push(Event::Terminated);
    assert_eq!(fe.display.events, expected);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut game = session(SessionSettings::default());
    let mut fe = frontend(&DRAW, &["no"]);

    let score = game.run(&mut fe).unwrap();
    assert_eq!(score, Score::new());
    assert_eq!(game.turn().moves_made(), 9);
    assert!(game.board().is_full());
    assert_eq!(game.outcome(), GameOutcome::Draw);
    assert_eq!(game.games_played(), 1);

    let drawn = fe.display.events.iter().filter(|e| **e == Event::Drawn).count();
    assert_eq!(drawn, 1);
    assert!(!fe.display.events.iter().any(|e| matches!(e, Event::Won(..))));
}

#[test]
fn test_win_on_the_filling_move_is_not_a_draw() {
    let mut game = session(SessionSettings::default());
    let mut fe = frontend(&NINTH_MOVE_WINS, &["n"]);

    for _ in 0..17 {
        game.step(&mut fe).unwrap();
    }
    assert_eq!(game.turn().moves_made(), 9);
    assert!(game.board().is_full());
    assert_eq!(game.step(&mut fe).unwrap(), SessionState::GameWon(Player::One));

    let score = game.run(&mut fe).unwrap();
    assert_eq!(score.wins(Player::One), 1);
    assert_eq!(score.total(), 1);
    assert_eq!(game.outcome(), GameOutcome::Win(Player::One));
    assert!(!fe.display.events.contains(&Event::Drawn));
}

#[test]
fn test_invalid_moves_reprompt_same_player() {
    let mut game = session(SessionSettings::default());
    // X centre, O tries centre again, then off the board, then a corner.
    let mut fe = frontend(&[(1, 1), (1, 1), (5, 0), (0, 0)], &[]);

    let err = game.run(&mut fe).unwrap_err();
    assert_eq!(err, GameError::InputClosed);

    let events = &fe.display.events;
    assert!(events.contains(&Event::Invalid(GameError::CellOccupied(Position::new(1, 1)))));
    assert!(events.contains(&Event::Invalid(GameError::OutOfBounds {
        position: Position::new(5, 0),
        size: 3,
    })));
    assert!(events.contains(&Event::Applied(Position::new(0, 0), Token::O)));

    let awaiting_two = events
        .iter()
        .filter(|e| **e == Event::Awaiting(Player::Two))
        .count();
    assert_eq!(awaiting_two, 3);
    assert_eq!(game.turn().moves_made(), 2);
    assert_eq!(game.board().filled(), 2);
    assert_eq!(game.state(), SessionState::AwaitingMove);
}

#[test]
fn test_score_survives_replay() {
    let mut game = session(SessionSettings::default());
    let moves: Vec<_> = TOP_ROW_WIN.iter().chain(&MIDDLE_ROW_FOR_O).copied().collect();
    let mut fe = frontend(&moves, &["maybe", "y", "n"]);

    let score = game.run(&mut fe).unwrap();
    assert_eq!(score.wins(Player::One), 1);
    assert_eq!(score.wins(Player::Two), 1);
    assert_eq!(game.games_played(), 2);

    let events = &fe.display.events;
    assert!(events.contains(&Event::BadReplay(GameError::InvalidReplayInput(
        "maybe".to_string()
    ))));
    assert_eq!(events.iter().filter(|e| **e == Event::Reset).count(), 1);

    let wins: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            Event::Won(p, s) => Some((*p, s.total())),
            _ => None,
        })
        .collect();
    assert_eq!(wins, vec![(Player::One, 1), (Player::Two, 2)]);
}

#[test]
fn test_replay_resets_board_and_turns() {
    let mut game = session(SessionSettings::default());
    let mut fe = frontend(&TOP_ROW_WIN, &["y"]);

    // Ends when the script runs out of moves in the second session.
    assert_eq!(game.run(&mut fe), Err(GameError::InputClosed));
    assert_eq!(game.state(), SessionState::AwaitingMove);
    assert_eq!(game.turn().moves_made(), 0);
    assert_eq!(game.turn().current_player(), Player::One);
    assert_eq!(game.board().filled(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.score().wins(Player::One), 1);
}

#[test]
fn test_rotate_gives_next_session_to_the_other_player() {
    let settings = SessionSettings {
        starting_player: StartingPlayer::Rotate,
        ..SessionSettings::default()
    };
    let mut game = session(settings);
    let mut fe = frontend(&TOP_ROW_WIN, &["y"]);

    let _ = game.run(&mut fe);
    assert_eq!(game.turn().current_player(), Player::Two);
}

#[test]
fn test_larger_board_needs_full_line() {
    let mut game = session(SessionSettings::with_size(4));
    // X fills row 0 in four moves; O plays row 3.
    let moves = [(0, 0), (3, 0), (0, 1), (3, 1), (0, 2), (3, 2), (0, 3)];
    let mut fe = frontend(&moves, &["n"]);

    game.run(&mut fe).unwrap();
    assert_eq!(game.turn().moves_made(), 7);
    assert_eq!(game.score().wins(Player::One), 1);
}

#[test]
fn test_out_of_turn_move_is_rejected() {
    let mut game = session(SessionSettings::default());
    let mut display = Recorder::default();

    let err = game
        .submit_move(Move::new(Player::Two, Position::new(0, 0)), &mut display)
        .unwrap_err();
    assert_eq!(err, GameError::NotYourTurn(Player::Two));
    assert_eq!(game.board().filled(), 0);
    assert!(display.events.is_empty());

    game.submit_move(Move::new(Player::One, Position::new(0, 0)), &mut display)
        .unwrap();
    let err = game
        .submit_move(Move::new(Player::Two, Position::new(1, 1)), &mut display)
        .unwrap_err();
    assert!(matches!(err, GameError::WrongState { .. }));

    assert_eq!(game.settle(&mut display), SessionState::AwaitingMove);
    game.submit_move(Move::new(Player::Two, Position::new(1, 1)), &mut display)
        .unwrap();
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_event_driven_session() {
    let mut game = session(SessionSettings::default());
    let mut display = Recorder::default();

    for (i, (row, col)) in TOP_ROW_WIN.into_iter().enumerate() {
        let player = if i % 2 == 0 { Player::One } else { Player::Two };
        game.submit_move(Move::new(player, Position::new(row, col)), &mut display)
            .unwrap();
        game.settle(&mut display);
    }
    assert_eq!(game.state(), SessionState::ReplayPrompt);

    let err = game
        .submit_move(Move::new(Player::Two, Position::new(2, 0)), &mut display)
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::WrongState {
            state: SessionState::ReplayPrompt,
            ..
        }
    ));

    game.answer_replay(false, &mut display).unwrap();
    assert!(game.state().is_terminated());
    assert!(game.answer_replay(true, &mut display).is_err());
}

#[test]
fn test_degenerate_board_rejected() {
    let err = GameSession::new(SessionSettings::with_size(1)).unwrap_err();
    assert_eq!(err, GameError::InvalidBoardSize(1));
}
