//! Game integration tests.

use bjcharlie::{
    ActionError, Card, DealError, Game, GameOptions, GameState, ParticipantStatus, RoundOutcome,
    ShowdownError, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn game_with_draws(draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    game.shoe_mut().stack(draws.iter().copied());
    game
}

#[test]
fn new_game_is_idle() {
    let game = Game::with_decks(2, 1);

    assert_eq!(game.state(), GameState::Idle);
    assert!(!game.round_active());
    assert!(!game.game_is_initialised());
    assert_eq!(game.current_bet(), 10);
    assert_eq!(game.num_cards_left(), 84);
    assert!(game.round_result().is_none());
}

#[test]
fn start_new_round_deals_two_each_in_order() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 8),   // player
        card(Suit::Club, 7),    // player
        card(Suit::Diamond, 6), // dealer up
        card(Suit::Spade, 10),  // dealer hole
        card(Suit::Heart, 2),
    ]);

    game.start_new_round().unwrap();

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(game.round_active());
    assert!(game.game_is_initialised());
    assert_eq!(game.num_cards_left(), 1);

    let player = game.player();
    assert_eq!(
        player.hand().cards(),
        [card(Suit::Heart, 8), card(Suit::Club, 7)]
    );
    assert_eq!(player.hand().total_value(), 15);
    assert_eq!(player.status(), ParticipantStatus::Ready);

    let dealer = game.dealer();
    assert_eq!(dealer.hand().cards()[0], card(Suit::Diamond, 6));
    assert_eq!(
        dealer.hand().cards()[1],
        card(Suit::Spade, 10).turned_face_down()
    );
    assert!(!dealer.show_hand());
    assert_eq!(dealer.visible_value(), 6);
    assert_eq!(dealer.hand().total_value(), 16);
}

#[test]
fn opening_deal_spans_a_reshuffle() {
    let mut game = game_with_draws(&[card(Suit::Heart, 4), card(Suit::Club, 5)]);

    game.start_new_round().unwrap();

    assert_eq!(
        game.player().hand().cards(),
        [card(Suit::Heart, 4), card(Suit::Club, 5)]
    );
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.num_cards_left(), 30);
}

#[test]
fn hit_adds_a_card_and_keeps_the_turn() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 2),
        card(Suit::Club, 3),
        card(Suit::Diamond, 10),
        card(Suit::Spade, 9),
        card(Suit::Heart, 5), // hit
    ]);
    game.start_new_round().unwrap();

    let hit = game.give_player_a_card().unwrap();
    assert_eq!(hit, card(Suit::Heart, 5));
    assert_eq!(game.player().hand().total_value(), 10);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(game.round_active());
}

#[test]
fn bust_settles_without_dealer_draw() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 10),
        card(Suit::Club, 8),
        card(Suit::Diamond, 5),
        card(Suit::Spade, 6),
        card(Suit::Heart, 13), // hit, bust
        card(Suit::Club, 10),
    ]);
    game.start_new_round().unwrap();

    game.give_player_a_card().unwrap();

    assert_eq!(game.player().status(), ParticipantStatus::Bust);
    assert_eq!(game.state(), GameState::Settled);
    assert!(!game.round_active());
    assert!(!game.player_is_winner());
    assert_eq!(game.player().score(), -10);
    assert_eq!(game.dealer().hand().len(), 2);
    assert!(!game.dealer().show_hand());
    assert_eq!(game.num_cards_left(), 1);

    let result = game.round_result().unwrap();
    assert_eq!(result.outcome, RoundOutcome::PlayerBust);
    assert_eq!(result.net, -10);
    assert!(result.dealer_drawn.is_empty());
}

#[test]
fn dealer_bust_pays_the_player() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 10),
        card(Suit::Club, 8),    // player 18
        card(Suit::Diamond, 10),
        card(Suit::Spade, 6),   // dealer 16
        card(Suit::Heart, 12),  // dealer draws to 26
    ]);
    game.start_new_round().unwrap();

    game.set_player_sticks().unwrap();

    assert_eq!(game.state(), GameState::Settled);
    assert!(game.player_is_winner());
    assert_eq!(game.player().score(), 10);
    assert_eq!(game.player().status(), ParticipantStatus::Stick);

    let dealer = game.dealer();
    assert_eq!(dealer.status(), ParticipantStatus::Bust);
    assert!(dealer.show_hand());
    assert_eq!(dealer.hand().total_value(), 26);
    assert_eq!(dealer.hand().len(), 3);
    assert!(dealer.hand().cards().iter().all(|c| c.face_up));

    let result = game.round_result().unwrap();
    assert_eq!(result.outcome, RoundOutcome::DealerBust);
    assert_eq!(result.player_value, 18);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.dealer_drawn, vec![card(Suit::Heart, 12)]);
}

#[test]
fn dealer_must_beat_the_player_total() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 10),
        card(Suit::Club, 8),    // player 18
        card(Suit::Diamond, 10),
        card(Suit::Spade, 8),   // dealer 18, a tie is not enough
        card(Suit::Heart, 1),   // dealer 19
        card(Suit::Club, 10),
    ]);
    game.start_new_round().unwrap();

    game.set_player_sticks().unwrap();

    assert!(!game.player_is_winner());
    assert_eq!(game.player().score(), -10);
    assert_eq!(game.dealer().status(), ParticipantStatus::Stick);
    assert_eq!(game.dealer().hand().total_value(), 19);
    assert_eq!(
        game.round_result().unwrap().outcome,
        RoundOutcome::DealerWins
    );
    assert_eq!(game.num_cards_left(), 1);
}

#[test]
fn dealer_stops_below_seventeen_once_ahead() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 4),
        card(Suit::Club, 5),    // player 9
        card(Suit::Diamond, 7),
        card(Suit::Spade, 6),   // dealer 13
        card(Suit::Heart, 10),
    ]);
    game.start_new_round().unwrap();

    game.set_player_sticks().unwrap();

    assert_eq!(game.dealer().hand().total_value(), 13);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.dealer().status(), ParticipantStatus::Stick);
    assert!(game.dealer().show_hand());
    assert!(!game.player_is_winner());
    assert_eq!(game.num_cards_left(), 1);
}

#[test]
fn five_card_charlie_wins_without_dealer_draw() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 2),
        card(Suit::Club, 2),
        card(Suit::Diamond, 10),
        card(Suit::Spade, 9),
        card(Suit::Heart, 3),
        card(Suit::Club, 3),
        card(Suit::Diamond, 4), // fifth card, total 14
        card(Suit::Spade, 2),
    ]);
    game.start_new_round().unwrap();

    for _ in 0..3 {
        game.give_player_a_card().unwrap();
    }
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(game.player().has_five_card_charlie());

    game.set_player_sticks().unwrap();

    assert!(game.player_is_winner());
    assert_eq!(game.player().score(), 10);
    assert_eq!(game.dealer().hand().len(), 2);
    assert!(!game.dealer().show_hand());
    assert_eq!(game.num_cards_left(), 1);
    assert_eq!(
        game.round_result().unwrap().outcome,
        RoundOutcome::FiveCardCharlie
    );
}

#[test]
fn bust_on_the_fifth_card_is_still_a_loss() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 2),
        card(Suit::Club, 3),
        card(Suit::Diamond, 10),
        card(Suit::Spade, 9),
        card(Suit::Heart, 4),
        card(Suit::Club, 5),
        card(Suit::Diamond, 13), // fifth card, total 24
    ]);
    game.start_new_round().unwrap();

    for _ in 0..3 {
        game.give_player_a_card().unwrap();
    }

    assert_eq!(game.player().hand().len(), 5);
    assert_eq!(game.player().status(), ParticipantStatus::Bust);
    assert_eq!(game.state(), GameState::Settled);
    assert!(!game.player_is_winner());
    assert_eq!(game.player().score(), -10);
    assert_eq!(
        game.round_result().unwrap().outcome,
        RoundOutcome::PlayerBust
    );
}

#[test]
fn current_bet_sets_the_stake() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 10),
        card(Suit::Club, 10),
        card(Suit::Diamond, 10),
        card(Suit::Spade, 7),
        card(Suit::Heart, 5), // dealer busts
    ]);
    game.set_current_bet(100);
    assert_eq!(game.current_bet(), 100);

    game.start_new_round().unwrap();
    game.set_player_sticks().unwrap();

    assert_eq!(game.player().score(), 100);
    assert_eq!(game.round_result().unwrap().stake, 100);
}

#[test]
fn bet_changed_mid_round_applies_at_settlement() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 10),
        card(Suit::Club, 9),
        card(Suit::Diamond, 10),
        card(Suit::Spade, 10),
    ]);
    game.start_new_round().unwrap();
    game.set_current_bet(25);
    game.set_player_sticks().unwrap();

    assert_eq!(game.player().score(), -25);
}

#[test]
fn new_round_keeps_scores_and_resets_hands() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 10),
        card(Suit::Club, 8),
        card(Suit::Diamond, 10),
        card(Suit::Spade, 6),
        card(Suit::Heart, 12), // dealer busts
        card(Suit::Club, 2),
        card(Suit::Diamond, 3),
        card(Suit::Spade, 4),
        card(Suit::Heart, 5),
    ]);
    game.start_new_round().unwrap();
    game.set_player_sticks().unwrap();
    assert_eq!(game.player().score(), 10);
    assert!(game.player_is_winner());

    game.start_new_round().unwrap();

    assert_eq!(game.player().score(), 10);
    assert_eq!(game.dealer().score(), 0);
    assert_eq!(game.player().status(), ParticipantStatus::Ready);
    assert_eq!(game.dealer().status(), ParticipantStatus::Ready);
    assert_eq!(game.player().hand().total_value(), 5);
    assert_eq!(game.dealer().hand().total_value(), 9);
    assert!(!game.dealer().show_hand());
    assert!(!game.player_is_winner());
    assert!(game.round_result().is_none());
}

#[test]
fn commands_out_of_turn_are_rejected() {
    let mut game = Game::with_decks(1, 3);
    let left = game.num_cards_left();

    assert_eq!(
        game.give_player_a_card().unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        game.set_player_sticks().unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(game.end_round().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.num_cards_left(), left);
    assert_eq!(game.state(), GameState::Idle);

    game.start_new_round().unwrap();
    assert_eq!(
        game.start_new_round().unwrap_err(),
        DealError::RoundInProgress
    );
    assert_eq!(game.reshuffle().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.num_cards_left(), left - 4);

    game.set_player_sticks().unwrap();
    let score = game.player().score();
    let dealer_cards = game.dealer().hand().len();

    assert_eq!(
        game.give_player_a_card().unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(game.end_round().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.player().score(), score);
    assert_eq!(game.dealer().hand().len(), dealer_cards);
}

#[test]
fn end_round_during_player_turn_settles_as_stand() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 10),
        card(Suit::Club, 10),   // player 20
        card(Suit::Diamond, 10),
        card(Suit::Spade, 5),   // dealer 15
        card(Suit::Heart, 6),   // dealer 21
    ]);
    game.start_new_round().unwrap();

    let result = game.end_round().unwrap();

    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(game.player().status(), ParticipantStatus::Ready);
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.player().score(), -10);
}

#[test]
fn snapshot_mirrors_the_game() {
    let mut game = Game::new(
        GameOptions::default()
            .with_decks(2)
            .with_default_bet(15)
            .with_starting_score(50),
        9,
    );
    game.start_new_round().unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.player, *game.player());
    assert_eq!(snapshot.dealer, *game.dealer());
    assert_eq!(snapshot.num_cards_left, 80);
    assert!(snapshot.round_active);
    assert!(snapshot.game_is_initialised);
    assert_eq!(snapshot.current_bet, 15);
    assert!(!snapshot.player_is_winner);
    assert_eq!(snapshot.state, GameState::PlayerTurn);
    assert_eq!(snapshot.player.score(), 50);
}

#[test]
fn reset_starts_the_session_over() {
    let mut game = game_with_draws(&[
        card(Suit::Heart, 10),
        card(Suit::Club, 8),
        card(Suit::Diamond, 10),
        card(Suit::Spade, 9),
    ]);
    game.set_current_bet(30);
    game.start_new_round().unwrap();
    game.set_player_sticks().unwrap();
    assert_eq!(game.player().score(), -30);

    game.reset();

    assert_eq!(game.state(), GameState::Idle);
    assert!(!game.game_is_initialised());
    assert_eq!(game.player().score(), 0);
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    assert_eq!(game.num_cards_left(), 42);
    assert_eq!(game.shoe().cards_dealt(), 0);
    assert_eq!(game.current_bet(), 30);
}

#[test]
fn reshuffle_between_rounds_refills_the_shoe() {
    let mut game = Game::with_decks(1, 4);
    game.start_new_round().unwrap();
    assert!(game.num_cards_left() <= game.shoe().original_len());
    game.set_player_sticks().unwrap();
    assert!(game.num_cards_left() < 42);

    game.reshuffle().unwrap();
    assert_eq!(game.num_cards_left(), 32);
    assert!(game.num_cards_left() <= game.shoe().original_len());
}

#[test]
fn many_rounds_keep_the_score_consistent() {
    let mut game = Game::with_decks(1, 2024);
    let mut expected = 0;

    for round in 0..200 {
        game.start_new_round().unwrap();
        if round % 3 == 0 {
            while game.round_active() {
                game.give_player_a_card().unwrap();
            }
        } else {
            game.set_player_sticks().unwrap();
        }

        let result = game.round_result().unwrap();
        assert_eq!(result.outcome.player_wins(), game.player_is_winner());
        assert_eq!(result.net.abs(), 10);
        expected += result.net;
        assert_eq!(game.player().score(), expected);
        assert!(game.num_cards_left() <= 42);
    }
}
