//! End-to-end behaviour of the progress store through its public API

mod common;

use arcade_progress::catalog::AchievementId;
use arcade_progress::persistence::{DEFAULT_SLOT_KEY, MemorySlotStore, SlotStore};
use arcade_progress::{GameId, GameResult, SkinTarget, WinOptions};
use common::TestArcade;

#[test]
fn test_ten_plays_milestone() {
    let mut arcade = TestArcade::new();

    for _ in 0..9 {
        arcade.store.record_play(GameId::Wordle);
    }
    let snap = arcade.store.snapshot();
    assert!(!snap.is_unlocked(AchievementId::TenGames));
    assert_eq!(snap.currency, 10);
    let before_toasts = arcade.store.notifications().len();

    let unlocked = arcade.store.record_play(GameId::Wordle);
    assert_eq!(unlocked, vec![AchievementId::TenGames]);

    let snap = arcade.store.snapshot();
    assert!(snap.is_unlocked(AchievementId::TenGames));
    assert_eq!(snap.currency, 10 + 25);
    assert_eq!(arcade.store.notifications().len(), before_toasts + 1);

    // Later plays don't re-fire
    arcade.store.record_play(GameId::Wordle);
    assert_eq!(arcade.store.snapshot().currency, 35);
}

#[test]
fn test_milestones_are_edge_triggered_across_restart() {
    let mut arcade = TestArcade::new();
    for _ in 0..10 {
        arcade.store.record_play(GameId::Snake);
    }
    let mut arcade = arcade.restart();
    assert_eq!(arcade.store.snapshot().global_stats.total_plays, 10);
    assert!(arcade.store.record_play(GameId::Snake).is_empty());
    assert!(arcade.store.notifications().is_empty());
}

#[test]
fn test_unlock_is_idempotent() {
    let mut arcade = TestArcade::new();
    assert!(arcade.store.unlock_achievement("trivia_perfect"));
    let once = arcade.store.snapshot();

    assert!(!arcade.store.unlock_achievement("trivia_perfect"));
    assert_eq!(*arcade.store.snapshot(), *once);
    assert_eq!(once.currency, 40);
    assert_eq!(arcade.store.notifications().len(), 1);
    assert_eq!(arcade.store.notifications()[0].label, "Know-It-All");
}

#[test]
fn test_cascade_is_part_of_the_same_snapshot() {
    let mut arcade = TestArcade::new();
    let mut rx = arcade.store.subscribe();

    arcade.store.unlock_achievement("2048_1024");

    let published = rx.borrow_and_update().clone();
    assert!(published.is_unlocked(AchievementId::Tile1024));
    assert!(published.has_skin("game2048_sunset"));
}

#[test]
fn test_currency_floor() {
    let mut arcade = TestArcade::new();
    arcade.store.add_currency(5);
    assert_eq!(arcade.store.add_currency(-100), 0);
    assert_eq!(arcade.store.snapshot().currency, 0);
}

#[test]
fn test_favorite_game_tie_rule() {
    let mut arcade = TestArcade::new();
    for _ in 0..3 {
        arcade.store.record_play(GameId::Sudoku);
    }
    for _ in 0..3 {
        arcade.store.record_play(GameId::Memory);
    }
    assert_eq!(arcade.store.snapshot().global_stats.favorite_game, GameId::Sudoku);

    arcade.store.record_play(GameId::Trivia);
    assert_eq!(arcade.store.snapshot().global_stats.favorite_game, GameId::Sudoku);

    arcade.store.record_play(GameId::Memory);
    assert_eq!(arcade.store.snapshot().global_stats.favorite_game, GameId::Memory);
}

#[test]
fn test_record_result_win_flow() {
    let mut arcade = TestArcade::new();
    let unlocked = arcade.store.record_result(
        GameResult::win(GameId::Minesweeper)
            .with_score(120.0)
            .with_duration_ms(83_400),
    );
    assert_eq!(
        unlocked,
        vec![AchievementId::FirstPlay, AchievementId::MinesweeperFirstWin]
    );

    let snap = arcade.store.snapshot();
    let stats = snap.game(GameId::Minesweeper);
    assert_eq!(stats.plays, 1);
    assert_eq!(stats.wins, Some(1));
    assert_eq!(stats.best_score, Some(120.0));
    assert_eq!(stats.best_time, Some(83.0));
    assert_eq!(snap.currency, 10 + 25);

    let labels: Vec<_> = arcade.store.notifications().iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["First Token Drop", "Bomb Squad"]);
}

#[test]
fn test_losses_leave_wins_absent() {
    let mut arcade = TestArcade::new();
    arcade.store.record_result(GameResult::loss(GameId::Connect4).with_score(3.0));
    let snap = arcade.store.snapshot();
    let stats = snap.game(GameId::Connect4);
    assert_eq!(stats.plays, 1);
    assert_eq!(stats.wins, None);
    assert_eq!(stats.best_score, None);
}

#[test]
fn test_toasts_expire_without_caller_action() {
    let mut arcade = TestArcade::new();
    arcade.store.record_play(GameId::TicTacToe);
    arcade.clock.advance_ms(1_000);
    arcade.store.unlock_achievement("madlibs_first_story");
    assert_eq!(arcade.store.notifications().len(), 2);

    arcade.clock.advance_ms(3_000);
    let remaining: Vec<_> = arcade.store.notifications().iter().map(|t| t.achievement).collect();
    assert_eq!(remaining, vec![AchievementId::MadLibsFirstStory]);

    arcade.clock.advance_ms(1_000);
    assert!(arcade.store.notifications().is_empty());
}

#[test]
fn test_longest_session_survives_restart() {
    let mut arcade = TestArcade::new();
    arcade.clock.advance_minutes(42);
    arcade.store.record_win(GameId::Sliding, WinOptions::time(30.0));
    assert_eq!(arcade.store.snapshot().global_stats.longest_session_minutes, 42);

    let mut arcade = arcade.restart();
    arcade.clock.advance_minutes(3);
    arcade.store.record_play(GameId::Sliding);
    assert_eq!(arcade.store.snapshot().global_stats.longest_session_minutes, 42);
}

#[test]
fn test_every_mutation_is_saved() {
    let mut arcade = TestArcade::new();
    arcade.store.record_play(GameId::FlappyBird);
    arcade.store.set_equipped_skin(SkinTarget::Global, Some("wordle_neon"));

    let raw = arcade.slots.read(DEFAULT_SLOT_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["perGameStats"]["flappybird"]["plays"], 1);
    assert_eq!(value["equippedSkins"]["global"], "wordle_neon");

    let arcade = arcade.restart();
    assert_eq!(*arcade.store.snapshot(), {
        let mut expected = arcade_progress::ProgressState::default();
        expected.global_stats.total_plays = 1;
        expected.global_stats.favorite_game = GameId::FlappyBird;
        expected
            .per_game_stats
            .get_mut(&GameId::FlappyBird)
            .unwrap()
            .plays = 1;
        expected.currency = 10;
        expected.unlocked_achievements.insert("first_play".to_string());
        expected
            .equipped_skins
            .insert(SkinTarget::Global, Some("wordle_neon".to_string()));
        expected
    });
}

#[test]
fn test_corrupt_save_resets_to_zero_state() {
    let slots = arcade_progress::persistence::MemorySlotStore::new();
    slots.write(DEFAULT_SLOT_KEY, "{\"globalStats\": ").unwrap();

    let arcade = TestArcade::with_slots(slots);
    let snap = arcade.store.snapshot();
    assert_eq!(*snap, arcade_progress::ProgressState::default());
    assert_eq!(snap.per_game_stats.len(), GameId::all().len());
}

#[test]
fn test_profile_read_model() {
    let mut arcade = TestArcade::new();
    arcade.store.record_result(GameResult::win(GameId::Wordle).with_score(4.0));

    let profile = arcade.store.profile();
    assert_eq!(profile.total_plays, 1);
    assert_eq!(profile.favorite_game_label, "Wordle Clone");
    assert_eq!(profile.unlocked_achievement_count(), 2);
    assert_eq!(profile.reward_earned(), 10 + 20);
    assert_eq!(profile.currency, profile.reward_earned());
    assert!(profile.skins.iter().any(|s| s.id == "wordle_neon" && s.unlocked));
}

#[test]
fn test_saturated_counters_from_save_do_not_panic() {
    let slots = MemorySlotStore::new();
    slots
        .write(
            DEFAULT_SLOT_KEY,
            r#"{"globalStats":{"totalPlays":18446744073709551615},"perGameStats":{"wordle":{"plays":18446744073709551615,"wins":18446744073709551615}}}"#,
        )
        .unwrap();
    let mut arcade = TestArcade::with_slots(slots);

    arcade.store.record_play(GameId::Wordle);
    arcade.store.record_win(GameId::Wordle, WinOptions::default());

    let snap = arcade.store.snapshot();
    assert_eq!(snap.global_stats.total_plays, u64::MAX);
    assert_eq!(snap.game(GameId::Wordle).plays, u64::MAX);
    assert_eq!(snap.game(GameId::Wordle).wins, Some(u64::MAX));
}

#[test]
fn test_game_id_from_string_boundary() {
    assert_eq!("minesweeper".parse::<GameId>().unwrap(), GameId::Minesweeper);
    let err = "solitaire".parse::<GameId>().unwrap_err();
    assert_eq!(err.to_string(), "unknown game id: solitaire");
}
