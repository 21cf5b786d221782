#[cfg(test)]
mod test {
    use crate::console_interface::render_board_to_string;
    use crate::core::Direction::{self, *};
    use crate::core::MoveEvent;
    use crate::error::GameError;
    use crate::session::{AttemptState, MemoryScoreStore, Session};

    // "Level X" from the shipped table: corgi, treat and goal in a row,
    // with a block and a poop tile right below them.
    const DEV_LEVEL: usize = 10;

    fn session() -> Session {
        Session::new(Box::new(MemoryScoreStore::new())).expect("first level should load")
    }

    fn win_dev_level(session: &mut Session, directions: &[Direction]) {
        session.load_level(DEV_LEVEL).unwrap();
        let (last, rest) = directions.split_last().unwrap();
        for &dir in rest {
            assert_ne!(session.move_player(dir), Some(MoveEvent::Won));
        }
        assert_eq!(session.move_player(*last), Some(MoveEvent::Won));
    }

    #[test]
    fn out_of_range_level_is_rejected_and_state_preserved() {
        let mut session = session();
        session.move_player(Down);
        let board_before = render_board_to_string(session.board());

        let result = session.load_level(99);

        assert_eq!(result, Err(GameError::InvalidLevelIndex(99)));
        assert_eq!(session.level_index(), 0);
        assert_eq!(session.move_count(), 1);
        assert_eq!(render_board_to_string(session.board()), board_before);
    }

    #[test]
    fn blocked_move_counts_for_nothing() {
        let mut session = session();
        let board_before = render_board_to_string(session.board());

        // Level 1 opens with a wall directly above the corgi
        assert_eq!(session.move_player(Up), Some(MoveEvent::Blocked));

        assert_eq!(session.move_count(), 0);
        assert_eq!(session.last_event(), Some(MoveEvent::Blocked));
        assert_eq!(render_board_to_string(session.board()), board_before);
    }

    #[test]
    fn reset_restores_the_initial_attempt() {
        let mut session = session();
        session.load_level(DEV_LEVEL).unwrap();
        let board_before = render_board_to_string(session.board());

        assert_eq!(session.move_player(Right), Some(MoveEvent::PickedUp));
        session.move_player(Down);
        assert!(session.has_treat());

        session.reset().unwrap();

        assert_eq!(session.state(), AttemptState::Playing);
        assert!(!session.has_treat());
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.last_event(), None);
        assert_eq!(render_board_to_string(session.board()), board_before);
    }

    #[test]
    fn won_attempt_is_inert_until_reset() {
        let mut session = session();
        win_dev_level(&mut session, &[Right, Right]);
        let board_after_win = render_board_to_string(session.board());

        assert_eq!(session.move_player(Left), None);
        assert_eq!(session.move_player(Down), None);

        assert_eq!(session.state(), AttemptState::Won);
        assert_eq!(session.move_count(), 2);
        assert_eq!(render_board_to_string(session.board()), board_after_win);

        session.reset().unwrap();
        assert_eq!(session.state(), AttemptState::Playing);
        assert_eq!(session.move_player(Right), Some(MoveEvent::PickedUp));
    }

    #[test]
    fn lost_attempt_is_inert_and_records_no_score() {
        let mut session = session();
        session.load_level(DEV_LEVEL).unwrap();

        assert_eq!(session.move_player(Right), Some(MoveEvent::PickedUp));
        assert_eq!(session.move_player(Down), Some(MoveEvent::Moved));
        assert_eq!(session.move_player(Right), Some(MoveEvent::Lost));

        assert_eq!(session.state(), AttemptState::Lost);
        assert_eq!(session.move_player(Up), None);
        assert_eq!(session.move_count(), 3);
        assert_eq!(session.best_moves(), None);
    }

    #[test]
    fn best_score_only_improves() {
        let mut session = session();

        // a deliberately wasteful four-move win
        win_dev_level(&mut session, &[Down, Up, Right, Right]);
        assert_eq!(session.move_count(), 4);
        assert_eq!(session.best_moves(), Some(4));
        assert!(session.new_record());

        // the two-move win beats it
        win_dev_level(&mut session, &[Right, Right]);
        assert_eq!(session.best_moves(), Some(2));
        assert!(session.new_record());

        // a slower win afterwards leaves the record alone
        win_dev_level(&mut session, &[Down, Up, Right, Right]);
        assert_eq!(session.best_moves(), Some(2));
        assert!(!session.new_record());

        // matching the record exactly is not an improvement
        win_dev_level(&mut session, &[Right, Right]);
        assert_eq!(session.best_moves(), Some(2));
        assert!(!session.new_record());
    }

    #[test]
    fn clear_all_progress_empties_the_store() {
        let mut session = session();
        win_dev_level(&mut session, &[Right, Right]);
        assert_eq!(session.best_moves(), Some(2));

        session.clear_all_progress();

        assert_eq!(session.best_moves(), None);
    }

    #[test]
    fn level_1_walkthrough_raises_the_documented_events() {
        let mut session = session();
        assert_eq!(session.level().name, "Level 1");

        // bump into the wall above the starting cell first
        assert_eq!(session.move_player(Up), Some(MoveEvent::Blocked));

        let path = [
            Down, Right, Down, Down, Down, Right, Right, Up, Right, // to the treat
            Up, // pick it up
            Down, Left, Down, Left, Left, Up, Up, Up, Right, Up, Right, // to the goal
            Right, // win
        ];
        for (i, &dir) in path.iter().enumerate() {
            let expected = match i {
                9 => MoveEvent::PickedUp,
                21 => MoveEvent::Won,
                _ => MoveEvent::Moved,
            };
            assert_eq!(session.move_player(dir), Some(expected), "move {i} ({dir:?})");
        }

        assert_eq!(session.state(), AttemptState::Won);
        assert_eq!(session.move_count(), 22);
        assert_eq!(session.best_moves(), Some(22));
        assert!(session.new_record());
    }
}
