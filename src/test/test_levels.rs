#[cfg(test)]
mod test {
    use crate::error::GameError;
    use crate::levels::{parse_layout, LevelDef, LEVELS};
    use crate::solver::solve;

    #[test]
    fn every_shipped_level_is_a_seven_by_seven_board() {
        for def in LEVELS.iter() {
            let board = def.board().unwrap_or_else(|e| panic!("{}: {e}", def.name));
            assert_eq!(board.rows(), 7, "{}", def.name);
            assert_eq!(board.cols(), 7, "{}", def.name);
            assert_eq!(board.player_count(), 1, "{}", def.name);
        }
    }

    #[test]
    fn every_shipped_level_is_winnable() {
        for def in LEVELS.iter() {
            let board = def.board().unwrap();
            assert!(
                solve(&board).is_some(),
                "{} ({}) cannot be won",
                def.name,
                def.difficulty
            );
        }
    }

    #[test]
    fn dev_level_par_is_two_moves() {
        let board = LEVELS[10].board().unwrap();
        assert_eq!(solve(&board), Some(2));
    }

    #[test]
    fn level_1_par_is_at_most_the_documented_walkthrough() {
        let board = LEVELS[0].board().unwrap();
        let par = solve(&board).unwrap();
        assert!(par <= 22, "par {par}");
    }

    #[test]
    fn unwinnable_layout_solves_to_none() {
        // no treat anywhere, so the goal can never fire
        let board = parse_layout(
            "\
#####
#@ .#
#####",
        )
        .unwrap();
        assert_eq!(solve(&board), None);
    }

    #[test]
    fn level_without_a_player_is_rejected() {
        let def = LevelDef { name: "broken", difficulty: "Test", layout: "# $ #" };
        assert!(matches!(def.board(), Err(GameError::MalformedLevel(_))));
    }

    #[test]
    fn level_with_two_players_is_rejected() {
        let def = LevelDef { name: "broken", difficulty: "Test", layout: "#@@#" };
        assert!(matches!(def.board(), Err(GameError::MalformedLevel(_))));
    }

    #[test]
    fn ragged_layout_is_rejected() {
        assert!(matches!(
            parse_layout("####\n# #\n####"),
            Err(GameError::MalformedLevel(_))
        ));
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        assert!(matches!(
            parse_layout("#@z#"),
            Err(GameError::MalformedLevel(_))
        ));
    }
}
