#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use startup_bust::{run_cli, GameSession, IoConsole, Score};

    fn set_up(seed: u64) -> GameSession {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = GameSession::new();
        session.set_up(&mut rng).unwrap();
        session
    }

    /// Input that hits every placed cell, uppercased and CRLF-terminated.
    fn winning_script(session: &GameSession) -> String {
        session
            .startups()
            .iter()
            .flat_map(|s| s.cells().iter())
            .map(|l| format!("{}\r\n", l.as_str().to_uppercase()))
            .collect()
    }

    #[test]
    fn test_scripted_game_transcript() {
        let mut session = set_up(12345);
        let script = format!("zz\n\n{}", winning_script(&session));
        let mut console = IoConsole::new(Cursor::new(script), Vec::new());

        let summary = run_cli(&mut session, &mut console, false).unwrap().unwrap();
        assert_eq!(summary.guesses, 11);
        assert_eq!(summary.score, Score::Efficient);

        let out = String::from_utf8(console.into_output()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Your goal is to sink three Startups.");
        assert_eq!(lines[1], "poniez, hacqi, cabista");
        assert_eq!(out.matches("Enter a guess: miss").count(), 2);
        assert_eq!(out.matches("Enter a guess: hit").count(), 6);
        assert_eq!(out.matches("Enter a guess: kill").count(), 3);
        assert!(out.ends_with(
            "All Startups are dead! Your stock is now worthless\n\
             It only took you 11 guesses.\n\
             You got out before your options sank.\n"
        ));
    }

    #[test]
    fn test_reveal_lists_positions() {
        let mut session = set_up(8);
        let first = session.startups()[0].cells().to_vec();
        let mut console = IoConsole::new(Cursor::new(String::new()), Vec::new());

        run_cli(&mut session, &mut console, true).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        let expected = format!(
            "poniez: {} {} {}",
            first[0].as_str(),
            first[1].as_str(),
            first[2].as_str()
        );
        assert!(out.contains(&expected), "missing {:?} in {:?}", expected, out);
    }

    #[test]
    fn test_end_of_input_abandons_game() {
        let mut session = set_up(3);
        let mut console = IoConsole::new(Cursor::new("a0\n"), Vec::new());

        let summary = run_cli(&mut session, &mut console, false).unwrap();
        assert!(summary.is_none());
        assert_eq!(session.guess_count(), 1);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(!out.contains("All Startups are dead"));
    }

    #[test]
    fn test_refuses_unplaced_session() {
        let mut session = GameSession::new();
        let mut console = IoConsole::new(Cursor::new("a0\n"), Vec::new());
        assert!(run_cli(&mut session, &mut console, false).is_err());
    }
}
