//! Match session management.
//!
//! `MatchSession` wires the round engine to the statistical evaluator
//! behind a line-based command interface: a choice word plays one round,
//! the final round appends the statistical verdict, and every event lands
//! in the transcript.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use jk_core::{Choice, Outcome, Phase, RoundEngine, TOTAL_ROUNDS, WIN_PROBABILITY};
use jk_stats::evaluate;

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::transcript::{Transcript, TranscriptEntry};
use crate::verdict::verdict_message;

/// An interactive fixed-length match against a random computer opponent.
pub struct MatchSession {
    engine: RoundEngine,
    rng: StdRng,
    transcript: Transcript,
}

impl MatchSession {
    /// Create a new session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            engine: RoundEngine::new(),
            rng: StdRng::seed_from_u64(config.seed),
            transcript: Transcript::new(),
        }
    }

    /// The underlying engine.
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// The transcript so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        if let Some(choice) = Choice::parse(&cmd) {
            return self.do_play(choice);
        }

        match cmd.as_str() {
            "status" => self.do_status(),
            "log" => self.do_log(),
            "export" => self.do_export(rest),
            "reset" => self.do_reset(),
            "help" => Ok(self.do_help(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SessionError::UnknownCommand(cmd)),
        }
    }

    fn do_play(&mut self, player: Choice) -> SessionResult<String> {
        if self.engine.is_complete() {
            return Err(SessionError::MatchOver);
        }

        let record = self.engine.play_round(player, &mut self.rng)?;
        self.transcript.append(TranscriptEntry::RoundPlayed {
            round: record.round,
            player: record.player,
            computer: record.computer,
            outcome: record.outcome,
            timestamp: Utc::now(),
        });

        let phrase = match record.outcome {
            Outcome::Win => "You win!",
            Outcome::Loss => "You lose...",
            Outcome::Draw => "Draw!",
        };
        let mut output = format!(
            "Round {}/{}: {} vs {}. {} ({})",
            record.round,
            TOTAL_ROUNDS,
            record.player,
            record.computer,
            phrase,
            self.engine.tally(),
        );

        if self.engine.is_complete() {
            output.push_str("\n\n");
            output.push_str(&self.final_report()?);
        }
        Ok(output)
    }

    fn final_report(&mut self) -> SessionResult<String> {
        let tally = *self.engine.tally();
        let summary = evaluate(&tally, TOTAL_ROUNDS, WIN_PROBABILITY)?;
        let verdict = verdict_message(&summary, &mut self.rng);

        self.transcript.append(TranscriptEntry::MatchFinished {
            wins: tally.wins(),
            losses: tally.losses(),
            draws: tally.draws(),
            z_score: summary.z_score,
            classification: summary.classification.to_string(),
            verdict: verdict.clone(),
            timestamp: Utc::now(),
        });

        let mut out = String::from("--- Match complete ---\n");
        out.push_str(&format!("Rounds: {}  {}\n", tally.rounds(), tally));
        out.push_str(&format!(
            "Expected wins: {:.2}  Std dev: {:.2}\n",
            summary.expected, summary.std_dev
        ));
        out.push_str(&format!(
            "Z-score: {:.2} ({})\n",
            summary.z_score, summary.classification
        ));
        out.push_str(&format!(
            "Lower tail: {:.1}%  Upper tail: {:.1}%\n\n",
            summary.lower_tail * 100.0,
            summary.upper_tail * 100.0
        ));
        out.push_str(&verdict);
        Ok(out)
    }

    fn do_status(&self) -> SessionResult<String> {
        let tally = self.engine.tally();
        let mut out = format!(
            "Round {}/{} ({})\n",
            tally.rounds(),
            TOTAL_ROUNDS,
            self.engine.phase()
        );
        out.push_str(&format!("Tally: {tally}"));
        if self.engine.phase() == Phase::Complete {
            out.push_str("\nMatch complete. Type 'reset' to play again.");
        }
        Ok(out)
    }

    fn do_log(&self) -> SessionResult<String> {
        if self.transcript.is_empty() {
            return Ok("Transcript is empty.".to_string());
        }
        // Show the last 10 entries as text.
        let entries = self.transcript.entries();
        let start = entries.len().saturating_sub(10);
        let recent = &entries[start..];

        let mut mini = Transcript::new();
        for e in recent {
            mini.append(e.clone());
        }
        let mut out = format!(
            "Transcript ({} entries, showing last {}):\n\n",
            entries.len(),
            recent.len()
        );
        out.push_str(&mini.export_text());
        Ok(out.trim_end().to_string())
    }

    fn do_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.transcript.export_markdown()),
            "text" | "txt" => Ok(self.transcript.export_text()),
            other => Err(SessionError::InvalidInput(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_reset(&mut self) -> SessionResult<String> {
        let rounds_played = self.engine.tally().rounds();
        self.engine.reset();
        self.transcript.append(TranscriptEntry::MatchReset {
            rounds_played,
            timestamp: Utc::now(),
        });
        Ok(format!("Match reset. {TOTAL_ROUNDS} fresh rounds ahead."))
    }

    fn do_help(&self, topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "stats" | "verdict" => "\
The Verdict:
  A full match is 90 rounds against a uniform random opponent, so the
  win count follows a binomial distribution with p = 1/3, approximated
  as a normal with mean 30 and standard deviation ~4.47. The Z-score
  measures how far your win count sits from the mean; at |Z| >= 1.96
  the result is called an outlier, high or low depending on the sign."
                .to_string(),
            _ => "\
Match Commands:
  rock | scissors | paper       Play one round (also: r, s, p, gu, choki, pa)
  status                        Show round count and tally
  log                           Show recent transcript entries
  export [markdown|text]        Export the full transcript
  reset                         Restart the match
  help [topic]                  Show help (stats)
  quit                          Exit

A match is 90 rounds; the final round prints the statistical verdict."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> MatchSession {
        MatchSession::new(SessionConfig::default())
    }

    fn play_full_match(session: &mut MatchSession) -> String {
        let mut last = String::new();
        for _ in 0..TOTAL_ROUNDS {
            last = session.process("rock").unwrap();
        }
        last
    }

    #[test]
    fn create_session() {
        let s = test_session();
        assert_eq!(s.engine().phase(), Phase::Playing);
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn play_one_round() {
        let mut s = test_session();
        let output = s.process("rock").unwrap();
        assert!(output.contains("Round 1/90"));
        assert!(output.contains("Rock vs"));
        assert_eq!(s.transcript().len(), 1);
        assert_eq!(s.engine().tally().rounds(), 1);
    }

    #[test]
    fn choice_aliases() {
        let mut s = test_session();
        s.process("r").unwrap();
        s.process("choki").unwrap();
        s.process("P").unwrap();
        assert_eq!(s.engine().tally().rounds(), 3);
    }

    #[test]
    fn final_round_appends_verdict() {
        let mut s = test_session();
        let last = play_full_match(&mut s);
        assert!(last.contains("Round 90/90"));
        assert!(last.contains("--- Match complete ---"));
        assert!(last.contains("Expected wins: 30.00"));
        assert!(last.contains("Std dev: 4.47"));
        assert!(last.contains("Z-score:"));
        // 90 rounds plus the final result entry.
        assert_eq!(s.transcript().len(), 91);
    }

    #[test]
    fn play_after_completion_is_rejected() {
        let mut s = test_session();
        play_full_match(&mut s);
        let result = s.process("rock");
        assert!(matches!(result, Err(SessionError::MatchOver)));
        assert_eq!(s.engine().tally().rounds(), TOTAL_ROUNDS);
    }

    #[test]
    fn match_over_error_mentions_reset() {
        let mut s = test_session();
        play_full_match(&mut s);
        let err = s.process("paper").unwrap_err();
        assert!(err.to_string().contains("reset"));
    }

    #[test]
    fn reset_starts_a_fresh_match() {
        let mut s = test_session();
        play_full_match(&mut s);
        let output = s.process("reset").unwrap();
        assert!(output.contains("Match reset"));
        assert_eq!(s.engine().phase(), Phase::Playing);
        assert_eq!(s.engine().tally().rounds(), 0);

        let output = s.process("rock").unwrap();
        assert!(output.contains("Round 1/90"));
    }

    #[test]
    fn status_reports_progress() {
        let mut s = test_session();
        s.process("rock").unwrap();
        s.process("paper").unwrap();
        let status = s.process("status").unwrap();
        assert!(status.contains("Round 2/90 (playing)"));
        assert!(status.contains("Tally: W"));
    }

    #[test]
    fn status_after_completion_suggests_reset() {
        let mut s = test_session();
        play_full_match(&mut s);
        let status = s.process("status").unwrap();
        assert!(status.contains("(complete)"));
        assert!(status.contains("reset"));
    }

    #[test]
    fn log_shows_recent_rounds() {
        let mut s = test_session();
        s.process("rock").unwrap();
        s.process("scissors").unwrap();
        let log = s.process("log").unwrap();
        assert!(log.contains("2 entries"));
        assert!(log.contains("Round 1:"));
        assert!(log.contains("Round 2:"));
    }

    #[test]
    fn log_caps_at_ten_entries() {
        let mut s = test_session();
        for _ in 0..15 {
            s.process("rock").unwrap();
        }
        let log = s.process("log").unwrap();
        assert!(log.contains("15 entries, showing last 10"));
        assert!(!log.contains("Round 5:"));
        assert!(log.contains("Round 6:"));
    }

    #[test]
    fn log_on_empty_transcript() {
        let mut s = test_session();
        assert_eq!(s.process("log").unwrap(), "Transcript is empty.");
    }

    #[test]
    fn export_formats() {
        let mut s = test_session();
        s.process("rock").unwrap();

        let md = s.process("export markdown").unwrap();
        assert!(md.contains("# Match Transcript"));

        let txt = s.process("export text").unwrap();
        assert!(txt.contains("Match Transcript"));

        assert!(matches!(
            s.process("export yaml"),
            Err(SessionError::InvalidInput(_))
        ));
    }

    #[test]
    fn unknown_command() {
        let mut s = test_session();
        let err = s.process("lizard").unwrap_err();
        assert!(matches!(err, SessionError::UnknownCommand(_)));
    }

    #[test]
    fn empty_input() {
        let mut s = test_session();
        assert_eq!(s.process("").unwrap(), "");
        assert_eq!(s.engine().tally().rounds(), 0);
    }

    #[test]
    fn quit() {
        let mut s = test_session();
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert_eq!(s.process("q").unwrap(), "Goodbye!");
    }

    #[test]
    fn help_commands() {
        let s = test_session();
        let help = s.do_help("");
        assert!(help.contains("Match Commands"));
        let help = s.do_help("stats");
        assert!(help.contains("Z-score"));
    }

    #[test]
    fn same_seed_replays_identically() {
        let mut a = MatchSession::new(SessionConfig::default().with_seed(7));
        let mut b = MatchSession::new(SessionConfig::default().with_seed(7));
        for _ in 0..TOTAL_ROUNDS {
            assert_eq!(a.process("paper").unwrap(), b.process("paper").unwrap());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = MatchSession::new(SessionConfig::default().with_seed(1));
        let mut b = MatchSession::new(SessionConfig::default().with_seed(2));
        let mut same = true;
        for _ in 0..20 {
            if a.process("rock").unwrap() != b.process("rock").unwrap() {
                same = false;
            }
        }
        assert!(!same);
    }
}
