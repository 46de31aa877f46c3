//! Transcript storage and export.

use serde::{Deserialize, Serialize};

use super::entry::TranscriptEntry;

/// A chronological log of match events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// All entries in order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the transcript as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Match Transcript\n\n");
        for entry in &self.entries {
            match entry {
                TranscriptEntry::RoundPlayed {
                    round,
                    player,
                    computer,
                    outcome,
                    ..
                } => {
                    out.push_str(&format!(
                        "- **Round {round}**: {player} vs {computer}: {outcome}\n"
                    ));
                }
                TranscriptEntry::MatchFinished {
                    wins,
                    losses,
                    draws,
                    z_score,
                    classification,
                    verdict,
                    ..
                } => {
                    out.push_str("\n## Final Result\n\n");
                    out.push_str(&format!(
                        "**W {wins} / L {losses} / D {draws}**, Z {z_score:.2} ({classification})\n\n"
                    ));
                    out.push_str(&format!("> {verdict}\n\n"));
                }
                TranscriptEntry::MatchReset { rounds_played, .. } => {
                    out.push_str(&format!(
                        "\n*Match reset after {rounds_played} rounds.*\n\n"
                    ));
                }
            }
        }
        out
    }

    /// Export the transcript as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Match Transcript\n================\n\n");
        for entry in &self.entries {
            match entry {
                TranscriptEntry::RoundPlayed {
                    round,
                    player,
                    computer,
                    outcome,
                    ..
                } => {
                    out.push_str(&format!("Round {round}: {player} vs {computer}: {outcome}\n"));
                }
                TranscriptEntry::MatchFinished {
                    wins,
                    losses,
                    draws,
                    z_score,
                    classification,
                    verdict,
                    ..
                } => {
                    out.push_str(&format!(
                        "\nFinal: W {wins} / L {losses} / D {draws}, Z {z_score:.2} ({classification})\n"
                    ));
                    out.push_str(&format!("{verdict}\n\n"));
                }
                TranscriptEntry::MatchReset { rounds_played, .. } => {
                    out.push_str(&format!("Match reset after {rounds_played} rounds.\n\n"));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jk_core::{Choice, Outcome};

    fn round_entry(round: u32) -> TranscriptEntry {
        TranscriptEntry::RoundPlayed {
            round,
            player: Choice::Rock,
            computer: Choice::Scissors,
            outcome: Outcome::Win,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_transcript() {
        let t = Transcript::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn append_and_query() {
        let mut t = Transcript::new();
        t.append(round_entry(1));
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
    }

    #[test]
    fn export_text_round() {
        let mut t = Transcript::new();
        t.append(round_entry(3));
        let txt = t.export_text();
        assert!(txt.contains("Round 3: Rock vs Scissors: Win"));
    }

    #[test]
    fn export_markdown_final_result() {
        let mut t = Transcript::new();
        t.append(TranscriptEntry::MatchFinished {
            wins: 45,
            losses: 25,
            draws: 20,
            z_score: 3.3541,
            classification: "high outlier".to_string(),
            verdict: "Magnificent!".to_string(),
            timestamp: Utc::now(),
        });
        let md = t.export_markdown();
        assert!(md.contains("## Final Result"));
        assert!(md.contains("W 45 / L 25 / D 20"));
        assert!(md.contains("Z 3.35 (high outlier)"));
        assert!(md.contains("> Magnificent!"));
    }

    #[test]
    fn export_text_reset() {
        let mut t = Transcript::new();
        t.append(TranscriptEntry::MatchReset {
            rounds_played: 12,
            timestamp: Utc::now(),
        });
        let txt = t.export_text();
        assert!(txt.contains("Match reset after 12 rounds."));
    }

    #[test]
    fn serde_round_trip() {
        let mut t = Transcript::new();
        t.append(round_entry(1));
        t.append(TranscriptEntry::MatchReset {
            rounds_played: 1,
            timestamp: Utc::now(),
        });
        let json = serde_json::to_string(&t).unwrap();
        let back: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
    }
}
