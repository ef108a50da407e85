use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Text shown on a cell that has not been clicked yet.
pub const PLACEHOLDER: &str = "?";

/// What a single cell currently displays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Showing {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl Showing {
    /// Next state on click. `Answer` is terminal.
    pub const fn next(self) -> Self {
        use Showing::*;
        match self {
            Hidden => Question,
            Question => Answer,
            Answer => Answer,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: Showing,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// Advances hidden -> question -> answer, never backwards and never skipping.
    pub fn reveal(&mut self) -> RevealOutcome {
        use Showing::*;

        let outcome = match self.showing {
            Hidden => RevealOutcome::ShowedQuestion,
            Question => RevealOutcome::ShowedAnswer,
            Answer => RevealOutcome::NoChange,
        };
        self.showing = self.showing.next();
        outcome
    }

    pub fn displayed_text(&self) -> &str {
        use Showing::*;
        match self.showing {
            Hidden => PLACEHOLDER,
            Question => &self.question,
            Answer => &self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_walks_question_then_answer_then_stops() {
        let mut clue = Clue::new("2+2", "4");
        assert_eq!(clue.displayed_text(), PLACEHOLDER);

        assert_eq!(clue.reveal(), RevealOutcome::ShowedQuestion);
        assert_eq!(clue.showing(), Showing::Question);
        assert_eq!(clue.displayed_text(), "2+2");

        assert_eq!(clue.reveal(), RevealOutcome::ShowedAnswer);
        assert_eq!(clue.showing(), Showing::Answer);
        assert_eq!(clue.displayed_text(), "4");

        for _ in 0..3 {
            assert_eq!(clue.reveal(), RevealOutcome::NoChange);
            assert_eq!(clue.displayed_text(), "4");
        }
    }

    #[test]
    fn showing_never_regresses() {
        let mut prev = Showing::Hidden;
        let mut seen_question = false;
        for _ in 0..6 {
            let next = prev.next();
            seen_question |= next == Showing::Question;
            if next == Showing::Answer {
                assert!(seen_question, "answer reached without question");
            }
            assert!(next != Showing::Hidden);
            prev = next;
        }
        assert_eq!(prev, Showing::Answer);
    }

    #[test]
    fn only_state_changes_count_as_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::ShowedQuestion.has_update());
        assert!(RevealOutcome::ShowedAnswer.has_update());
    }
}
