//! Stepping through a generated study set.
//!
//! A [`StudySession`] is a value: every [`SessionEvent`] produces a new session and leaves the
//! old one untouched, so the viewer state can be driven and inspected without any rendering
//! framework.

use crate::api::{StudyItem, StudySetType};

/// How an open answer is compared with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradingStrategy {
    /// Answer contains the first 10 UTF-16 code units of the expected answer, ignoring case.
    /// Counting code units rather than chars keeps results identical to the browser viewer
    /// when the answer holds characters outside the Basic Multilingual Plane.
    #[default]
    LegacyPrefix,
    /// Trimmed, case-insensitive equality.
    Exact,
    /// Answer contains the whole expected answer, ignoring case.
    Substring,
}

const LEGACY_PREFIX_UNITS: usize = 10;

fn contains_utf16_prefix(haystack: &str, needle: &str) -> bool {
    let needle: Vec<u16> = needle.encode_utf16().take(LEGACY_PREFIX_UNITS).collect();
    if needle.is_empty() {
        return true;
    }
    let haystack: Vec<u16> = haystack.encode_utf16().collect();
    haystack.windows(needle.len()).any(|window| window == needle.as_slice())
}

impl GradingStrategy {
    pub fn grade(&self, answer: &str, expected: &str) -> bool {
        let answer = answer.to_lowercase();
        let expected = expected.to_lowercase();
        match self {
            GradingStrategy::LegacyPrefix => contains_utf16_prefix(&answer, &expected),
            GradingStrategy::Exact => answer.trim() == expected.trim(),
            GradingStrategy::Substring => answer.contains(&expected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemPhase {
    #[default]
    Front,
    Back,
    Answered { correct: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Advance,
    Retreat,
    Flip,
    Reveal,
    SelectOption(usize),
    SubmitText(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    kind: StudySetType,
    items: Vec<StudyItem>,
    phases: Vec<ItemPhase>,
    index: usize,
    grader: GradingStrategy,
}

impl StudySession {
    pub fn new(kind: StudySetType, items: Vec<StudyItem>) -> Self {
        let phases = vec![ItemPhase::Front; items.len()];
        Self {
            kind,
            items,
            phases,
            index: 0,
            grader: GradingStrategy::default(),
        }
    }

    pub fn with_grader(mut self, grader: GradingStrategy) -> Self {
        self.grader = grader;
        self
    }

    pub fn kind(&self) -> StudySetType {
        self.kind
    }

    pub fn current(&self) -> Option<&StudyItem> {
        self.items.get(self.index)
    }

    pub fn phase(&self) -> ItemPhase {
        self.phases.get(self.index).copied().unwrap_or_default()
    }

    /// 1-based position and total, e.g. `(3, 10)`; `(0, 0)` for an empty session.
    pub fn position(&self) -> (usize, usize) {
        if self.items.is_empty() {
            return (0, 0);
        }
        (self.index + 1, self.items.len())
    }

    pub fn is_last(&self) -> bool {
        self.items.is_empty() || self.index == self.items.len() - 1
    }

    pub fn score(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| matches!(phase, ItemPhase::Answered { correct: true }))
            .count()
    }

    pub fn answered(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| matches!(phase, ItemPhase::Answered { .. }))
            .count()
    }

    pub fn progress(&self) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f32 / self.items.len() as f32
    }

    pub fn apply(&self, event: SessionEvent) -> StudySession {
        let mut next = self.clone();
        match event {
            SessionEvent::Advance if !self.is_last() => next.move_to(self.index + 1),
            SessionEvent::Retreat if self.index > 0 => next.move_to(self.index - 1),
            SessionEvent::Advance | SessionEvent::Retreat => {}
            SessionEvent::Flip => {
                if self.kind == StudySetType::Flashcards {
                    next.set_phase(match self.phase() {
                        ItemPhase::Front => ItemPhase::Back,
                        _ => ItemPhase::Front,
                    });
                }
            }
            SessionEvent::Reveal => {
                if self.kind != StudySetType::Flashcards && self.phase() == ItemPhase::Front {
                    next.set_phase(ItemPhase::Back);
                }
            }
            SessionEvent::SelectOption(choice) => {
                if let (Some(StudyItem::MultipleChoice(item)), false) =
                    (self.current(), self.is_answered())
                {
                    if let Some(option) = item.options.get(choice) {
                        let correct = *option == item.correct_answer;
                        next.set_phase(ItemPhase::Answered { correct });
                    }
                }
            }
            SessionEvent::SubmitText(answer) => {
                if answer.trim().is_empty() || self.is_answered() {
                    return next;
                }
                let expected = match self.current() {
                    Some(StudyItem::Open(item)) => &item.correct_answer,
                    Some(StudyItem::MultipleChoice(item)) => &item.correct_answer,
                    _ => return next,
                };
                let correct = self.grader.grade(&answer, expected);
                next.set_phase(ItemPhase::Answered { correct });
            }
        }
        next
    }

    fn is_answered(&self) -> bool {
        matches!(self.phase(), ItemPhase::Answered { .. })
    }

    fn set_phase(&mut self, phase: ItemPhase) {
        if let Some(slot) = self.phases.get_mut(self.index) {
            *slot = phase;
        }
    }

    fn move_to(&mut self, index: usize) {
        // flashcards always come back face up
        if self.kind == StudySetType::Flashcards {
            self.set_phase(ItemPhase::Front);
        }
        self.index = index;
        if self.kind == StudySetType::Flashcards {
            self.set_phase(ItemPhase::Front);
        }
    }
}
