//! Character-by-character text reveal for the hero headline.
//!
//! The progression is a plain value: each tick yields the next prefix of the
//! full text, and `None` once everything is out. The web layer drives it
//! from an interval and stops the interval on the first `None`, so a
//! finished headline costs nothing.

/// Stepwise reveal of a fixed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    /// Start a reveal with nothing shown yet.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveal one more character and return the visible prefix; `None` once
    /// the full text has been revealed.
    pub fn tick(&mut self) -> Option<String> {
        if self.revealed >= self.chars.len() {
            return None;
        }
        self.revealed += 1;
        Some(self.chars[..self.revealed].iter().collect())
    }

    /// Whether every character has been revealed.
    pub fn is_finished(&self) -> bool {
        self.revealed >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut typewriter = Typewriter::new("abc");
        assert_eq!(typewriter.tick(), Some("a".to_string()));
        assert_eq!(typewriter.tick(), Some("ab".to_string()));
        assert_eq!(typewriter.tick(), Some("abc".to_string()));
        assert!(typewriter.is_finished());
    }

    #[test]
    fn finished_reveal_yields_none_forever() {
        let mut typewriter = Typewriter::new("hi");
        while typewriter.tick().is_some() {}
        assert_eq!(typewriter.tick(), None);
        assert_eq!(typewriter.tick(), None);
    }

    #[test]
    fn empty_text_is_finished_immediately() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_finished());
        assert_eq!(typewriter.tick(), None);
    }

    #[test]
    fn multibyte_characters_are_never_split() {
        let mut typewriter = Typewriter::new("n\u{e9}\u{20b9}");
        assert_eq!(typewriter.tick(), Some("n".to_string()));
        assert_eq!(typewriter.tick(), Some("n\u{e9}".to_string()));
        assert_eq!(typewriter.tick(), Some("n\u{e9}\u{20b9}".to_string()));
        assert_eq!(typewriter.tick(), None);
    }
}
