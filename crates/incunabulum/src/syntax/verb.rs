//! The five verb symbols

use std::fmt;

/// A verb symbol. Each has a monadic and a dyadic reading, chosen by whether
/// a left operand is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `+`: identity / plus
    Plus,
    /// `{`: size / from
    Brace,
    /// `~`: iota / find
    Tilde,
    /// `<`: box / (none)
    Less,
    /// `#`: shape / reshape
    Hash,
    /// `,`: (none) / catenate
    Comma,
}

/// Which reading of a verb is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Valence {
    /// One right-hand operand
    Monadic,
    /// A left and a right operand
    Dyadic,
}

impl Verb {
    /// All verbs, in table order
    pub const ALL: [Verb; 6] = [
        Verb::Plus,
        Verb::Brace,
        Verb::Tilde,
        Verb::Less,
        Verb::Hash,
        Verb::Comma,
    ];

    /// Look up the verb written as `c`.
    pub fn from_char(c: char) -> Option<Verb> {
        match c {
            '+' => Some(Verb::Plus),
            '{' => Some(Verb::Brace),
            '~' => Some(Verb::Tilde),
            '<' => Some(Verb::Less),
            '#' => Some(Verb::Hash),
            ',' => Some(Verb::Comma),
            _ => None,
        }
    }

    /// The character this verb is written as
    pub fn symbol(self) -> char {
        match self {
            Verb::Plus => '+',
            Verb::Brace => '{',
            Verb::Tilde => '~',
            Verb::Less => '<',
            Verb::Hash => '#',
            Verb::Comma => ',',
        }
    }

    /// Name of the reading selected by `valence`, e.g. `iota` for monadic `~`.
    pub fn name(self, valence: Valence) -> &'static str {
        match (self, valence) {
            (Verb::Plus, Valence::Monadic) => "identity",
            (Verb::Plus, Valence::Dyadic) => "plus",
            (Verb::Brace, Valence::Monadic) => "size",
            (Verb::Brace, Valence::Dyadic) => "from",
            (Verb::Tilde, Valence::Monadic) => "iota",
            (Verb::Tilde, Valence::Dyadic) => "find",
            (Verb::Less, Valence::Monadic) => "box",
            (Verb::Less, Valence::Dyadic) => "(none)",
            (Verb::Hash, Valence::Monadic) => "shape",
            (Verb::Hash, Valence::Dyadic) => "reshape",
            (Verb::Comma, Valence::Monadic) => "(none)",
            (Verb::Comma, Valence::Dyadic) => "catenate",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Valence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valence::Monadic => write!(f, "monadic"),
            Valence::Dyadic => write!(f, "dyadic"),
        }
    }
}
