/// State of one mask cell before or after resolution
///
/// The two ambiguous states only appear in unresolved masks; resolution
/// replaces each of them with one of the concrete states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    /// Transparent background
    #[default]
    Empty,
    /// Filled, colored interior
    Body,
    /// Outline
    Border,
    /// Resolves to `Body` or `Empty`
    BodyOrEmpty,
    /// Resolves to `Body` or `Border`
    BodyOrBorder,
}

impl Pixel {
    /// Parse one template character
    ///
    /// `' '` is empty, `'-'`, `'|'` and `'+'` are borders, `'.'` may become body
    /// or empty, `'/'` may become body or border and `'O'` is body.
    pub const fn from_template_char(character: char) -> Option<Self> {
        match character {
            ' ' => Some(Self::Empty),
            '-' | '|' | '+' => Some(Self::Border),
            '.' => Some(Self::BodyOrEmpty),
            '/' => Some(Self::BodyOrBorder),
            'O' => Some(Self::Body),
            _ => None,
        }
    }

    /// Canonical template character for this state
    pub const fn template_char(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Body => 'O',
            Self::Border => '+',
            Self::BodyOrEmpty => '.',
            Self::BodyOrBorder => '/',
        }
    }

    /// Whether the state still awaits a bit draw
    pub const fn is_ambiguous(self) -> bool {
        matches!(self, Self::BodyOrEmpty | Self::BodyOrBorder)
    }

    /// Whether the state is a resolved, visible part of the sprite
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Body | Self::Border)
    }
}
