use std::fmt;

/// Resource kinds named in response messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Teacher,
    /// A teacher referenced as a group's curator.
    Curator,
    Position,
    Specialty,
    Group,
    Subject,
    Assignment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Curator => "Curator",
            Self::Position => "Position",
            Self::Specialty => "Specialty",
            Self::Group => "Group",
            Self::Subject => "Subject",
            Self::Assignment => "Assignment",
        };
        f.write_str(name)
    }
}
