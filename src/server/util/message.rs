//! Success messages returned in response envelopes.

use std::fmt::Display;

use uuid::Uuid;

use crate::server::model::kind::EntityKind;

pub fn created(kind: EntityKind, id: Uuid) -> String {
    format!("{kind} <id={id}> Created Successfully.")
}

pub fn updated(kind: EntityKind, id: Uuid) -> String {
    format!("{kind} with <id={id}> Updated Successfully.")
}

pub fn deleted(kind: EntityKind, id: Uuid) -> String {
    format!("{kind} with <id={id}> Deleted Successfully.")
}

pub fn appointed(items: impl Display, owner: impl Display) -> String {
    format!("{items} Appointed To {owner}.")
}

pub fn disappointed(items: impl Display, owner: impl Display) -> String {
    format!("{items} Disappointed From {owner}.")
}

/// Renders ids as `[a, b]`.
pub fn format_ids(ids: &[Uuid]) -> String {
    let joined = ids
        .iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_id_lists() {
        let a = Uuid::nil();
        assert_eq!(format_ids(&[]), "[]");
        assert_eq!(
            format_ids(&[a, a]),
            "[00000000-0000-0000-0000-000000000000, 00000000-0000-0000-0000-000000000000]"
        );
    }

    #[test]
    fn crud_messages() {
        let id = Uuid::nil();
        assert_eq!(
            created(EntityKind::Student, id),
            format!("Student <id={id}> Created Successfully.")
        );
        assert_eq!(
            deleted(EntityKind::Group, id),
            format!("Group with <id={id}> Deleted Successfully.")
        );
    }
}
