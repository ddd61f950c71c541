pub mod prelude;

pub mod assignment;
pub mod group;
pub mod group_student;
pub mod position;
pub mod specialty;
pub mod student;
pub mod subject;
pub mod subject_group;
pub mod subject_specialty;
pub mod subject_teacher;
pub mod teacher;
pub mod token_blocklist;
pub mod user;
