pub use super::assignment::Entity as Assignment;
pub use super::group::Entity as Group;
pub use super::group_student::Entity as GroupStudent;
pub use super::position::Entity as Position;
pub use super::specialty::Entity as Specialty;
pub use super::student::Entity as Student;
pub use super::subject::Entity as Subject;
pub use super::subject_group::Entity as SubjectGroup;
pub use super::subject_specialty::Entity as SubjectSpecialty;
pub use super::subject_teacher::Entity as SubjectTeacher;
pub use super::teacher::Entity as Teacher;
pub use super::token_blocklist::Entity as TokenBlocklist;
pub use super::user::Entity as User;
