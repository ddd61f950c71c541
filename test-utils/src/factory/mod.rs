//! Factory methods for creating test data.
//!
//! Factories insert records with sensible defaults, reducing boilerplate in tests. Each
//! record type has a `create_*` convenience function, and the records with many optional
//! fields also have a `Factory` builder for customization.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (user, student) = factory::create_student(&db).await?;
//! let (user, teacher) = factory::create_teacher(&db).await?;
//! let group = factory::group::GroupFactory::new(&db)
//!     .curator_id(teacher.id)
//!     .build()
//!     .await?;
//! factory::link::group_student(&db, group.id, student.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Bare user rows
//! - `student` / `teacher` - User rows together with their role row
//! - `position`, `specialty`, `group`, `subject`, `assignment`
//! - `link` - Association table rows
//! - `helpers` - Id generation, password hashing and multi-record helpers

pub mod assignment;
pub mod group;
pub mod helpers;
pub mod link;
pub mod position;
pub mod specialty;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;

pub use assignment::create_assignment;
pub use group::create_group;
pub use position::create_position;
pub use specialty::create_specialty;
pub use student::create_student;
pub use subject::create_subject;
pub use teacher::{create_teacher, create_teacher_with_position};
pub use user::create_user;
