pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_position_table;
mod m20260105_000003_create_student_table;
mod m20260105_000004_create_teacher_table;
mod m20260106_000005_create_specialty_table;
mod m20260106_000006_create_group_table;
mod m20260106_000007_create_subject_table;
mod m20260106_000008_create_assignment_table;
mod m20260107_000009_create_subject_teacher_table;
mod m20260107_000010_create_group_student_table;
mod m20260107_000011_create_subject_specialty_table;
mod m20260107_000012_create_subject_group_table;
mod m20260108_000013_create_token_blocklist_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_position_table::Migration),
            Box::new(m20260105_000003_create_student_table::Migration),
            Box::new(m20260105_000004_create_teacher_table::Migration),
            Box::new(m20260106_000005_create_specialty_table::Migration),
            Box::new(m20260106_000006_create_group_table::Migration),
            Box::new(m20260106_000007_create_subject_table::Migration),
            Box::new(m20260106_000008_create_assignment_table::Migration),
            Box::new(m20260107_000009_create_subject_teacher_table::Migration),
            Box::new(m20260107_000010_create_group_student_table::Migration),
            Box::new(m20260107_000011_create_subject_specialty_table::Migration),
            Box::new(m20260107_000012_create_subject_group_table::Migration),
            Box::new(m20260108_000013_create_token_blocklist_table::Migration),
        ]
    }
}
