//! Database seeding for local development.

pub mod assignments;
pub mod models;
pub mod users;

use sqlx::PgPool;
use std::time::Instant;

pub use models::{AssignmentSeed, SeedConfig, UserSeed};
use users::RoleTable;

/// Seeds principals, teachers, students and their assignments in one transaction.
pub async fn seed_all(pool: &PgPool, config: &SeedConfig) -> Result<(), sqlx::Error> {
    let start = Instant::now();
    println!("🌱 Seeding database...");

    let mut tx = pool.begin().await?;

    let principal_ids = users::insert_role_users(
        &mut tx,
        RoleTable::Principals,
        &users::generate_users(RoleTable::Principals, config.principals),
    )
    .await?;
    let teacher_ids = users::insert_role_users(
        &mut tx,
        RoleTable::Teachers,
        &users::generate_users(RoleTable::Teachers, config.teachers),
    )
    .await?;
    let student_ids = users::insert_role_users(
        &mut tx,
        RoleTable::Students,
        &users::generate_users(RoleTable::Students, config.students),
    )
    .await?;

    let plan = assignments::plan_assignments(student_ids.len(), teacher_ids.len());
    let assignment_count =
        assignments::insert_assignments(&mut tx, &plan, &student_ids, &teacher_ids).await?;

    tx.commit().await?;

    println!("   Principals:  {}", principal_ids.len());
    println!("   Teachers:    {}", teacher_ids.len());
    println!("   Students:    {}", student_ids.len());
    println!("   Assignments: {}", assignment_count);
    println!("✅ Seeding finished in {:.2?}", start.elapsed());
    Ok(())
}

/// Removes every row the seeder can create.
pub async fn clear_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    println!("🧹 Clearing seeded data...");

    sqlx::query("TRUNCATE assignments, students, teachers, principals, users RESTART IDENTITY")
        .execute(pool)
        .await?;

    println!("✅ Cleared all seeded data");
    Ok(())
}
