//! Assignment seeding.
//!
//! Every student gets one assignment in each lifecycle state so that all
//! three role views have something to show.

use gradebook_models::AssignmentState;
use sqlx::{Postgres, Transaction};

use super::models::{AssignmentSeed, SEED_GRADES};

pub fn plan_assignments(students: usize, teachers: usize) -> Vec<AssignmentSeed> {
    let mut seeds = Vec::with_capacity(students * 3);

    for student_idx in 0..students {
        seeds.push(AssignmentSeed {
            student_idx,
            teacher_idx: None,
            content: format!("Draft essay by student {}", student_idx + 1),
            state: AssignmentState::Draft,
            grade: None,
        });

        // Without teachers nothing can be submitted or graded.
        if teachers == 0 {
            continue;
        }

        let teacher_idx = student_idx % teachers;
        seeds.push(AssignmentSeed {
            student_idx,
            teacher_idx: Some(teacher_idx),
            content: format!("Lab report by student {}", student_idx + 1),
            state: AssignmentState::Submitted,
            grade: None,
        });
        seeds.push(AssignmentSeed {
            student_idx,
            teacher_idx: Some(teacher_idx),
            content: format!("Book review by student {}", student_idx + 1),
            state: AssignmentState::Graded,
            grade: Some(SEED_GRADES[student_idx % SEED_GRADES.len()]),
        });
    }

    seeds
}

pub async fn insert_assignments(
    tx: &mut Transaction<'_, Postgres>,
    seeds: &[AssignmentSeed],
    student_ids: &[i64],
    teacher_ids: &[i64],
) -> Result<usize, sqlx::Error> {
    for seed in seeds {
        sqlx::query(
            "INSERT INTO assignments (content, state, grade, student_id, teacher_id)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&seed.content)
        .bind(seed.state)
        .bind(seed.grade)
        .bind(student_ids[seed.student_idx])
        .bind(seed.teacher_idx.map(|idx| teacher_ids[idx]))
        .execute(&mut **tx)
        .await?;
    }

    Ok(seeds.len())
}
