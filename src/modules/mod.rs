pub mod assignments;
pub mod health;
pub mod principals;
pub mod students;
pub mod teachers;
