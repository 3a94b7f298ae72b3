use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use gradebook_cli::seeder::{self, SeedConfig};
use gradebook_db::{init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "gradebook-cli")]
#[command(about = "Gradebook CLI - Database tools for Gradebook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Seed the database with demo principals, teachers, students and assignments
    Seed {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "4")]
        students: usize,

        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "2")]
        teachers: usize,

        /// Number of principals to create
        #[arg(short = 'p', long, default_value = "1")]
        principals: usize,
    },
    /// Clear all seeded data
    ClearSeed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let pool = init_db_pool().await?;

    match cli.command {
        Commands::Migrate => {
            run_migrations(&pool).await?;
            println!("✅ Migrations applied");
        }
        Commands::Seed {
            students,
            teachers,
            principals,
        } => {
            let config = SeedConfig {
                students,
                teachers,
                principals,
            };
            seeder::seed_all(&pool, &config).await?;
        }
        Commands::ClearSeed => seeder::clear_all(&pool).await?,
    }

    Ok(())
}
