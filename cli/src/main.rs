use clap::{Parser, Subcommand};
use lernkit::model::entity::{Lesson, LessonCreate};
use lernkit::model::{DbConnection, ModelManager};

#[derive(Parser, Debug)]
#[command(about = "CLI tool for seeding and inspecting lesson rows", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    /// Create a lesson row in the `generating` state
    Add {
        /// Free-text outline for the lesson
        #[arg(long)]
        outline: String,
        /// Optional fixed id; generated when absent
        #[arg(long)]
        id: Option<String>,
    },
    /// Print one lesson row
    Show {
        #[arg(long)]
        id: String,
    },
    /// Print the newest lesson rows
    List {
        #[arg(long, default_value_t = 20)]
        limit: i64,
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
}

#[tokio::main]
async fn main() -> lernkit::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let db_con = DbConnection::connect(&std::env::var("DATABASE_URL").unwrap())?;
    let mm = ModelManager::new(db_con);

    match args.command {
        Commands::Lesson { action } => match action {
            LessonCommands::Add { outline, id } => {
                let lesson = Lesson::create(&mm, LessonCreate { id, outline }).await?;
                println!("Lesson created: {:?}", lesson);
            }

            LessonCommands::Show { id } => match Lesson::find_by_id(&mm, &id).await? {
                Some(lesson) => println!("{:#?}", lesson),
                None => println!("No lesson with id {id}"),
            },

            LessonCommands::List { limit, offset } => {
                let lessons = Lesson::list(&mm, limit, offset).await?;
                let total = Lesson::count(&mm).await?;
                for lesson in &lessons {
                    println!(
                        "{}  {:<10?}  {}",
                        lesson.id(),
                        lesson.status(),
                        lesson.title().unwrap_or(lesson.outline())
                    );
                }
                println!("{} of {} rows", lessons.len(), total);
            }
        },
    }

    Ok(())
}
