use clap::{Parser, Subcommand};
use skillpath::model::entity::{
    Course, CourseCreate, CourseModule, CourseModuleCreate, Enrollment, Lesson, LessonCreate,
};
use skillpath::model::{CrudRepository, DatabaseError, DbConnection, ModelManager};
use skillpath::web::AuthenticatedUser;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for seeding the course catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Manage modules
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },

    /// Manage enrollments
    Enrollment {
        #[command(subcommand)]
        action: EnrollmentCommands,
    },
}

/// Course management
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        #[arg(long)]
        title: String,
    },
}

/// Module management
#[derive(Subcommand, Debug)]
pub enum ModuleCommands {
    Add {
        /// Course title to attach the module to
        #[arg(long)]
        course_title: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
        #[arg(long, default_value_t = false)]
        has_certificate: bool,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        /// Module title to attach the lesson to
        #[arg(long)]
        module_title: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
        #[arg(long, default_value_t = true)]
        required: bool,
        #[arg(long, default_value_t = 0)]
        duration_minutes: i32,
    },
}

/// Enrollment management
#[derive(Subcommand, Debug)]
pub enum EnrollmentCommands {
    Add {
        #[arg(long)]
        student_id: uuid::Uuid,
        /// Course title to enroll the student into
        #[arg(long)]
        course_title: String,
    },
}

#[tokio::main]
async fn main() -> skillpath::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let db_con = DbConnection::connect(&std::env::var("DATABASE_URL").unwrap())?;
    let mm = ModelManager::new(db_con);
    let actor = AuthenticatedUser::admin();

    match args.command {
        Commands::Course { action } => match action {
            CourseCommands::Add { title } => {
                let course = Course::create(&mm, &actor, CourseCreate { title }).await?;
                println!("Course created: {:?}", course);
            }
        },

        Commands::Module { action } => match action {
            ModuleCommands::Add { course_title, title, order_index, has_certificate } => {
                let course_id: uuid::Uuid =
                    sqlx::query_scalar("SELECT id FROM courses WHERE title = $1")
                        .bind(&course_title)
                        .fetch_one(mm.executor())
                        .await
                        .map_err(DatabaseError::SqlxError)?;

                let module = CourseModule::create(
                    &mm,
                    &actor,
                    CourseModuleCreate {
                        course_id,
                        title,
                        order_index: Some(order_index),
                        has_certificate: Some(has_certificate),
                    },
                )
                .await?;
                println!("Module created: {:?}", module);
            }
        },

        Commands::Lesson { action } => match action {
            LessonCommands::Add { module_title, title, order_index, required, duration_minutes } => {
                let module_id: uuid::Uuid =
                    sqlx::query_scalar("SELECT id FROM modules WHERE title = $1")
                        .bind(&module_title)
                        .fetch_one(mm.executor())
                        .await
                        .map_err(DatabaseError::SqlxError)?;

                let lesson = Lesson::create(
                    &mm,
                    &actor,
                    LessonCreate {
                        module_id,
                        title,
                        order_index: Some(order_index),
                        is_required: Some(required),
                        duration_minutes: Some(duration_minutes),
                    },
                )
                .await?;
                println!("Lesson created: {:?}", lesson);
            }
        },

        Commands::Enrollment { action } => match action {
            EnrollmentCommands::Add { student_id, course_title } => {
                let course_id: uuid::Uuid =
                    sqlx::query_scalar("SELECT id FROM courses WHERE title = $1")
                        .bind(&course_title)
                        .fetch_one(mm.executor())
                        .await
                        .map_err(DatabaseError::SqlxError)?;

                let enrollment = Enrollment::create(&mm, student_id, course_id).await?;
                println!("Enrollment created: {:?}", enrollment);
            }
        },
    }

    Ok(())
}
