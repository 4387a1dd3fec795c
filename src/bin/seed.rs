use barangay::{
    domain::NewAnnouncement,
    repository::{AnnouncementRepository, SqliteAnnouncementRepository},
};
use chrono::{Duration, Utc};
use clap::Parser;
use fake::{faker::lorem::en::Sentence, Fake};
use sqlx::sqlite::SqlitePoolOptions;

/// Fill a database with sample announcements
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://barangay.db?mode=rwc")]
    database_url: String,

    /// Generated announcements to add on top of the fixed samples
    #[arg(long, default_value_t = 5)]
    count: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("🌱 Starting database seeding...");

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&args.database_url)
        .await?;

    // Run migrations first
    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await?;

    let announcement_repo = SqliteAnnouncementRepository::new(db_pool.clone());

    println!("📢 Creating announcements...");

    let samples = [
        NewAnnouncement {
            title: "Road Closure".to_string(),
            description: "Main St closed for repairs".to_string(),
            date: Utc::now() + Duration::days(3),
            link: Some("https://example.com".to_string()),
        },
        NewAnnouncement {
            title: "Free Medical Mission".to_string(),
            description: "Check-ups and vaccinations at the barangay hall, 8AM to 3PM.".to_string(),
            date: Utc::now() - Duration::days(2),
            link: None,
        },
        NewAnnouncement {
            title: "Clean-up Drive".to_string(),
            description: "Join the monthly coastal clean-up. Gloves and sacks provided.".to_string(),
            date: Utc::now() - Duration::days(10),
            link: None,
        },
    ];

    for sample in samples {
        announcement_repo.create(sample).await?;
    }

    for day in 0..args.count {
        let title: String = Sentence(3..6).fake();
        let description: String = Sentence(10..20).fake();

        announcement_repo.create(NewAnnouncement {
            title: title.trim_end_matches('.').to_string(),
            description,
            date: Utc::now() - Duration::days(day as i64 + 14),
            link: None,
        }).await?;
    }

    println!("  ✅ Created {} announcements", 3 + args.count);
    println!("\n✨ Database seeding complete!");

    Ok(())
}
