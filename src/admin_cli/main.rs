use clap::{Parser, Subcommand};

use zapcrm::config::SeedDefaults;
use zapcrm::database;
use zapcrm::services::{chat_repair, seed, session_check};

/// Operational utilities for ZapCRM: demo fixtures, chat repair and
/// session diagnostics. Exits 0 on success and 1 on any top-level error.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Creates the deterministic demo tenant with users, contacts,
    /// sessions, campaigns, opportunities and activities.
    ///
    /// Singleton/unique rows are upserted; list rows are re-created on
    /// every run, so rerunning duplicates them.
    Seed,
    /// Assigns the tenant's oldest non-stopped session to every chat
    /// whose session reference was never set. Safe to rerun.
    FixChats,
    /// Prints every registered session with its status and chat count,
    /// plus the number of chats with no session at all.
    CheckSessions,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();

    let db = database::connect().await?;

    match cli.command {
        Commands::Seed => {
            println!("🌱 Seeding demo data...");
            let defaults = SeedDefaults::from_env();
            let report = seed::run(&db, &defaults).await?;
            println!("✅ Tenant '{}' ready", seed::DEMO_TENANT_SLUG);
            println!("👤 Users: {}", report.users);
            println!("🏷️  Categories: {}", report.categories);
            println!("📇 Contacts: {}", report.contacts);
            println!("🏢 Companies: {}", report.companies);
            println!("📱 Sessions: {}", report.sessions);
            println!("📣 Campaigns: {}", report.campaigns);
            println!("💼 Opportunities: {}", report.opportunities);
            println!("📋 Activities: {}", report.activities);
        }
        Commands::FixChats => {
            println!("🔧 Repairing chats without a session...");
            let summary = chat_repair::repair_unassigned_chats(&db).await?;
            println!("📊 Scanned: {}", summary.total);
            println!("✅ Updated: {}", summary.updated);
            if summary.unresolved > 0 {
                println!("⚠️  Unresolved: {}", summary.unresolved);
            } else {
                println!("🎉 All chats have a session");
            }
        }
        Commands::CheckSessions => {
            println!("🔍 Surveying WhatsApp sessions...");
            let report = session_check::survey(&db).await?;
            if report.sessions.is_empty() {
                println!("⚠️  No sessions registered");
            }
            for s in &report.sessions {
                println!(
                    "📱 [{}] {} — {:?} via {:?}, {} chat(s)",
                    s.tenant_slug, s.name, s.status, s.provider, s.chats
                );
            }
            println!("👻 Chats without a session: {}", report.orphan_chats);
        }
    }

    Ok(())
}
