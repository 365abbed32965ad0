use colored::*;

use samity::core::{get_subscriber, init_subscriber, AppConfig};
use samity::db::reports;
use samity::samity_app::SamityApp;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::new()?;

    let file_appender = tracing_appender::rolling::daily(
        &config.application.log_directory,
        &config.application.name,
    );
    let subscriber = get_subscriber(
        config.application.name.clone(),
        config.application.log_level.clone(),
        file_appender,
    );
    init_subscriber(subscriber).map_err(|e| anyhow::anyhow!(e))?;

    let app = SamityApp::build(&config)?;
    let summary = reports::summary(app.dataset());

    tracing::info!(
        members = summary.members,
        pending_messages = summary.pending_messages,
        "dataset loaded"
    );

    println!("{}", "-----------------------------------------".green());
    println!("🏦 {}", app.dataset().settings.name.bold());
    println!("   {}", app.dataset().settings.slogan);
    println!("   Members: {}", summary.members);
    println!("   Notices: {}", summary.notices);
    println!("   Society savings: ৳ {}", summary.society_savings);
    if summary.pending_messages > 0 {
        println!(
            "   {}",
            format!("{} message(s) waiting for a reply", summary.pending_messages).yellow()
        );
    }
    if app.session.is_admin() {
        println!("   {}", "Administrator session active".cyan());
    } else if let Some(member) = app.current_member() {
        println!(
            "   Logged in as {} (#{}), {}",
            member.name,
            member.id,
            member.performance.label()
        );
    }
    println!("{}", "-----------------------------------------".green());

    Ok(())
}
