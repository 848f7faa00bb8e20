use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::accounts::AccountManager;
use crate::inventory;
use crate::models::notification::AlertStatus;
use crate::models::olt::{OltRecord, OltStatus};
use crate::models::user::{Role, User};
use crate::models::Validatable;
use crate::notify::{draft, export, AlertInput, AlertManager};
use crate::paths;
use crate::storage::{BackupWriter, RecordStore};

/// Fiber NOC Control - CLI for the operations record store
#[derive(Parser)]
#[command(name = "fiberctl")]
#[command(about = "A lightweight fiber-network operations tool")]
#[command(long_about = "Fiber NOC Control - Manage OLT inventory, outage alerts and operator accounts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with an operator email
    Login { email: String },
    /// List the OLT inventory
    ListOlts {
        /// Filter by OLT code, master, region or responsible person
        #[arg(long)]
        search: Option<String>,
        /// Apply this operator's region scope to the listing
        #[arg(long)]
        email: Option<String>,
    },
    /// Add a single OLT record
    AddOlt {
        #[arg(long)]
        vendor: String,
        #[arg(long)]
        pod: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        master: String,
        #[arg(long)]
        person: String,
        #[arg(long)]
        region: String,
    },
    /// Bulk-import OLT records from a CSV file
    ImportOlts {
        file: String,
        /// Importing operator; region scope gates out-of-region rows
        #[arg(long)]
        email: String,
    },
    /// Print the CSV import template
    Template,
    /// List outage notifications
    ListAlerts,
    /// Broadcast a new outage alert
    CreateAlert {
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 0)]
        masters_down: u32,
        #[arg(long, default_value = "")]
        affected_masters: String,
        #[arg(long, default_value_t = 0)]
        olts_down: u32,
        #[arg(long, default_value = "")]
        down_olts: String,
        #[arg(long, default_value_t = 0)]
        impacted_customers: u32,
        #[arg(long, default_value = "")]
        reason: String,
        #[arg(long, default_value = "")]
        eta: String,
        /// Initial workflow status: warning, running or completed
        #[arg(long)]
        status: Option<String>,
        /// Acting operator
        #[arg(long)]
        email: String,
    },
    /// Edit an alert and update its workflow status
    UpdateAlert {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 0)]
        masters_down: u32,
        #[arg(long, default_value = "")]
        affected_masters: String,
        #[arg(long, default_value_t = 0)]
        olts_down: u32,
        #[arg(long, default_value = "")]
        down_olts: String,
        #[arg(long, default_value_t = 0)]
        impacted_customers: u32,
        #[arg(long, default_value = "")]
        reason: String,
        #[arg(long, default_value = "")]
        eta: String,
        /// New workflow status: warning, running or completed
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an alert
    DeleteAlert { id: String },
    /// Export the notification log as CSV
    ExportLog { file: String },
    /// Draft a customer-facing outage message
    DraftMessage {
        #[arg(long)]
        reason: String,
        #[arg(long)]
        area: String,
        #[arg(long, default_value = "Unknown")]
        eta: String,
    },
    /// List operator accounts
    ListUsers,
    /// Create an operator account
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// user, admin or super-admin
        #[arg(long, default_value = "user")]
        role: String,
        #[arg(long, default_value = "All")]
        region: String,
    },
    /// Remove an operator account
    DeleteUser {
        id: String,
        /// Acting operator (self-deletion is refused)
        #[arg(long)]
        email: String,
    },
    /// Write a full JSON backup of all collections
    Backup { file: Option<String> },
    /// Show record counts per collection
    Stats,
    /// Destroy all collections and reseed the defaults
    Reset {
        /// Required confirmation flag
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let store = RecordStore::open(paths::data_dir()?)?;

    match cli.command {
        Commands::Login { email } => login(&store, &email),
        Commands::ListOlts { search, email } => list_olts(&store, search, email),
        Commands::AddOlt {
            vendor,
            pod,
            code,
            master,
            person,
            region,
        } => add_olt(&store, vendor, pod, code, master, person, region),
        Commands::ImportOlts { file, email } => import_olts(&store, &file, &email),
        Commands::Template => {
            print!("{}", inventory::CSV_TEMPLATE);
            Ok(())
        }
        Commands::ListAlerts => list_alerts(&store),
        Commands::CreateAlert {
            title,
            masters_down,
            affected_masters,
            olts_down,
            down_olts,
            impacted_customers,
            reason,
            eta,
            status,
            email,
        } => create_alert(
            &store,
            AlertInput {
                title,
                masters_down_count: masters_down,
                affected_masters,
                olts_down_count: olts_down,
                down_olts,
                impacted_customers,
                reason,
                estimated_time: eta,
                status: status.as_deref().map(parse_status).transpose()?,
            },
            &email,
        ),
        Commands::UpdateAlert {
            id,
            title,
            masters_down,
            affected_masters,
            olts_down,
            down_olts,
            impacted_customers,
            reason,
            eta,
            status,
        } => update_alert(
            &store,
            &id,
            AlertInput {
                title,
                masters_down_count: masters_down,
                affected_masters,
                olts_down_count: olts_down,
                down_olts,
                impacted_customers,
                reason,
                estimated_time: eta,
                status: status.as_deref().map(parse_status).transpose()?,
            },
        ),
        Commands::DeleteAlert { id } => delete_alert(&store, &id),
        Commands::ExportLog { file } => export_log(&store, &file),
        Commands::DraftMessage { reason, area, eta } => {
            let message = draft::draft_outage_message(&reason, &area, &eta).await;
            println!("{}", message);
            Ok(())
        }
        Commands::ListUsers => list_users(&store),
        Commands::AddUser {
            name,
            email,
            role,
            region,
        } => add_user(&store, name, email, &role, region),
        Commands::DeleteUser { id, email } => delete_user(&store, &id, &email),
        Commands::Backup { file } => backup(&store, file),
        Commands::Stats => stats(&store),
        Commands::Reset { yes } => reset(&store, yes),
    }
}

fn parse_status(value: &str) -> Result<AlertStatus> {
    match value.to_lowercase().as_str() {
        "warning" => Ok(AlertStatus::Warning),
        "running" => Ok(AlertStatus::Running),
        "completed" => Ok(AlertStatus::Completed),
        other => Err(anyhow::anyhow!(
            "Unknown status '{}': expected warning, running or completed",
            other
        )),
    }
}

fn parse_role(value: &str) -> Result<Role> {
    match value.to_lowercase().as_str() {
        "user" => Ok(Role::User),
        "admin" => Ok(Role::Admin),
        "super-admin" | "super_admin" => Ok(Role::SuperAdmin),
        other => Err(anyhow::anyhow!(
            "Unknown role '{}': expected user, admin or super-admin",
            other
        )),
    }
}

fn require_login(store: &RecordStore, email: &str) -> Result<User> {
    match AccountManager::new(store).authenticate(email)? {
        Some(user) => Ok(user),
        None => Err(anyhow::anyhow!("Invalid email or account inactive: {}", email)),
    }
}

fn login(store: &RecordStore, email: &str) -> Result<()> {
    match AccountManager::new(store).authenticate(email)? {
        Some(user) => {
            println!("✅ Logged in as {} ({})", user.name, user.role.as_str());
            println!("   🌍 Region scope: {}", user.region);
        }
        None => println!("❌ Invalid email or account inactive."),
    }
    Ok(())
}

fn list_olts(store: &RecordStore, search: Option<String>, email: Option<String>) -> Result<()> {
    let mut olts = store.get_olts();

    if let Some(email) = email {
        let user = require_login(store, &email)?;
        if user.is_region_restricted() {
            println!("🌍 Region scope: {}", user.region);
        }
        olts = crate::inventory::catalog::visible_to(olts, &user);
    }
    if let Some(term) = search {
        olts = crate::inventory::catalog::search(olts, &term);
    }

    if olts.is_empty() {
        println!("📭 No OLT records found");
        return Ok(());
    }

    println!("📋 {} OLT record(s):", olts.len());
    for olt in &olts {
        println!(
            "  📦 {} [{}] - {} / {} ({}), responsible: {}",
            olt.olt_code,
            olt.status.as_str(),
            olt.master_name,
            olt.pod_name,
            olt.region,
            olt.responsible_person
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn add_olt(
    store: &RecordStore,
    vendor: String,
    pod: String,
    code: String,
    master: String,
    person: String,
    region: String,
) -> Result<()> {
    let olt = OltRecord::new(vendor, pod, code, master, person, region, OltStatus::Active);

    if let Err(errors) = olt.validate() {
        println!("❌ Record is invalid:");
        for e in errors {
            println!("   📝 {}", e);
        }
        return Ok(());
    }

    let list = store.save_olt(olt.clone())?;
    println!("✅ Added OLT {} ({} records total)", olt.olt_code, list.len());
    Ok(())
}

fn import_olts(store: &RecordStore, file: &str, email: &str) -> Result<()> {
    let importer = require_login(store, email)?;
    let text = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file, e))?;

    let outcome = inventory::import_csv(store, &text, &importer)?;

    if outcome.accepted() > 0 {
        println!("✅ Successfully imported {} records from CSV.", outcome.accepted());
    } else {
        println!("❌ No valid records found or CSV format is incorrect.");
        println!("   Expected format: Vendor, POD Name, OLT Code, Master Name, Responsible Person, Region");
    }
    if outcome.skipped_region > 0 {
        println!(
            "⚠️  Skipped {} row(s) outside your region scope ({})",
            outcome.skipped_region, importer.region
        );
    }
    if outcome.skipped_malformed > 0 {
        println!("⚠️  Skipped {} malformed row(s)", outcome.skipped_malformed);
    }
    Ok(())
}

fn list_alerts(store: &RecordStore) -> Result<()> {
    let notifications = store.get_notifications();

    if notifications.is_empty() {
        println!("📭 No active notifications. Everything is running smoothly.");
        return Ok(());
    }

    println!("🔔 {} notification(s):", notifications.len());
    for n in &notifications {
        let icon = match n.status {
            AlertStatus::Warning => "🔴",
            AlertStatus::Running => "🟡",
            AlertStatus::Completed => "🟢",
        };
        println!("\n{} {} [{}] - {}", icon, n.id, n.status.display_label(), n.title);
        println!("   📅 Down since: {}", n.alert_time.format("%Y-%m-%d %H:%M:%S"));
        if let Some(t) = n.maintenance_start_time {
            println!("   🔧 Maintenance started: {}", t.format("%Y-%m-%d %H:%M:%S"));
        }
        match n.resolved_time {
            Some(t) => println!("   ✅ Resolved: {}", t.format("%Y-%m-%d %H:%M:%S")),
            None => println!("   ⏳ Estimated resolution: {}", n.estimated_time),
        }
        println!(
            "   📉 {} master(s), {} OLT(s) down, {} customers impacted",
            n.masters_down_count, n.olts_down_count, n.impacted_customers
        );
        if !n.notified_persons.is_empty() {
            println!("   📨 Alert sent to: {}", n.notified_persons.join(", "));
        }
    }
    Ok(())
}

fn create_alert(store: &RecordStore, input: AlertInput, email: &str) -> Result<()> {
    let user = require_login(store, email)?;
    if !user.permissions.can_create_notifications {
        println!("❌ {} is not allowed to broadcast alerts", user.name);
        return Ok(());
    }

    let manager = AlertManager::new(store);
    let created = manager.create(input, &user.name)?;

    println!("✅ Alert {} broadcast with status {}", created.id, created.status.as_str());
    if created.notified_persons.is_empty() {
        println!("📭 No responsible staff matched the down OLT list");
    } else {
        println!("📨 Notifications sent to: {}", created.notified_persons.join(", "));
    }
    Ok(())
}

fn update_alert(store: &RecordStore, id: &str, input: AlertInput) -> Result<()> {
    let manager = AlertManager::new(store);

    match manager.update(id, input)? {
        Some(updated) => {
            println!("✅ Alert {} updated to {}", updated.id, updated.status.as_str());
            if let Some(t) = updated.maintenance_start_time {
                println!("   🔧 Maintenance started: {}", t.format("%Y-%m-%d %H:%M:%S"));
            }
            if let Some(t) = updated.resolved_time {
                println!("   ✅ Resolved: {}", t.format("%Y-%m-%d %H:%M:%S"));
            }
        }
        None => println!("❌ Notification '{}' not found", id),
    }
    Ok(())
}

fn delete_alert(store: &RecordStore, id: &str) -> Result<()> {
    let remaining = AlertManager::new(store).delete(id)?;
    println!("🗑️  Deleted. {} notification(s) remain", remaining.len());
    Ok(())
}

fn export_log(store: &RecordStore, file: &str) -> Result<()> {
    let notifications = store.get_notifications();
    export::write_log_csv(file, &notifications)?;
    println!("💾 Exported {} notification(s) to {}", notifications.len(), file);
    Ok(())
}

fn list_users(store: &RecordStore) -> Result<()> {
    let users = store.get_users();

    println!("👥 {} account(s):", users.len());
    for user in &users {
        let status = if user.active { "🟢 active" } else { "🔴 inactive" };
        println!(
            "  {} {} <{}> [{}] region: {} (last login: {})",
            status, user.name, user.email, user.role.as_str(), user.region, user.last_login
        );
    }
    Ok(())
}

fn add_user(store: &RecordStore, name: String, email: String, role: &str, region: String) -> Result<()> {
    let role = parse_role(role)?;
    let accounts = AccountManager::new(store);

    let candidate = User::new(name.clone(), email.clone(), role, region.clone());
    if let Err(errors) = candidate.validate() {
        println!("❌ Account is invalid:");
        for e in errors {
            println!("   📝 {}", e);
        }
        return Ok(());
    }

    let user = accounts.create_user(name, email, role, region)?;
    println!("✅ Created {} account {} ({})", user.role.as_str(), user.name, user.id);
    Ok(())
}

fn delete_user(store: &RecordStore, id: &str, email: &str) -> Result<()> {
    let actor = require_login(store, email)?;
    if !actor.permissions.can_manage_users {
        println!("❌ {} is not allowed to manage accounts", actor.name);
        return Ok(());
    }

    let remaining = AccountManager::new(store).delete_user(id, &actor.id)?;
    println!("🗑️  Deleted. {} account(s) remain", remaining.len());
    Ok(())
}

fn backup(store: &RecordStore, file: Option<String>) -> Result<()> {
    let target = file.unwrap_or_else(BackupWriter::default_filename);
    let written = BackupWriter::new(store).write_to(&target)?;
    println!("💾 Backup written to {}", written.display());
    Ok(())
}

fn stats(store: &RecordStore) -> Result<()> {
    let stats = store.stats();
    println!("📊 Store status ({})", store.data_dir().display());
    println!("   👥 Users: {}", stats.users);
    println!("   📦 OLT records: {}", stats.olts);
    println!("   🔔 Notifications: {}", stats.notifications);
    Ok(())
}

fn reset(store: &RecordStore, yes: bool) -> Result<()> {
    if !yes {
        println!("⚠️  This destroys all collections and reseeds the defaults.");
        println!("   Re-run with --yes to confirm.");
        return Ok(());
    }

    store.reset()?;
    println!("✅ Store reset to factory defaults");
    Ok(())
}
