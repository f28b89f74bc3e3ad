mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use skillpath::api::{Credentials, HttpApi, Registration};
use skillpath::config::AppConfig;
use skillpath::effects::{EffectError, Effects};
use skillpath::model::{NoteDraft, ProfileUpdate, Secret};
use skillpath::navigation::NavigationGate;
use skillpath::persist::{FileStorage, PersistConfig, PersistenceGateway};
use skillpath::slices::notes::NoteEntry;
use skillpath::store::{RootState, Store};

use crate::cli::{Cli, Commands, NotesCommands, ProfileCommands};

#[tokio::main]
async fn main() -> Result<()> {
    skillpath::logging::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    let storage = FileStorage::open(config.storage_dir())
        .context("Failed to open session storage")?;
    let store = Store::new();
    let gateway = PersistenceGateway::start(
        &store,
        Arc::new(storage),
        PersistConfig::from(&config.persist),
    )
    .await;
    let api = HttpApi::new(&config.api).context("Failed to build HTTP client")?;
    let effects = Effects::new(store.clone(), Arc::new(api));

    let outcome = run(cli.command, &effects, &gateway).await;
    gateway.shutdown().await;
    outcome
}

async fn run(
    command: Commands,
    effects: &Effects<HttpApi>,
    gateway: &PersistenceGateway,
) -> Result<()> {
    let store = effects.store();
    match command {
        Commands::Login { email, password } => {
            let user = effects
                .login(Credentials {
                    email,
                    password: Secret::new(password),
                })
                .await
                .map_err(describe)?;
            println!("Signed in as {} <{}>", user.name, user.email);
        }
        Commands::Signup {
            name,
            email,
            password,
        } => {
            let user = effects
                .signup(Registration {
                    name,
                    email,
                    password: Secret::new(password),
                })
                .await
                .map_err(describe)?;
            println!("Welcome, {}", user.name);
        }
        Commands::Logout => {
            effects.logout();
            gateway.purge().await;
            println!("Signed out");
        }
        Commands::Refresh => {
            effects.refresh_session().await.map_err(describe)?;
            println!("Session refreshed");
        }
        Commands::Status => print_status(store),
        Commands::Profile { command } => match command {
            ProfileCommands::Show => {
                let profile = effects.fetch_profile().await.map_err(describe)?;
                println!("{} <{}>", profile.name, profile.email);
                if !profile.description.is_empty() {
                    println!("{}", profile.description);
                }
            }
            ProfileCommands::Update {
                name,
                description,
                password,
            } => {
                let profile = effects
                    .update_profile(ProfileUpdate {
                        name,
                        description,
                        password: password.map(Secret::new),
                    })
                    .await
                    .map_err(describe)?;
                println!("Updated profile of {}", profile.name);
            }
        },
        Commands::Domains => {
            for domain in effects.fetch_domains().await.map_err(describe)? {
                println!("{} ({} courses)", domain.name, domain.courses.len());
                for course in &domain.courses {
                    println!("  [{}] {}", course.id, course.title);
                }
            }
        }
        Commands::Course { id } => {
            let details = effects.fetch_course_details(id).await.map_err(describe)?;
            println!(
                "{}: {} chapters, {} topics",
                details.title,
                details.chapter_count(),
                details.sub_topic_count()
            );
            for chapter in &details.chapters {
                println!("  {}", chapter.title);
                for topic in &chapter.sub_topics {
                    println!("    - {}", topic.title);
                }
            }
            for announcement in &details.announcements {
                println!("! {}", announcement.title);
            }
        }
        Commands::Notes { command } => match command {
            NotesCommands::List => {
                effects.list_notes().await.map_err(describe)?;
                print_notes(&store.state());
            }
            NotesCommands::Add { title, content } => {
                let note = effects
                    .create_note(NoteDraft::new(title, content))
                    .await
                    .map_err(describe)?;
                println!("Created note {}", note.id);
            }
            NotesCommands::Edit { id, title, content } => {
                effects
                    .update_note(id, NoteDraft::new(title, content))
                    .await
                    .map_err(describe)?;
                println!("Updated note {}", id);
            }
            NotesCommands::Rm { id } => {
                effects.delete_note(id).await.map_err(describe)?;
                println!("Deleted note {}", id);
            }
        },
    }
    Ok(())
}

/// Surface request failures with the same message the slice carries.
fn describe(error: EffectError) -> anyhow::Error {
    match error {
        EffectError::Validation(e) => anyhow::anyhow!(e),
        EffectError::Request(e) => anyhow::anyhow!(e.user_message()),
    }
}

fn print_status(store: &Store) {
    let gate = NavigationGate::attach(store);
    let state = store.state();
    println!("route: {:?}", gate.current());
    match &state.auth.user {
        Some(user) if state.auth.has_session() => {
            println!("signed in as {} <{}>", user.name, user.email)
        }
        _ => println!("not signed in"),
    }
    if let Some(error) = state.auth.error() {
        println!("last error: {}", error);
    }
    gate.detach();
}

fn print_notes(state: &RootState) {
    for entry in state.notes.visible() {
        match entry {
            NoteEntry::Confirmed(note) => println!("[{}] {}", note.id, note.title),
            NoteEntry::Pending { draft, .. } => println!("[pending] {}", draft.title),
        }
    }
}
