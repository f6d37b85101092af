#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gompa_core::{Session, UserAccount, UserRole};

/// Session seeded from the command line, read once by the root component
static INITIAL_SESSION: OnceLock<Session> = OnceLock::new();

/// The session the app starts with (guest unless --user was given).
pub fn initial_session() -> Session {
    INITIAL_SESSION.get().cloned().unwrap_or_else(Session::guest)
}

/// Sikkim Monasteries - monastery experience platform
#[derive(Parser, Debug)]
#[command(name = "gompa-desktop")]
#[command(about = "Sikkim Monasteries - explore, festivals, and community")]
struct Args {
    /// Start signed in as this visitor (stands in for the session owner)
    #[arg(short, long)]
    user: Option<String>,

    /// Email for the seeded account (defaults to <user>@example.com)
    #[arg(short, long)]
    email: Option<String>,

    /// Give the seeded account the admin role
    #[arg(long)]
    admin: bool,

    /// Start with a maximized window
    #[arg(long)]
    maximized: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let session = match args.user {
        Some(name) => {
            let email = args.email.unwrap_or_else(|| {
                format!("{}@example.com", name.to_lowercase().replace(' ', "."))
            });
            let role = if args.admin { UserRole::Admin } else { UserRole::User };
            tracing::info!(user = %name, admin = args.admin, "Starting with seeded session");
            Session::signed_in(UserAccount { name, email, role })
        }
        None => {
            tracing::info!("Starting with guest session");
            Session::guest()
        }
    };

    let _ = INITIAL_SESSION.set(session);

    // Wide window: the explorer and community grids want the room
    let window = WindowBuilder::new()
        .with_title("Sikkim Monasteries")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
        .with_maximized(args.maximized)
        .with_resizable(true);

    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
