//! User Service Library
//!
//! This crate provides an in-memory user registry: a `UserRepository` trait
//! with one in-memory implementation, and a small use-case layer on top.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use common::AppResult;
use domain::User;

use crate::config::UserServiceConfig;
use crate::repository::UserDbInMem;
use crate::service::{UserManager, UserService};

/// Names and ages seeded by the demo command.
pub const DEMO_USERS: &[(&str, i32)] = &[("Cora", 8), ("Mika", 12), ("Tashi", 11)];

/// Build a user manager backed by a fresh in-memory store.
pub fn build_manager(config: &UserServiceConfig) -> UserManager {
    let repo = Arc::new(UserDbInMem::with_capacity(config.store.initial_capacity));
    UserManager::new(repo)
}

/// Outcome of a demo run.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    /// Users as loaded back from the store, in seeding order
    pub users: Vec<User>,
    /// Random id that was probed
    pub missing_id: Uuid,
    /// Whether the probed id was found
    pub missing_found: bool,
}

/// Register the demo users, read each one back by id and probe an unknown id.
pub fn run_demo(service: &dyn UserService) -> AppResult<DemoReport> {
    let registered: Vec<User> = DEMO_USERS
        .iter()
        .map(|(name, age)| service.register(name.to_string(), *age))
        .collect();

    let users = registered
        .iter()
        .map(|user| service.get_user(user.id()))
        .collect::<AppResult<Vec<_>>>()?;

    let missing_id = Uuid::new_v4();
    let missing_found = service.find_user(missing_id).is_some();
    info!(user_id = %missing_id, found = missing_found, "Probed unknown id");

    Ok(DemoReport {
        users,
        missing_id,
        missing_found,
    })
}

/// Render users as one `Display` line each, or as a JSON array.
pub fn render_users(users: &[User], json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(users)?);
    }

    Ok(users
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Render a demo run: the loaded users followed by the probed id, or the whole report as JSON.
pub fn render_report(report: &DemoReport, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let probe = if report.missing_found {
        "<present>"
    } else {
        "<absent>"
    };

    Ok(format!(
        "{}\n{} = {}",
        render_users(&report.users, false)?,
        report.missing_id,
        probe
    ))
}
