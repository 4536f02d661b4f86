//! User CLI commands: card, duplicate, create.

use std::time::Duration;

use anyhow::{Result, bail};
use console::style;

use rolodex_core::repository::user::UserStore;
use rolodex_types::user::User;

use crate::state::AppState;

/// How often `create` checks whether the user has landed in the store.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Print a user's business card.
pub async fn business_card(state: &AppState, id: &str, json: bool) -> Result<()> {
    let card = state.directory.make_business_card(id).await?;

    if json {
        println!("{}", serde_json::json!({ "id": id, "card": card }));
    } else {
        println!("{card}");
    }
    Ok(())
}

/// Duplicate a user and print the new id.
pub async fn duplicate_user(state: &AppState, id: &str, json: bool) -> Result<()> {
    let new_id = state.directory.duplicate_user(id).await?;

    if json {
        println!("{}", serde_json::json!({ "source_id": id, "id": new_id }));
    } else {
        println!(
            "{} Duplicated {} as {}",
            style("✓").green().bold(),
            style(id).cyan(),
            style(&new_id).cyan().bold()
        );
    }
    Ok(())
}

/// Schedule a background creation, then wait for the user to become visible.
///
/// Creation itself never reports failure, so the only signal available is
/// whether the record shows up in the store before `wait_secs` runs out.
pub async fn create_user(
    state: &AppState,
    id: String,
    name: String,
    phone: String,
    wait_secs: u64,
    json: bool,
) -> Result<()> {
    let user = User::new(id, name, phone);
    state.directory.create_user(user.clone())?;

    let store = state.directory.store();
    let visible = tokio::time::timeout(Duration::from_secs(wait_secs), async {
        loop {
            if let Ok(found) = store.find_user(&user.id).await {
                return found;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    })
    .await;

    let Ok(found) = visible else {
        bail!(
            "user '{}' not visible after {wait_secs}s; creation is still retrying every {}s",
            user.id,
            state.config.retry_delay_secs
        );
    };

    if json {
        println!("{}", serde_json::to_string(&found)?);
    } else {
        println!(
            "{} Created {} ({})",
            style("✓").green().bold(),
            style(&found.id).cyan().bold(),
            found.name
        );
    }
    Ok(())
}
