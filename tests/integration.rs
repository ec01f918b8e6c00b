//! Live tests against the public Hub API.
//!
//! These need network access and a token, so they are ignored by default.
//! Set `HUB_API_TOKEN` (and optionally `HUB_API_BASE_URL`) and run with:
//!
//! ```bash
//! cargo test --test integration -- --ignored --nocapture
//! ```

use hfhub_client::HubClient;

fn client() -> Option<HubClient> {
    match HubClient::from_env() {
        Ok(client) => Some(client),
        Err(e) => {
            println!("Skipping live test ({e})");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// 1. Models
// ---------------------------------------------------------------------------

#[test]
#[ignore = "requires network access and HUB_API_TOKEN"]
fn test_list_models() {
    let Some(client) = client() else { return };
    let models = client.search().models().unwrap();
    assert!(!models.is_empty(), "Expected at least one model");
    println!("[1] Found {} models", models.len());
    for m in models.iter().take(3) {
        println!("  - {} (likes: {}, gated: {:?})", m.id, m.likes, m.gated.value());
    }

    let detail = client.search().model(&models[0].id).unwrap();
    println!("  - First model has {} files", detail.siblings.len());
}

// ---------------------------------------------------------------------------
// 2. Datasets and spaces
// ---------------------------------------------------------------------------

#[test]
#[ignore = "requires network access and HUB_API_TOKEN"]
fn test_list_datasets_and_spaces() {
    let Some(client) = client() else { return };
    let datasets = client.search().datasets().unwrap();
    println!("[2] Found {} datasets", datasets.len());

    let spaces = client.search().spaces().unwrap();
    println!("[2] Found {} spaces", spaces.len());
    if let Some(space) = spaces.first() {
        let detail = client.search().space(&space.id).unwrap();
        println!("  - {} uses sdk {:?}", detail.id, detail.sdk);
    }
}

// ---------------------------------------------------------------------------
// 3. Collections
// ---------------------------------------------------------------------------

#[test]
#[ignore = "requires network access and HUB_API_TOKEN"]
fn test_list_collections() {
    let Some(client) = client() else { return };
    let collections = client.collections().list().unwrap();
    println!("[3] Found {} collections", collections.len());
    for c in collections.iter().take(3) {
        println!("  - {} ({} items)", c.title, c.items.len());
    }
}

// ---------------------------------------------------------------------------
// 4. Token owner
// ---------------------------------------------------------------------------

#[test]
#[ignore = "requires network access and HUB_API_TOKEN"]
fn test_whoami() {
    let Some(client) = client() else { return };
    let me = client.users().whoami().unwrap();
    println!("[4] Token belongs to {} ({})", me.name, me.user_type);
}
