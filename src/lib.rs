//! Hugging Face Hub API client library for Rust.
//!
//! A blocking client for the [Hub REST API](https://huggingface.co/api).
//! Every call goes through one authenticated [`Transport`] which sends JSON,
//! treats anything but `200 OK` as an error, and decodes responses into the
//! types in [`models`].
//!
//! # Quick Start
//!
//! ```no_run
//! use hfhub_client::{ConfigOption, HubClient};
//!
//! let client = HubClient::new(
//!     "hf_xxx",
//!     [ConfigOption::base_url("https://huggingface.co/api")],
//! )
//! .unwrap();
//!
//! for model in client.search().models().unwrap().iter().take(3) {
//!     println!("{} (gated: {:?})", model.id, model.gated.value());
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod polymorphic;
pub mod transport;

// Re-export the main public types at the crate root for convenience.
pub use client::{CollectionsClient, HubClient, RepositoriesClient, SearchClient, UsersClient};
pub use config::{ClientConfig, ConfigError, ConfigOption, DEFAULT_BASE_URL};
pub use error::{HubApiError, Result};
pub use models::{
    CollectionInfo, CollectionItem, CreateRepositoryPayload, Dataset, DeleteRepositoryPayload,
    Model, MoveRepositoryPayload, RepoType, Space, SpaceSdk, UpdateVisibilityPayload, UserInfo,
};
pub use polymorphic::{BoolOrText, DataFileEntry, Gated, OneOrMany, SpecialToken};
pub use transport::Transport;
