use serde::{Deserialize, Serialize};

use crate::polymorphic::{DataFileEntry, Gated, OneOrMany, SpecialToken};

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gating: bool,
    pub last_updated: String,
    pub owner: CollectionOwner,
    #[serde(default)]
    pub items: Vec<CollectionItem>,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub is_upvoted_by_user: bool,
}

/// One entry of a collection. Items can be models, datasets, spaces or
/// papers, so most fields are only present for some item types.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    #[serde(rename = "_id")]
    pub object_id: String,
    pub position: i64,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(rename = "id")]
    pub item_id: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_data: Option<CollectionOwner>,
    #[serde(default)]
    pub downloads: i64,
    #[serde(default)]
    pub gated: Gated,
    #[serde(default)]
    pub inference: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub repo_type: Option<String>,
    #[serde(default)]
    pub is_liked_by_user: bool,
    #[serde(default, rename = "pipeline_tag")]
    pub pipeline_tag: Option<String>,
    #[serde(default)]
    pub widget_output_urls: Vec<serde_json::Value>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub note: Option<ItemNote>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub is_upvoted_by_user: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemNote {
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionOwner {
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub fullname: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub owner_type: String,
    #[serde(rename = "isHf", default)]
    pub is_hf: bool,
    #[serde(default)]
    pub is_mod: bool,
    #[serde(default)]
    pub is_enterprise: bool,
    #[serde(default)]
    pub follower_count: i64,
    #[serde(rename = "_id", default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub is_pro: bool,
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id", default)]
    pub object_id: String,
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub gated: Gated,
    #[serde(default)]
    pub inference: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub trending_score: i64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub config: Option<ModelConfig>,
    #[serde(default)]
    pub downloads: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "pipeline_tag")]
    pub pipeline_tag: Option<String>,
    #[serde(default, rename = "library_name")]
    pub library_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub siblings: Vec<Sibling>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub architectures: Vec<String>,
    #[serde(default)]
    pub auto_map: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub quantization_config: Option<QuantizationConfig>,
    #[serde(default)]
    pub tokenizer_config: Option<TokenizerConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuantizationConfig {
    #[serde(default)]
    pub quant_method: Option<String>,
}

/// Special tokens of a model's tokenizer. Each token may be published as a
/// full object or as a bare string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub bos_token: Option<SpecialToken>,
    #[serde(default)]
    pub eos_token: Option<SpecialToken>,
    #[serde(default)]
    pub pad_token: Option<SpecialToken>,
    #[serde(default)]
    pub unk_token: Option<SpecialToken>,
    #[serde(default)]
    pub chat_template: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddedToken {
    #[serde(rename = "__type", default)]
    pub token_type: Option<String>,
    pub content: String,
    #[serde(default)]
    pub lstrip: bool,
    #[serde(default)]
    pub normalized: bool,
    #[serde(default)]
    pub rstrip: bool,
    #[serde(default)]
    pub single_word: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sibling {
    pub rfilename: String,
}

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(rename = "_id", default)]
    pub object_id: String,
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub card_data: Option<DatasetCardData>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub gated: Gated,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub trending_score: i64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub downloads: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// Dataset card metadata. Card authors write most list fields either as a
/// single value or as a list, so those decode into [`OneOrMany`].
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetCardData {
    #[serde(default)]
    pub license: Option<OneOrMany<String>>,
    #[serde(default)]
    pub tags: OneOrMany<String>,
    #[serde(default)]
    pub task_categories: OneOrMany<String>,
    #[serde(default)]
    pub size_categories: OneOrMany<String>,
    #[serde(default)]
    pub language: OneOrMany<String>,
    #[serde(default)]
    pub configs: Vec<DatasetConfig>,
    #[serde(default)]
    pub pretty_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub config_name: String,
    #[serde(default)]
    pub data_files: OneOrMany<DataFileEntry>,
}

/// Files of one split, given as a single path or glob or as several.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataFile {
    pub split: String,
    pub path: OneOrMany<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetTags {
    #[serde(default)]
    pub library: Vec<Library>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Library {
    pub id: String,
    #[serde(rename = "type")]
    pub library_type: String,
    pub label: String,
}

// ---------------------------------------------------------------------------
// Spaces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    #[serde(rename = "_id", default)]
    pub object_id: String,
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub card_data: Option<SpaceCardData>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub trending_score: i64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub subdomain: Option<String>,
    #[serde(default)]
    pub sdk: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub siblings: Vec<Sibling>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceCardData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub color_from: Option<String>,
    #[serde(default)]
    pub color_to: Option<String>,
    #[serde(default)]
    pub sdk: Option<String>,
    #[serde(default, rename = "sdk_version")]
    pub sdk_version: Option<String>,
    #[serde(default, rename = "app_file")]
    pub app_file: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default, rename = "short_description")]
    pub short_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: String,
    #[serde(default)]
    pub space_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "type")]
    pub user_type: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub is_pro: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub orgs: Vec<serde_json::Value>,
    #[serde(default)]
    pub auth: Option<Auth>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    #[serde(rename = "type")]
    pub auth_type: String,
    #[serde(default)]
    pub access_token: Option<AccessToken>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub display_name: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub fine_grained: Option<FineGrained>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FineGrained {
    #[serde(default)]
    pub can_read_gated_repos: bool,
    #[serde(default)]
    pub global: Vec<String>,
    #[serde(default)]
    pub scoped: Vec<Scoped>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scoped {
    pub entity: Entity,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    #[serde(rename = "_id")]
    pub object_id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Repository payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    #[default]
    Model,
    Dataset,
    Space,
}

impl RepoType {
    /// Path segment used by the repository settings endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoType::Model => "model",
            RepoType::Dataset => "dataset",
            RepoType::Space => "space",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceSdk {
    Streamlit,
    Gradio,
    Docker,
    Static,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRepositoryPayload {
    #[serde(rename = "type")]
    pub repo_type: RepoType,
    pub name: String,
    /// Organization to create the repository in; the caller's namespace when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub private: bool,
    /// Required when `repo_type` is [`RepoType::Space`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk: Option<SpaceSdk>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteRepositoryPayload {
    #[serde(rename = "type")]
    pub repo_type: RepoType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveRepositoryPayload {
    #[serde(rename = "type")]
    pub repo_type: RepoType,
    #[serde(rename = "fromRepo")]
    pub from: String,
    #[serde(rename = "toRepo")]
    pub to: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateVisibilityPayload {
    pub private: bool,
}
