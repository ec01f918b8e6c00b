use crate::config::{ClientConfig, ConfigOption};
use crate::error::{OperationContext, Result};
use crate::models::*;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// Public client
// ---------------------------------------------------------------------------

/// Main entry point for interacting with the Hub API.
///
/// ```no_run
/// use hfhub_client::HubClient;
///
/// let client = HubClient::new("hf_xxx", []).unwrap();
/// let me = client.users().whoami().unwrap();
/// println!("logged in as {}", me.name);
/// ```
#[derive(Debug, Clone)]
pub struct HubClient {
    base: Transport,
}

impl HubClient {
    /// Create a new client.
    ///
    /// * `credential` – bearer token sent with every request
    /// * `options`    – overrides applied in order, see [`ConfigOption`]
    pub fn new<I>(credential: &str, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        Self::from_config(ClientConfig::resolve(credential, options)?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            base: Transport::new(config)?,
        })
    }

    /// Create a client from `HUB_API_TOKEN` and the optional `HUB_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// The underlying transport, for endpoints without a dedicated client.
    pub fn transport(&self) -> &Transport {
        &self.base
    }

    // -- sub-client accessors ------------------------------------------------

    pub fn collections(&self) -> CollectionsClient<'_> {
        CollectionsClient { base: &self.base }
    }

    pub fn search(&self) -> SearchClient<'_> {
        SearchClient { base: &self.base }
    }

    pub fn users(&self) -> UsersClient<'_> {
        UsersClient { base: &self.base }
    }

    pub fn repositories(&self) -> RepositoriesClient<'_> {
        RepositoriesClient { base: &self.base }
    }
}

// ===========================================================================
// Sub-clients
// ===========================================================================

// ---- Collections ----------------------------------------------------------

pub struct CollectionsClient<'a> {
    base: &'a Transport,
}

impl CollectionsClient<'_> {
    /// List collections.
    pub fn list(&self) -> Result<Vec<CollectionInfo>> {
        self.base.get("/collections").context("get collections")
    }
}

// ---- Search ---------------------------------------------------------------

pub struct SearchClient<'a> {
    base: &'a Transport,
}

impl SearchClient<'_> {
    /// Fetch the first page of models.
    pub fn models(&self) -> Result<Vec<Model>> {
        self.base.get("/models")
    }

    /// Fetch all the information for one model, e.g. `openai-community/gpt2`.
    pub fn model(&self, id: &str) -> Result<Model> {
        self.base.get(&format!("/models/{id}"))
    }

    pub fn datasets(&self) -> Result<Vec<Dataset>> {
        self.base.get("/datasets")
    }

    pub fn dataset(&self, id: &str) -> Result<Dataset> {
        self.base.get(&format!("/datasets/{id}"))
    }

    /// Dataset tags grouped by type.
    pub fn dataset_tags(&self) -> Result<DatasetTags> {
        self.base.get("/datasets-tags-by-type")
    }

    pub fn spaces(&self) -> Result<Vec<Space>> {
        self.base.get("/spaces")
    }

    pub fn space(&self, repo_id: &str) -> Result<Space> {
        self.base.get(&format!("/spaces/{repo_id}"))
    }

    pub fn metrics(&self) -> Result<Vec<Metric>> {
        self.base.get("/metrics")
    }
}

// ---- Users ----------------------------------------------------------------

pub struct UsersClient<'a> {
    base: &'a Transport,
}

impl UsersClient<'_> {
    /// Information about the owner of the configured token.
    pub fn whoami(&self) -> Result<UserInfo> {
        self.base.get("/whoami-v2")
    }
}

// ---- Repositories ---------------------------------------------------------

pub struct RepositoriesClient<'a> {
    base: &'a Transport,
}

impl RepositoriesClient<'_> {
    pub fn create(&self, payload: &CreateRepositoryPayload) -> Result<()> {
        self.base
            .post_discard("/repos/create", payload)
            .context("create repository")
    }

    pub fn delete(&self, payload: &DeleteRepositoryPayload) -> Result<()> {
        self.base
            .delete_discard("/repos/delete", payload)
            .context("delete repository")
    }

    /// Rename a repository or transfer it from a user to an organization.
    pub fn move_repo(&self, payload: &MoveRepositoryPayload) -> Result<()> {
        self.base
            .post_discard("/repos/move", payload)
            .context("move repository")
    }

    pub fn update_visibility(
        &self,
        repo_type: RepoType,
        repo_id: &str,
        payload: &UpdateVisibilityPayload,
    ) -> Result<()> {
        self.base
            .put_discard(&format!("/repos/{}/{repo_id}", repo_type.as_str()), payload)
            .context("update repository visibility")
    }
}
