//! Generic list and instance operations shared by all resources

use crate::error::{Error, Result};
use crate::pagination::{JsonPageDecoder, ListOptions, Page, PageDecoder, PageOptions, RecordStream};
use crate::template;
use crate::types::StringMap;
use crate::version::Version;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

// ============================================================================
// Resource descriptors
// ============================================================================

/// A REST resource record
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Key holding the records in a list payload
    const LIST_KEY: &'static str;

    /// List path template, relative to the API version
    const LIST_PATH: &'static str;
}

/// A resource whose instances have their own URI
pub trait Addressable: Resource {
    /// Instance path template; `{sid}` names the instance
    const INSTANCE_PATH: &'static str;
}

/// Resources that can be read page by page
pub trait Listable: Resource {
    /// Filter parameters accepted by the list endpoint
    type Filter: ToParams + Default + Send + Sync;
}

/// Resources that can be created by posting to the list
pub trait Creatable: Resource {
    /// Creation parameters
    type Create: ToParams + Send + Sync;

    /// What the API answers with after a create
    type Created: DeserializeOwned;
}

/// Instances that can be fetched
pub trait Fetchable: Addressable {}

/// Instances that can be updated
pub trait Updatable: Addressable {
    /// Update parameters
    type Update: ToParams + Send + Sync;
}

/// Instances that can be deleted
pub trait Removable: Addressable {}

/// Conversion of typed parameters into request parameters.
///
/// Missing required values are reported as `InvalidArgument` here, before
/// any request is made.
pub trait ToParams {
    fn to_params(&self) -> Result<StringMap>;
}

impl ToParams for () {
    fn to_params(&self) -> Result<StringMap> {
        Ok(StringMap::new())
    }
}

impl ToParams for StringMap {
    fn to_params(&self) -> Result<StringMap> {
        Ok(self.clone())
    }
}

/// Fail with `InvalidArgument` when a required value is blank
pub(crate) fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!("{name} is required")));
    }
    Ok(())
}

fn render_path(path: &str, solution: &StringMap) -> Result<String> {
    for name in template::placeholders(path) {
        if let Some(value) = solution.get(&name) {
            require(&name, value)?;
        }
    }
    template::render(path, solution)
}

// ============================================================================
// List
// ============================================================================

/// The collection of one resource under its parent path
pub struct ResourceList<R> {
    version: Version,
    solution: StringMap,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceList<R> {
    /// Create a list scoped by the path `solution`
    pub fn new(version: Version, solution: StringMap) -> Self {
        Self {
            version,
            solution,
            _resource: PhantomData,
        }
    }

    /// Identifiers locating this list
    pub fn solution(&self) -> &StringMap {
        &self.solution
    }

    /// The version this list belongs to
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Rendered list path
    pub fn uri(&self) -> Result<String> {
        render_path(R::LIST_PATH, &self.solution)
    }

    fn decoder() -> Arc<dyn PageDecoder<Record = R>> {
        Arc::new(JsonPageDecoder::<R>::new(R::LIST_KEY))
    }
}

impl<R: Listable> ResourceList<R> {
    /// Lazily stream records, fetching pages as they are consumed
    pub async fn stream(&self, filter: &R::Filter, options: &ListOptions) -> Result<RecordStream<R>> {
        let params = filter.to_params()?;
        self.version
            .stream(Self::decoder(), &self.uri()?, params, options)
            .await
    }

    /// Read up to `limit` records into memory
    pub async fn list(&self, filter: &R::Filter, options: &ListOptions) -> Result<Vec<R>> {
        let params = filter.to_params()?;
        self.version
            .list(Self::decoder(), &self.uri()?, params, options)
            .await
    }

    /// Fetch a single page with explicit paging parameters
    pub async fn page(&self, filter: &R::Filter, options: &PageOptions) -> Result<Page<R>> {
        let params = filter.to_params()?;
        self.version
            .page(Self::decoder(), &self.uri()?, params, options)
            .await
    }

    /// Fetch the page at a URL handed out by the API
    pub async fn get_page(&self, url: &str) -> Result<Page<R>> {
        self.version.get_page(Self::decoder(), url).await
    }
}

impl<R: Creatable> ResourceList<R> {
    /// Create a new instance
    pub async fn create(&self, params: &R::Create) -> Result<R::Created> {
        let params = params.to_params()?;
        self.version.create(&self.uri()?, &params).await
    }
}

impl<R: Addressable> ResourceList<R> {
    /// Context for the instance identified by `sid`
    pub fn get(&self, sid: impl Into<String>) -> ResourceContext<R> {
        let mut solution = self.solution.clone();
        solution.insert("sid".to_string(), sid.into());
        ResourceContext::new(self.version.clone(), solution)
    }
}

impl<R> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        Self {
            version: self.version.clone(),
            solution: self.solution.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for ResourceList<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceList")
            .field("resource", &std::any::type_name::<R>())
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Context
// ============================================================================

/// One addressable instance of a resource
pub struct ResourceContext<R> {
    version: Version,
    solution: StringMap,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Addressable> ResourceContext<R> {
    /// Create a context from a solution that includes `sid`
    pub fn new(version: Version, solution: StringMap) -> Self {
        Self {
            version,
            solution,
            _resource: PhantomData,
        }
    }

    /// SID of the instance
    pub fn sid(&self) -> Option<&str> {
        self.solution.get("sid").map(String::as_str)
    }

    /// Identifiers locating this instance
    pub fn solution(&self) -> &StringMap {
        &self.solution
    }

    /// The version this instance belongs to
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Rendered instance path
    pub fn uri(&self) -> Result<String> {
        render_path(R::INSTANCE_PATH, &self.solution)
    }
}

impl<R: Fetchable> ResourceContext<R> {
    /// Fetch the instance
    pub async fn fetch(&self) -> Result<R> {
        self.version.fetch(&self.uri()?).await
    }
}

impl<R: Updatable> ResourceContext<R> {
    /// Update the instance, returning its new state
    pub async fn update(&self, params: &R::Update) -> Result<R> {
        let params = params.to_params()?;
        self.version.update(&self.uri()?, &params).await
    }
}

impl<R: Removable> ResourceContext<R> {
    /// Delete the instance
    pub async fn remove(&self) -> Result<bool> {
        self.version.remove(&self.uri()?).await
    }
}

impl<R> Clone for ResourceContext<R> {
    fn clone(&self) -> Self {
        Self {
            version: self.version.clone(),
            solution: self.solution.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for ResourceContext<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceContext")
            .field("resource", &std::any::type_name::<R>())
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}
