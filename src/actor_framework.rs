use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Documents, Patches, and Write Hooks)
// =============================================================================

/// Trait that any document must implement to be kept by a `ResourceActor`
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the document
    fn id(&self) -> &Self::Id;

    /// Build a document from a merge write that targets an absent ID.
    ///
    /// Fails when the patch does not carry every required field.
    fn from_patch(id: Self::Id, patch: Self::Patch) -> Result<Self, String>;

    // --- Write Hooks ---

    /// Runs on the candidate document before any write is persisted.
    fn on_write(&self) -> Result<(), String> { Ok(()) }
    /// Field-level upsert: only the fields present in the patch change.
    fn on_merge(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> { Ok(()) }
}

/// How a `Put` lands on the stored document.
#[derive(Debug)]
pub enum Write<T: Entity> {
    /// Store the document whole, discarding whatever was stored under its ID.
    Replace(T),
    /// Update only the patched fields, creating the document if it is absent.
    ///
    /// An absent document the patch cannot build fails with `NotFound`.
    Merge { id: T::Id, patch: T::Patch },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Write rejected: {0}")]
    Rejected(String),
    #[error("No document to merge into: {0}")]
    NotFound(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Put {
        write: Write<T>,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    #[cfg(test)]
    Count {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// In-memory document store. Listing order is whatever the map yields.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs until every client handle has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Store starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(count = items.len(), "Listed documents");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Put { write, respond_to } => {
                    let _ = respond_to.send(self.handle_put(write));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                #[cfg(test)]
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!("Store stopped");
    }

    /// Writes are applied to a candidate copy so a rejected write leaves the
    /// stored document untouched.
    fn handle_put(&mut self, write: Write<T>) -> Result<T, FrameworkError> {
        let candidate = match write {
            Write::Replace(doc) => doc,
            Write::Merge { id, patch } => match self.store.get(&id) {
                Some(existing) => {
                    let mut doc = existing.clone();
                    doc.on_merge(patch).map_err(FrameworkError::Rejected)?;
                    doc
                }
                None => {
                    let key = id.to_string();
                    T::from_patch(id, patch).map_err(|e| {
                        debug!(id = %key, error = %e, "Merge target absent");
                        FrameworkError::NotFound(key)
                    })?
                }
            },
        };

        if let Err(e) = candidate.on_write() {
            warn!(id = %candidate.id(), error = %e, "Write rejected");
            return Err(FrameworkError::Rejected(e));
        }

        debug!(id = %candidate.id(), "Document written");
        self.store.insert(candidate.id().clone(), candidate.clone());
        Ok(candidate)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<bool, FrameworkError> {
        match self.store.get(&id) {
            Some(doc) => {
                doc.on_delete().map_err(FrameworkError::Rejected)?;
                self.store.remove(&id);
                debug!(id = %id, "Document deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn put(&self, write: Write<T>) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Put { write, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Delete { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Count { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
