use crate::address::ObjectId;

/// What the ledger reports back after executing a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    digest: String,
    effects: Option<Effects>,
}

impl ExecutionResult {
    /// Result for transaction `digest`
    pub fn new(digest: &str, effects: Option<Effects>) -> Self {
        ExecutionResult {
            digest: digest.to_string(),
            effects,
        }
    }

    /// Transaction digest
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// `None` when the node was not asked for, or did not return, effects
    pub fn effects(&self) -> Option<&Effects> {
        self.effects.as_ref()
    }

    /// Id of the first object the transaction created
    pub fn first_created_object_id(&self) -> Option<&ObjectId> {
        self.effects
            .as_ref()
            .and_then(|effects| effects.created().first())
            .map(CreatedObject::object_id)
    }
}

/// Effects of an executed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effects {
    status: ExecutionStatus,
    created: Vec<CreatedObject>,
}

impl Effects {
    /// Effects with `created` in node order
    pub fn new(status: ExecutionStatus, created: Vec<CreatedObject>) -> Self {
        Effects { status, created }
    }

    /// Whether execution succeeded on chain
    pub fn status(&self) -> &ExecutionStatus {
        &self.status
    }

    /// Created objects, in the order the node lists them
    pub fn created(&self) -> &[CreatedObject] {
        &self.created
    }
}

/// On-chain outcome of a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// Executed and committed
    Success,
    /// Aborted, with the node's error message. Gas is still charged.
    Failure(String),
}

/// Object created as a side effect of execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedObject {
    object_id: ObjectId,
}

impl CreatedObject {
    /// Object created with id `object_id`
    pub fn new(object_id: ObjectId) -> Self {
        CreatedObject { object_id }
    }

    /// Id of the new object
    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }
}
