//! Domain entities
//!
//! Plain structs used by services and handlers, decoupled from the storage
//! schema. An association field (`Project::owner`, `Comment::user`, ...)
//! is `Some` only when the repository eager-loaded it for that call.
//!
//! Freshly built entities carry `id == 0` and epoch timestamps until a
//! repository `create` writes the storage-assigned values back.

pub mod comment;
pub mod deliverable;
pub mod feedback;
pub mod milestone;
pub mod project;
pub mod project_member;
pub mod reaction;
pub mod role;
pub mod user;

pub use comment::{Comment, CommentPatch};
pub use deliverable::{Deliverable, DeliverablePatch};
pub use feedback::{Feedback, FeedbackPatch};
pub use milestone::{Milestone, MilestonePatch};
pub use project::{Project, ProjectPatch};
pub use project_member::{ProjectMember, ProjectMemberPatch};
pub use reaction::{Reaction, ReactionPatch};
pub use role::{Role, RolePatch};
pub use user::{User, UserPatch};

/// Storage-assigned surrogate identifier
pub type Id = i32;

/// Common surface of every entity family
pub trait Entity {
    /// Resource name used in not-found errors and log lines
    const RESOURCE: &'static str;

    fn id(&self) -> Id;
}
