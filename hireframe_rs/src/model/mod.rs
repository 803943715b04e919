//! Wire-format records for the Xano backend.
//!
//! Shapes mirror the backend tables: numeric ids, optional columns as
//! `Option`, list columns defaulting to empty. `New*` structs are create
//! payloads, `*Patch` structs are partial updates.

mod job_post;
mod organization;
mod role;
mod team;
mod user;

pub use job_post::{JobPost, JobPostPatch, NewJobPost};
pub use organization::{NewOrganization, Organization};
pub use role::{builtin_roles, Role};
pub use team::{NewTeam, Team, TeamPatch};
pub use user::{User, UserPatch};
