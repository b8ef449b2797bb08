pub mod profile;
pub mod session;
pub mod team;

pub use profile::Profile;
pub use session::{RequestContext, Session};
pub use team::{Team, TeamMembership};
