//! View models: the state each screen binds to.
//!
//! Every model owns its data, a busy flag and the last error message. One
//! repository call runs per user action; the view layer is expected to
//! disable duplicate triggers while the busy flag is set, and a failed
//! call stores a message instead of panicking. Nothing here retries or
//! cancels an in-flight operation.

pub mod birth_plan;
pub mod clients;
pub mod profile;
pub mod public_link;
pub mod recommendations;

pub use birth_plan::BirthPlanViewModel;
pub use clients::ClientsViewModel;
pub use profile::ProfileViewModel;
pub use public_link::PublicLinkViewModel;
pub use recommendations::RecommendationsViewModel;
