//! Opaque secret storage boundary.
//!
//! The platform keychain (or whatever stands in for it) is a collaborator,
//! not part of this crate; the core only needs get/set/delete of a small
//! blob keyed by a fixed service/account pair.

/// Service key under which all BirthPrep credentials are stored.
pub const CREDENTIAL_SERVICE: &str = "BirthPrepPro.Supabase";

/// Account key for the serialized auth session.
pub const SESSION_ACCOUNT: &str = "session";

/// Account key for the public profile page token.
pub const PROFILE_TOKEN_ACCOUNT: &str = "public_profile_token";

#[derive(Debug, thiserror::Error)]
#[error("credential store failure: {0}")]
pub struct CredentialError(pub String);

pub trait CredentialStore: Send + Sync {
    fn get(
        &self,
        service: &str,
        account: &str,
    ) -> Result<Option<Vec<u8>>, CredentialError>;

    fn set(
        &self,
        service: &str,
        account: &str,
        value: &[u8],
    ) -> Result<(), CredentialError>;

    /// Deleting an absent entry is not an error.
    fn delete(
        &self,
        service: &str,
        account: &str,
    ) -> Result<(), CredentialError>;
}
