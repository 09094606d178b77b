use std::future::Future;

use crate::domain::types::Profile;
use crate::error::ProfilesServiceError;

/// The persistence boundary: a remote `profiles` table reachable only through
/// insert and ordered select.
///
/// Methods return `Send` futures so stores can be driven from spawned tasks
/// and shared in-flight fetches.
pub trait ProfileStore: Clone + Send + Sync + 'static {
    /// Insert one row. Called exactly once per submission.
    fn insert(
        &self,
        profile: &Profile,
    ) -> impl Future<Output = Result<(), ProfilesServiceError>> + Send;

    /// Every row, ordered by `full_name` ascending. Collation is the store's.
    fn list_by_full_name(
        &self,
    ) -> impl Future<Output = Result<Vec<Profile>, ProfilesServiceError>> + Send;
}
