use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::session::Session;

/// Authorize-then-handle contract every business operation implements.
///
/// `execute` drives the session's authorization status: a session already
/// marked authorized skips the `authorize` gate entirely, which is how one
/// module invokes another's use case without re-checking. That bypass is
/// only reachable from code that explicitly marks a session authorized;
/// sessions built by the HTTP middleware always start unauthorized and are
/// gated on every call.
#[async_trait]
pub trait UseCase: Send + Sync {
  type Params: Send + Sync;
  type Output: Send;
  type Error: Send;

  /// Gate: inspect the session, loading minimal state where needed, and
  /// fail on missing authority. Returning `Ok(())` admits the call.
  async fn authorize(
    &self,
    params: &Self::Params,
    session: &Session,
  ) -> Result<(), Self::Error>;

  /// The operation itself, assuming authorization already passed.
  async fn handle(&self, params: Self::Params) -> Result<Self::Output, Self::Error>;

  /// Runs `authorize` (unless the session is already authorized), then
  /// `handle`. An authorize error aborts before `handle` runs; `handle`
  /// errors propagate unchanged.
  async fn execute(
    &self,
    params: Self::Params,
    session: &mut Session,
  ) -> Result<Self::Output, Self::Error> {
    if !session.is_authorized() {
      session.set_as_authorizing();
      self.authorize(&params, session).await?;
      session.set_as_authorized();
    }
    self.handle(params).await
  }
}

/// The session's distinct id as a user uuid, when it carries one.
pub fn session_user_id(session: &Session) -> Option<Uuid> {
  Uuid::parse_str(session.distinct_id()).ok()
}
