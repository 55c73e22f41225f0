//! Authorization Policy
//!
//! Pure predicates over an actor and a notice. Evaluated both by the
//! delete use case and by clients deciding whether to show a delete
//! control.

use kernel::actor::Actor;
use kernel::role::Role;

use crate::domain::entities::Notice;

/// May this actor delete this notice?
///
/// Admins may delete any notice. Teachers may delete only their own.
/// Students may delete nothing.
pub fn can_delete(actor: &Actor, notice: &Notice) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Teacher => notice.author_id == actor.user_id,
        Role::Student => false,
    }
}
