use crate::encounter::{BattleTemplate, Encounter};
use crate::settings::EditContext;
use legalfix_types::{Pokemon, ids};
use tracing::debug;

/// Set every valid ribbon (plus a random valid mark) or clear them all.
///
/// No validation pass follows; the ribbon applicator is trusted.
pub fn set_suggested_ribbons(
    pk: &mut Pokemon,
    set: &BattleTemplate,
    enc: &Encounter,
    all_valid: bool,
    ctx: &EditContext<'_>,
) {
    if !all_valid {
        ctx.ribbons.clear_all_valid_ribbons(pk);
        return;
    }

    ctx.ribbons.set_all_valid_ribbons(pk);
    if pk.supports_marks()
        && pk.species != ids::SHEDINJA
        && let Some(mark) = ctx.marks.random_valid_mark(pk, set, enc)
    {
        debug!(mark = mark.ribbon_name(), species = pk.species, "applying mark");
        pk.ribbons.set_mark(mark);
    }
}
