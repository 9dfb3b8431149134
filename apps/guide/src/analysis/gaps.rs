//! Skill gap derivation.

use crate::models::career::SkillSet;

/// Required skills the user does not have: `required - user` over normalized
/// tokens. Pure and total; the result is always a subset of `required` and
/// never intersects `user`.
pub fn missing_skills(user: &SkillSet, required: &SkillSet) -> SkillSet {
    required.difference(user).cloned().collect()
}
