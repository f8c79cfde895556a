use crate::landmark::{Landmark, Role};
use std::collections::HashMap;

/// Two-tier role lookup over one frame: a landmark carrying the role's
/// canonical name wins, otherwise the role's fixed position is used.
pub struct RoleResolver<'a> {
    frame: &'a [Option<Landmark>],
    by_name: HashMap<&'a str, &'a Landmark>,
}

impl<'a> RoleResolver<'a> {
    pub fn new(frame: &'a [Option<Landmark>]) -> Self {
        let mut by_name = HashMap::new();
        for lm in frame.iter().flatten() {
            if let Some(name) = lm.name.as_deref() {
                // Later duplicates overwrite earlier ones
                by_name.insert(name, lm);
            }
        }
        Self { frame, by_name }
    }

    pub fn resolve(&self, role: Role) -> Option<&'a Landmark> {
        self.by_name
            .get(role.name())
            .copied()
            .or_else(|| self.by_index(role.fallback_index()))
    }

    fn by_index(&self, idx: usize) -> Option<&'a Landmark> {
        self.frame
            .get(idx)
            .and_then(Option::as_ref)
            .filter(|lm| !lm.is_empty())
    }
}
