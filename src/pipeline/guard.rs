use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Fresh,
    AlreadySeen,
}

/// Activity ids seen during one batch run. A new guard starts empty.
#[derive(Debug, Default)]
pub struct DuplicateGuard {
    seen: HashSet<String>,
}

impl DuplicateGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_and_register(&mut self, id: &str) -> Registration {
        if self.seen.contains(id) {
            Registration::AlreadySeen
        } else {
            self.seen.insert(id.to_string());
            Registration::Fresh
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
