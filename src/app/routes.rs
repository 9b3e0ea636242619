use std::collections::HashMap;

use crate::app::next::Handler;

/// Exact path → ordered handler chain.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<String, Vec<Handler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the chain for `path`, creating the chain if needed.
    pub fn insert(&mut self, path: impl Into<String>, handler: Handler) {
        self.routes.entry(path.into()).or_default().push(handler);
    }

    /// Looks up a chain by exact string equality. No prefix or wildcard match.
    pub fn get(&self, path: &str) -> Option<&[Handler]> {
        self.routes.get(path).map(Vec::as_slice)
    }

    pub fn chain_len(&self, path: &str) -> usize {
        self.get(path).map_or(0, <[Handler]>::len)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (path, chain) in &self.routes {
            map.entry(path, &chain.len());
        }
        map.finish()
    }
}
