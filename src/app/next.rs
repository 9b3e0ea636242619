use std::sync::Arc;

use crate::http::request::Request;
use crate::http::response::Response;

/// A registered unit of the middleware chain.
pub type Handler = Arc<dyn Fn(&Request, &mut Response, &mut Next<'_>) + Send + Sync>;

/// Dispatch context for one pass over a handler chain.
///
/// The cursor is shared by every handler in the pass. Calling
/// [`Next::proceed`] again, from any handler, continues from wherever the
/// cursor currently is, and does nothing once the chain is exhausted.
pub struct Next<'a> {
    chain: &'a [Handler],
    cursor: usize,
    request: &'a Request,
}

impl<'a> Next<'a> {
    pub fn new(chain: &'a [Handler], request: &'a Request) -> Self {
        Self {
            chain,
            cursor: 0,
            request,
        }
    }

    /// Invokes the handler under the cursor, advancing the cursor first.
    ///
    /// Downstream handlers still run when the response is already finished.
    pub fn proceed(&mut self, res: &mut Response) {
        let chain = self.chain;
        let Some(handler) = chain.get(self.cursor) else {
            return;
        };
        self.cursor += 1;

        let request = self.request;
        handler(request, res, self);
    }

    /// Number of handlers already invoked in this pass.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.chain.len()
    }
}
