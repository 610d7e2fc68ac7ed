/// Position of a [`CursorStream`](super::CursorStream) in its paging cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamState {
    /// The next call fetches a page with the current params.
    Fetching,
    /// Buffered items of the last page are being handed out. `next_cursor`
    /// is the token to continue with once they run out.
    Emitting { next_cursor: Option<String> },
    /// The last page carried no cursor.
    Done,
    /// A fetch failed. The error has been yielded.
    Failed,
}

impl StreamState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamState::Done | StreamState::Failed)
    }
}
