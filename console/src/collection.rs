//! Per-collection view state: the items last fetched and whether a fetch is
//! in flight.

use payloads::ClientError;

/// Issued when a fetch starts. Only the most recent ticket may write its
/// result back into the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// What happened to a fetch result handed back to [`CollectionState`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// The items were replaced.
    Applied,
    /// The fetch failed; the previous items are kept.
    Failed(ClientError),
    /// A newer fetch was started (or the page went away) before this one
    /// resolved, so the result was dropped.
    Stale(Option<ClientError>),
}

/// What a page should render for a collection. Loading always takes
/// precedence over emptiness.
#[derive(Debug, PartialEq)]
pub enum CollectionView<'a, T> {
    Loading,
    Empty,
    Items(&'a [T]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    items: Vec<T>,
    loading: bool,
    loaded: bool,
    generation: u64,
    closed: bool,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            generation: 0,
            closed: false,
        }
    }
}

impl<T> CollectionState<T> {
    /// A collection that is about to be fetched on mount. Starting in the
    /// loading state keeps the first render from flashing the empty message.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once any fetch has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn view(&self) -> CollectionView<'_, T> {
        if self.loading {
            CollectionView::Loading
        } else if self.items.is_empty() {
            CollectionView::Empty
        } else {
            CollectionView::Items(&self.items)
        }
    }

    /// Mark a fetch as started and return the ticket its result must be
    /// presented with.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket {
            generation: self.generation,
        }
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<T>, ClientError>,
    ) -> LoadOutcome {
        if self.closed || ticket.generation != self.generation {
            return LoadOutcome::Stale(result.err());
        }

        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                LoadOutcome::Applied
            }
            Err(e) => LoadOutcome::Failed(e),
        }
    }

    /// Stop accepting results. Anything still in flight is dropped when it
    /// resolves.
    pub fn close(&mut self) {
        self.closed = true;
        self.generation += 1;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
