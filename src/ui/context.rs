use std::sync::Arc;

use flume::Sender;

use crate::{catalog::Catalog, event::events::Event, reader::ReaderConfig};

pub struct AppContext {
    pub catalog: Arc<Catalog>,
    pub event_tx: Sender<Event>,
    pub reader: ReaderConfig,
}
