use crate::error::{RepoSearchError, Result};
use crate::github::RepositorySearch;
use crate::models::{PinId, RepositoryRecord, SearchSnapshot};
use crate::presenter::Presenter;
use crate::session::{SearchRequest, SearchSession};
use ractor::rpc::CallResult;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(5);

/// Actor that owns the search session, the debounce timer and request dispatch
pub struct SearchController;

/// State for the search controller
pub struct SearchControllerState {
    session: SearchSession,
    backend: Arc<dyn RepositorySearch>,
    debounce: Duration,
    pending_timer: Option<JoinHandle<()>>,
    debounce_tick: u64,
}

/// Events the search widget feeds into the controller
#[derive(Debug)]
pub enum SearchMessage {
    /// The input text changed
    Input(String),
    /// A debounce timer expired; carries the tick it was armed with
    DebounceElapsed(u64),
    /// A backend request finished
    SearchCompleted {
        seq: u64,
        outcome: Result<Vec<RepositoryRecord>>,
    },
    /// The input gained focus or was clicked
    InputFocused,
    /// A click landed outside the input and the dropdown
    OutsideClick,
    EscapePressed,
    /// A dropdown row was chosen
    SelectRow(usize),
    /// The remove control of a pinned entry was used
    RemovePinned(PinId),
    GetSnapshot(RpcReplyPort<SearchSnapshot>),
}

/// Arguments for starting the controller
pub struct SearchControllerArgs {
    pub presenter: Box<dyn Presenter>,
    pub backend: Arc<dyn RepositorySearch>,
    pub debounce: Duration,
}

impl SearchController {
    pub async fn spawn_with(args: SearchControllerArgs) -> Result<ActorRef<SearchMessage>> {
        let debounce = args.debounce;
        let (actor_ref, _handle) = Actor::spawn(None, SearchController, args)
            .await
            .map_err(|e| RepoSearchError::ActorError(format!("Failed to start search controller: {}", e)))?;

        info!(debounce_ms = debounce.as_millis() as u64, "Search controller started");
        Ok(actor_ref)
    }

    /// Asks a running controller for a copy of its state
    pub async fn snapshot(controller: &ActorRef<SearchMessage>) -> Result<SearchSnapshot> {
        let call_result = controller
            .call(|reply| SearchMessage::GetSnapshot(reply), Some(SNAPSHOT_TIMEOUT))
            .await
            .map_err(|e| RepoSearchError::ActorError(format!("Failed to query search controller: {}", e)))?;

        match call_result {
            CallResult::Success(snapshot) => Ok(snapshot),
            CallResult::Timeout => Err(RepoSearchError::ActorError(
                "Timeout waiting for search controller snapshot".to_string(),
            )),
            CallResult::SenderError => Err(RepoSearchError::ActorError(
                "Search controller dropped the snapshot request".to_string(),
            )),
        }
    }

    fn arm_debounce(myself: &ActorRef<SearchMessage>, state: &mut SearchControllerState) {
        if let Some(timer) = state.pending_timer.take() {
            timer.abort();
        }

        state.debounce_tick += 1;
        let tick = state.debounce_tick;
        let delay = state.debounce;
        let myself = myself.clone();

        state.pending_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = myself.send_message(SearchMessage::DebounceElapsed(tick)) {
                error!("Failed to send DebounceElapsed message: {}", e);
            }
        }));
    }

    fn dispatch(myself: &ActorRef<SearchMessage>, backend: Arc<dyn RepositorySearch>, request: SearchRequest) {
        let myself = myself.clone();

        tokio::spawn(async move {
            let SearchRequest { seq, query } = request;
            debug!(seq, %query, "Dispatching repository search");

            let outcome = backend.search(&query).await;

            if let Err(e) = myself.send_message(SearchMessage::SearchCompleted { seq, outcome }) {
                error!("Failed to send SearchCompleted message: {}", e);
            }
        });
    }
}

#[ractor::async_trait]
impl Actor for SearchController {
    type Msg = SearchMessage;
    type State = SearchControllerState;
    type Arguments = SearchControllerArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> std::result::Result<Self::State, ActorProcessingErr> {
        debug!("Starting search controller");

        Ok(SearchControllerState {
            session: SearchSession::new(args.presenter),
            backend: args.backend,
            debounce: args.debounce,
            pending_timer: None,
            debounce_tick: 0,
        })
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        match message {
            SearchMessage::Input(text) => {
                state.session.on_input(text);
                Self::arm_debounce(&myself, state);
            }

            SearchMessage::DebounceElapsed(tick) => {
                // an aborted timer may already have queued its message
                if tick != state.debounce_tick {
                    debug!(tick, current = state.debounce_tick, "Ignoring superseded debounce timer");
                    return Ok(());
                }
                state.pending_timer = None;

                if let Some(request) = state.session.fire() {
                    Self::dispatch(&myself, state.backend.clone(), request);
                }
            }

            SearchMessage::SearchCompleted { seq, outcome } => {
                state.session.on_search_completed(seq, outcome);
            }

            SearchMessage::InputFocused => state.session.on_input_focused(),

            SearchMessage::OutsideClick => state.session.on_outside_click(),

            SearchMessage::EscapePressed => state.session.on_escape(),

            SearchMessage::SelectRow(index) => {
                if state.session.select_row(index).is_none() {
                    debug!(index, "Ignoring selection of a row that is not rendered");
                }
            }

            SearchMessage::RemovePinned(id) => {
                state.session.remove_pinned(id);
            }

            SearchMessage::GetSnapshot(reply) => {
                if !reply.is_closed() {
                    let _ = reply.send(state.session.snapshot());
                }
            }
        }

        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        if let Some(timer) = state.pending_timer.take() {
            timer.abort();
        }
        info!(
            pinned = state.session.pinned().len(),
            "Search controller stopped"
        );
        Ok(())
    }
}
