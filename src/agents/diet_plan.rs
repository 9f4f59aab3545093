mod request;
mod state;

pub use state::{DietPlanSnapshot, DietPlanState, FetchStage};

use crate::objects::{Diets, FetchError, FetcherConfig};
use std::collections::HashSet;
use uuid::Uuid;
use yew_agent::{Agent, AgentLink, Context, HandlerId};

#[derive(Debug, Clone)]
pub enum Request {
    Fetch,
}

#[derive(Debug, Clone)]
pub enum Response {
    Snapshot(DietPlanSnapshot),
}

#[derive(Debug)]
pub enum Message {
    Settled(Uuid, Result<Diets, FetchError>),
}

/// Owns the diet plan for as long as any component is bridged to it. Runs on
/// the UI thread, so subscribers only ever see complete snapshots.
pub struct DietPlanAgent {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
    config: FetcherConfig,
    state: DietPlanState,
}

impl DietPlanAgent {
    fn notify_subscribed(&self) {
        let snapshot = self.state.snapshot();

        for subscriber in &self.subscribers {
            if subscriber.is_respondable() {
                self.link
                    .respond(*subscriber, Response::Snapshot(snapshot.clone()));
            }
        }
    }

    fn fetch(&mut self) {
        let id = match self.state.begin() {
            Some(id) => id,
            None => {
                log::warn!("diet plan: fetch already in flight, request ignored");
                return;
            }
        };
        log::info!("diet plan: fetching {}", self.config.endpoint);
        self.notify_subscribed();

        let config = self.config.clone();
        self.link.send_future(async move {
            Message::Settled(id, request::fetch_diets(&config).await)
        });
    }

    fn settle(&mut self, id: Uuid, outcome: Result<Diets, FetchError>) {
        let summary = match &outcome {
            Ok(diets) => Ok(diets.all_diets.len()),
            Err(e) => Err(e.to_string()),
        };

        if !self.state.settle(id, outcome) {
            log::warn!("diet plan: discarding stale response {}", id);
            return;
        }
        match summary {
            Ok(count) => log::info!("diet plan: loaded {} sections", count),
            Err(e) => log::error!("diet plan: {}", e),
        }
        self.notify_subscribed();
    }
}

impl Agent for DietPlanAgent {
    type Reach = Context<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            config: FetcherConfig::default(),
            state: DietPlanState::new(),
        }
    }

    fn update(&mut self, msg: Self::Message) {
        match msg {
            Message::Settled(id, outcome) => self.settle(id, outcome),
        }
    }

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        match msg {
            Request::Fetch => self.fetch(),
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
        if id.is_respondable() {
            self.link
                .respond(id, Response::Snapshot(self.state.snapshot()));
        }
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
