use crate::objects::{Diets, FetchError};
use std::rc::Rc;
use uuid::Uuid;

/// # Diet Plan State
///
/// ## Stages and Transitions
///
/// * Idle (S)
/// * begin (T)
/// * Loading (S)
/// * settle (T)
/// * Loaded (S) or Failed (S)
///
/// `begin` is accepted from every stage except Loading. Loaded data survives a
/// failed settle and is only ever replaced as a whole by a successful one.
#[derive(Debug)]
pub struct DietPlanState {
    stage: FetchStage,
    diets: Rc<Diets>,
    in_flight: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStage {
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

/// What observers get to see after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct DietPlanSnapshot {
    pub stage: FetchStage,
    pub diets: Rc<Diets>,
}

impl DietPlanState {
    pub fn new() -> Self {
        Self {
            stage: FetchStage::Idle,
            diets: Rc::new(Diets::default()),
            in_flight: None,
        }
    }

    /// Starts a fetch and returns its token, or `None` while another one is in flight.
    pub fn begin(&mut self) -> Option<Uuid> {
        match self.in_flight {
            Some(_) => None,
            None => {
                let id = Uuid::new_v4();

                self.in_flight = Some(id);
                self.stage = FetchStage::Loading;
                Some(id)
            }
        }
    }

    /// Applies the outcome of the fetch identified by `id`. Returns `false` and
    /// changes nothing when `id` is not the fetch in flight.
    pub fn settle(&mut self, id: Uuid, outcome: Result<Diets, FetchError>) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }

        self.in_flight = None;
        self.stage = match outcome {
            Ok(diets) => {
                self.diets = Rc::new(diets);
                FetchStage::Loaded
            }
            Err(e) => FetchStage::Failed(e),
        };
        true
    }

    pub fn stage(&self) -> &FetchStage {
        &self.stage
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&FetchError> {
        match &self.stage {
            FetchStage::Failed(e) => Some(e),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn diets(&self) -> &Diets {
        &self.diets
    }

    pub fn snapshot(&self) -> DietPlanSnapshot {
        DietPlanSnapshot {
            stage: self.stage.clone(),
            diets: self.diets.clone(),
        }
    }
}

impl Default for DietPlanState {
    fn default() -> Self {
        Self::new()
    }
}
