use super::{Icon, IconStyle, MealCard, StreakCard};
use crate::agents::diet_plan::{DietPlanAgent, DietPlanSnapshot, FetchStage, Request, Response};
use crate::objects::{DietPlan, FetchError, MealKey, MealSelection};
use std::f64::consts::PI;
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

const RING_RADIUS: f64 = 20.0;

pub struct DietPlanView {
    agent: Box<dyn Bridge<DietPlanAgent>>,
    snapshot: Option<DietPlanSnapshot>,
    selection: MealSelection,
}

pub enum Message {
    AgentResponse(Response),
    Retry,
    ToggleMeal(MealKey),
    ToggleSection(String),
}

/// Reconciles `selection` with a fresh snapshot and tells whether the initial
/// fetch still has to be requested.
fn on_snapshot(selection: &mut MealSelection, snapshot: &DietPlanSnapshot) -> bool {
    match snapshot.stage {
        FetchStage::Idle => snapshot.diets.all_diets.is_empty(),
        FetchStage::Loaded => {
            selection.retain_known(&snapshot.diets.all_diets);
            false
        }
        _ => false,
    }
}

fn visible_sections(snapshot: &DietPlanSnapshot) -> &[DietPlan] {
    match snapshot.stage {
        FetchStage::Loaded => &snapshot.diets.all_diets,
        _ => &[],
    }
}

impl DietPlanView {
    fn apply_snapshot(&mut self, snapshot: DietPlanSnapshot) {
        if on_snapshot(&mut self.selection, &snapshot) {
            self.agent.send(Request::Fetch);
        }
        self.snapshot = Some(snapshot);
    }

    fn find_plan(&self, daytime: &str) -> Option<&DietPlan> {
        self.snapshot
            .as_ref()?
            .diets
            .all_diets
            .iter()
            .find(|plan| plan.daytime == daytime)
    }

    fn view_error(&self, ctx: &Context<Self>, err: &FetchError) -> Html {
        html! {
            <section class="section has-text-centered">
                <p class="has-text-danger mb-4">{err.to_string()}</p>
                <button class="button is-link" onclick={ctx.link().callback(|_| Message::Retry)}>{"Retry"}</button>
            </section>
        }
    }

    fn view_search_bar(&self) -> Html {
        html! {
            <div class="field has-addons">
                <div class="control has-icons-left is-expanded">
                    <input class="input" type="text" placeholder="Search Meals" />
                    <span class="icon is-left"><Icon name="search" /></span>
                </div>
                <div class="control">
                    <button class="button"><Icon name="filter_list" /></button>
                </div>
            </div>
        }
    }

    fn view_progress_ring(&self, plan: &DietPlan) -> Html {
        let circumference = 2.0 * PI * RING_RADIUS;
        let filled = circumference * plan.progress_status.fraction();

        html! {
            <figure class="image is-64x64 has-text-centered">
                <svg viewBox="0 0 50 50" width="50" height="50">
                    <circle cx="25" cy="25" r={RING_RADIUS.to_string()} fill="none" stroke="#eeeeee" stroke-width="4" />
                    <circle cx="25" cy="25" r={RING_RADIUS.to_string()} fill="none" stroke="#ff3860" stroke-width="4"
                        stroke-dasharray={format!("{:.2} {:.2}", filled, circumference)} transform="rotate(-90 25 25)" />
                </svg>
                <p class="is-size-7 has-text-grey">{format!("{} of {}", plan.progress_status.completed, plan.progress_status.total)}</p>
            </figure>
        }
    }

    fn view_section(&self, ctx: &Context<Self>, plan: &DietPlan) -> Html {
        let daytime = plan.daytime.clone();
        let select_all = match self.selection.is_section_fully_selected(plan) {
            true => "check_box",
            false => "check_box_outline_blank",
        };
        let on_toggle = ctx.link().callback(Message::ToggleMeal);

        html! {
            <section class="mb-5">
                <div class="level is-mobile">
                    <div class="level-left">
                        <div class="level-item">
                            <div>
                                <p class="title is-4">{plan.title()}</p>
                                <p class="subtitle is-6 has-text-grey">{&plan.timings}</p>
                            </div>
                        </div>
                    </div>
                    <div class="level-right">
                        <div class="level-item">
                            <button class="button is-white has-text-link" onclick={ctx.link().callback(move |_| Message::ToggleSection(daytime.clone()))}>
                                <Icon name={select_all} />
                                <span>{"Select All"}</span>
                            </button>
                        </div>
                        <div class="level-item">{self.view_progress_ring(plan)}</div>
                    </div>
                </div>
                { plan.recipes.iter().map(|recipe| {
                    let meal_key = plan.meal_key(recipe);
                    let selected = self.selection.is_selected(&meal_key);

                    html! {
                        <MealCard recipe={recipe.clone()} {meal_key} {selected} on_toggle={on_toggle.clone()} />
                    }
                }).collect::<Html>() }
            </section>
        }
    }

    fn view_plan(&self, ctx: &Context<Self>, snapshot: &DietPlanSnapshot) -> Html {
        html! {
            <>
                <StreakCard diets={snapshot.diets.clone()} />
                {self.view_search_bar()}
                { visible_sections(snapshot).iter().map(|plan| self.view_section(ctx, plan)).collect::<Html>() }
            </>
        }
    }
}

impl Component for DietPlanView {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            agent: DietPlanAgent::bridge(ctx.link().callback(Message::AgentResponse)),
            snapshot: None,
            selection: MealSelection::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::AgentResponse(Response::Snapshot(snapshot)) => {
                self.apply_snapshot(snapshot);
                true
            }
            Message::Retry => {
                self.agent.send(Request::Fetch);
                false
            }
            Message::ToggleMeal(meal_key) => {
                self.selection.toggle(meal_key);
                true
            }
            Message::ToggleSection(daytime) => match self.find_plan(&daytime).cloned() {
                Some(plan) => {
                    self.selection.toggle_all(&plan);
                    true
                }
                None => {
                    log::warn!("diet plan view: unknown section {}", daytime);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.snapshot {
            Some(snapshot) => match &snapshot.stage {
                FetchStage::Idle | FetchStage::Loading => html! {
                    <section class="section has-text-centered">
                        <progress class="progress is-small is-link" max="100"></progress>
                        <p class="has-text-grey">{"Loading..."}</p>
                    </section>
                },
                FetchStage::Failed(err) => self.view_error(ctx, err),
                FetchStage::Loaded => self.view_plan(ctx, snapshot),
            },
            None => html! {
                <Icon name="hourglass_empty" style={IconStyle::Outlined} />
            },
        }
    }
}
