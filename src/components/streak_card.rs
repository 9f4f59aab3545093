use super::Icon;
use crate::objects::{Diets, SectionStatus};
use std::rc::Rc;
use yew::prelude::*;

pub struct StreakCard;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub diets: Rc<Diets>,
}

impl StreakCard {
    fn view_section_badge(&self, daytime: &str, status: SectionStatus) -> Html {
        let (color, icon) = match status {
            SectionStatus::Complete => ("has-background-success", Some("check")),
            SectionStatus::Partial => ("has-background-link", Some("schedule")),
            SectionStatus::Pending => ("has-background-grey-lighter", None),
        };

        html! {
            <div class="column has-text-centered">
                <span class={classes!("tag", "is-rounded", "is-medium", "has-text-white", color)}>
                    {match icon {
                        Some(name) => html!(<Icon name={name} />),
                        None => html!(),
                    }}
                </span>
                <p class="is-size-7 has-text-grey">{daytime}</p>
            </div>
        }
    }
}

impl Component for StreakCard {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let diets = &ctx.props().diets;

        html! {
            <div class="box has-background-success-light">
                <div class="level is-mobile">
                    <div class="level-left"><p class="level-item has-text-weight-semibold">{"Diet Streak"}</p></div>
                    <div class="level-right">
                        <span class="level-item tag is-link is-light is-rounded">
                            <Icon name="local_fire_department" />
                            {format!("{} Streak", diets.diet_streak.len())}
                        </span>
                    </div>
                </div>
                <div class="tags">
                    { diets.diet_streak.iter().map(|label| html!(<span class="tag is-white">{label}</span>)).collect::<Html>() }
                </div>
                <div class="columns is-mobile">
                    { diets.all_diets.iter().map(|plan| self.view_section_badge(&plan.daytime, plan.progress_status.status())).collect::<Html>() }
                </div>
            </div>
        }
    }
}
